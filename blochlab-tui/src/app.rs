//! Application state and logic.

use std::time::{Duration, Instant};

use blochlab::{Axis, BlochAnimator, Session, Transition, TransitionFrame, VisualizeOutcome};
use crossterm::event::KeyEvent;
use tracing::{debug, info};

use crate::config::Config;
use crate::events::{AngleInput, Command};

/// Rotation presets offered by the angle dialog, as multiples of π.
pub const ANGLE_PRESETS: [f64; 4] = [0.25, 0.5, 1.0, 2.0];

/// Largest accepted free-form multiple of π, in either direction.
pub const MAX_ANGLE_MULTIPLE: f64 = 2.0;

/// Parse a free-form angle entry as a multiple of π.
pub fn parse_angle_multiple(text: &str) -> Result<f64, String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(String::from("Enter a multiple of π"));
    }
    let value: f64 = text
        .parse()
        .map_err(|_| format!("'{}' is not a number", text))?;
    if !value.is_finite() || value.abs() > MAX_ANGLE_MULTIPLE {
        return Err(format!(
            "Angle must be within [-{m}π, {m}π]",
            m = MAX_ANGLE_MULTIPLE
        ));
    }
    Ok(value)
}

/// Pending rotation waiting for an angle.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleDialog {
    pub axis: Axis,
    /// Highlighted preset
    pub selected: usize,
    /// Free-form entry buffer
    pub entry: String,
    /// Last entry error
    pub error: Option<String>,
}

impl AngleDialog {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            selected: 0,
            entry: String::new(),
            error: None,
        }
    }
}

/// Modal dialogs, drawn over the main window.
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Angle(AngleDialog),
    About,
}

/// What the angle dialog decided after a key.
enum AngleAction {
    Stay,
    Cancel,
    Apply(Axis, f64),
}

/// Playback position within a rendered transition.
#[derive(Debug, Clone)]
pub struct Playback {
    transition: Transition,
    /// Fractional frame position
    position: f64,
}

impl Playback {
    pub fn new(transition: Transition) -> Self {
        Self {
            transition,
            position: 0.0,
        }
    }

    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn frame_index(&self) -> usize {
        (self.position as usize).min(self.transition.len().saturating_sub(1))
    }

    pub fn current(&self) -> &TransitionFrame {
        self.transition.frame(self.frame_index())
    }

    /// Frames already shown, for trails.
    pub fn history(&self) -> &[TransitionFrame] {
        &self.transition.frames()[..=self.frame_index()]
    }

    pub fn is_finished(&self) -> bool {
        self.frame_index() + 1 >= self.transition.len()
    }

    pub fn advance(&mut self, dt: Duration) {
        let interval = self.transition.frame_interval().as_secs_f64();
        if interval > 0.0 {
            self.position += dt.as_secs_f64() / interval;
        }
        let last = self.transition.len().saturating_sub(1) as f64;
        self.position = self.position.min(last);
    }

    pub fn restart(&mut self) {
        self.position = 0.0;
    }
}

/// Main application state.
pub struct App {
    /// Circuit, display and gate log
    pub session: Session,
    /// Renders transitions for the session
    animator: BlochAnimator,
    /// Animation being played, if any
    pub playback: Option<Playback>,
    /// Open dialogs, topmost last
    dialogs: Vec<Dialog>,
    /// Status message
    pub status: String,
    /// Surface visualization failures in the status line
    show_visualization_errors: bool,
    should_quit: bool,
    /// Last tick time
    last_tick: Instant,
    /// Frame counter for animations
    frame_count: u64,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(),
            animator: BlochAnimator::new(config.transition_options()),
            playback: None,
            dialogs: Vec::new(),
            status: String::from("Apply gates, then press v to visualize"),
            show_visualization_errors: config.show_visualization_errors,
            should_quit: false,
            last_tick: Instant::now(),
            frame_count: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Topmost open dialog.
    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialogs.last()
    }

    /// Whether the trail of the vector should be drawn.
    pub fn trace(&self) -> bool {
        self.animator.options().trace
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.dialogs.last_mut() {
            Some(Dialog::About) => {
                // Any key closes the about box
                self.dialogs.pop();
            }
            Some(Dialog::Angle(dialog)) => {
                match Self::handle_angle_key(dialog, AngleInput::from(key)) {
                    AngleAction::Stay => {}
                    AngleAction::Cancel => {
                        self.dialogs.pop();
                        self.status = String::from("Rotation cancelled");
                    }
                    AngleAction::Apply(axis, multiple) => {
                        self.dialogs.pop();
                        self.apply_rotation(axis, multiple);
                    }
                }
            }
            None => self.handle_command(Command::from(key)),
        }
    }

    fn handle_angle_key(dialog: &mut AngleDialog, input: AngleInput) -> AngleAction {
        match input {
            AngleInput::Preset(index) => match ANGLE_PRESETS.get(index) {
                Some(&multiple) => AngleAction::Apply(dialog.axis, multiple),
                None => AngleAction::Stay,
            },
            AngleInput::PrevPreset => {
                dialog.selected = dialog.selected.saturating_sub(1);
                AngleAction::Stay
            }
            AngleInput::NextPreset => {
                dialog.selected = (dialog.selected + 1).min(ANGLE_PRESETS.len() - 1);
                AngleAction::Stay
            }
            AngleInput::Char(c) => {
                dialog.entry.push(c);
                dialog.error = None;
                AngleAction::Stay
            }
            AngleInput::Backspace => {
                dialog.entry.pop();
                dialog.error = None;
                AngleAction::Stay
            }
            AngleInput::Submit if dialog.entry.is_empty() => {
                AngleAction::Apply(dialog.axis, ANGLE_PRESETS[dialog.selected])
            }
            AngleInput::Submit => match parse_angle_multiple(&dialog.entry) {
                Ok(multiple) => AngleAction::Apply(dialog.axis, multiple),
                Err(err) => {
                    dialog.error = Some(err);
                    AngleAction::Stay
                }
            },
            AngleInput::Cancel => AngleAction::Cancel,
            AngleInput::Ignore => AngleAction::Stay,
        }
    }

    fn handle_command(&mut self, command: Command) {
        match command {
            Command::Gate(gate) => {
                let outcome = self.session.apply_fixed_gate(gate, &mut self.animator);
                self.status = format!("✓ {} applied", blochlab::Gate::from(gate));
                if let Some(outcome) = outcome {
                    self.on_outcome(outcome);
                }
            }
            Command::Rotation(axis) => {
                self.dialogs.push(Dialog::Angle(AngleDialog::new(axis)));
                self.status = format!("Choose angle for R{}", axis.name().to_lowercase());
            }
            Command::Visualize => {
                let outcome = self.session.visualize(&mut self.animator);
                self.on_outcome(outcome);
            }
            Command::Replay => match self.playback.as_mut() {
                Some(playback) => {
                    playback.restart();
                    self.status = String::from("Replaying...");
                }
                None => self.status = String::from("Nothing to replay yet"),
            },
            Command::Clear => {
                self.session.clear();
                self.playback = None;
                self.status = String::from("✓ Circuit cleared");
            }
            Command::Quit => {
                info!("quit requested");
                self.should_quit = true;
            }
            Command::About => self.dialogs.push(Dialog::About),
            Command::Ignore => {}
        }
    }

    fn apply_rotation(&mut self, axis: Axis, multiple: f64) {
        let outcome = self
            .session
            .apply_rotation_gate(axis, multiple, &mut self.animator);
        self.status = format!("✓ R{}({}π) applied", axis.name().to_lowercase(), multiple);
        if let Some(outcome) = outcome {
            self.on_outcome(outcome);
        }
    }

    fn on_outcome(&mut self, outcome: VisualizeOutcome) {
        match outcome {
            VisualizeOutcome::Rendered => {
                if let Some(transition) = self.animator.latest() {
                    self.status = format!("Animating {} gates", transition.gates().len());
                    self.playback = Some(Playback::new(transition.clone()));
                }
            }
            VisualizeOutcome::Impossible(err) => {
                debug!(error = %err, "visualization skipped");
                if self.show_visualization_errors {
                    self.status = format!("✗ {}", err);
                }
            }
        }
    }

    /// Update animation state.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.frame_count += 1;

        if let Some(playback) = self.playback.as_mut() {
            playback.advance(dt);
        }
    }

    /// Get frame count for animations.
    pub fn frame(&self) -> u64 {
        self.frame_count
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blochlab::{Circuit, Gate, TransitionOptions};
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::f64::consts::PI;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(key(KeyCode::Char(c)));
    }

    #[test]
    fn test_gate_keys_update_display() {
        let mut app = App::default();
        for c in ['x', 'S', 'h', 'T'] {
            press(&mut app, c);
        }
        assert_eq!(app.session.display(), "xSDHTD");
        assert!(app.playback.is_none());
    }

    #[test]
    fn test_preset_applies_rotation_and_closes_dialog() {
        let mut app = App::default();
        press(&mut app, 'Y');
        assert!(matches!(app.dialog(), Some(Dialog::Angle(d)) if d.axis == Axis::Y));

        app.handle_key(key(KeyCode::F(2)));
        assert!(app.dialog().is_none());
        assert_eq!(app.session.circuit().gates(), &[Gate::Ry(0.5 * PI)]);
        assert_eq!(app.session.display(), "Ry");
        assert_eq!(app.session.pending_angle(), 0.0);
    }

    #[test]
    fn test_selected_preset_on_enter() {
        let mut app = App::default();
        press(&mut app, 'X');
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.circuit().gates(), &[Gate::Rx(PI)]);
    }

    #[test]
    fn test_free_form_entry() {
        let mut app = App::default();
        press(&mut app, 'Z');
        for c in "-1.5".chars() {
            press(&mut app, c);
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.circuit().gates(), &[Gate::Rz(-1.5 * PI)]);
    }

    #[test]
    fn test_out_of_range_entry_keeps_dialog_open() {
        let mut app = App::default();
        press(&mut app, 'Z');
        press(&mut app, '3');
        app.handle_key(key(KeyCode::Enter));
        match app.dialog() {
            Some(Dialog::Angle(dialog)) => assert!(dialog.error.is_some()),
            other => panic!("dialog closed: {:?}", other),
        }
        assert!(app.session.circuit().is_empty());
    }

    #[test]
    fn test_cancel_leaves_session_untouched() {
        let mut app = App::default();
        press(&mut app, 'X');
        app.handle_key(key(KeyCode::Esc));
        assert!(app.dialog().is_none());
        assert_eq!(app.session.display(), "");
        assert!(!app.should_quit());
    }

    #[test]
    fn test_visualize_starts_playback() {
        let mut app = App::default();
        press(&mut app, 'h');
        press(&mut app, 'v');
        let playback = app.playback.as_ref().unwrap();
        assert_eq!(playback.frame_index(), 0);
        assert_eq!(playback.transition().gates(), &[Gate::H]);
    }

    #[test]
    fn test_tenth_gate_auto_plays() {
        let mut app = App::default();
        for _ in 0..10 {
            press(&mut app, 't');
        }
        assert!(app.playback.is_some());
        assert!(app.session.gate_log().is_empty());
    }

    #[test]
    fn test_failed_visualization_is_silent_by_default() {
        let mut app = App::default();
        press(&mut app, 'v');
        assert!(app.playback.is_none());
        assert_eq!(app.status, "Apply gates, then press v to visualize");

        let config = Config {
            show_visualization_errors: true,
            ..Config::default()
        };
        let mut app = App::new(&config);
        press(&mut app, 'v');
        assert!(app.status.starts_with('✗'));
    }

    #[test]
    fn test_clear_and_quit() {
        let mut app = App::default();
        press(&mut app, 'x');
        press(&mut app, 'c');
        assert_eq!(app.session.display(), "");
        assert_eq!(app.session.circuit(), &Circuit::new());

        press(&mut app, 'h');
        press(&mut app, 'v');
        assert!(app.playback.is_some());
        press(&mut app, 'c');
        assert!(app.playback.is_none());

        press(&mut app, 'q');
        assert!(app.should_quit());
    }

    #[test]
    fn test_about_closes_on_any_key() {
        let mut app = App::default();
        press(&mut app, '?');
        assert_eq!(app.dialog(), Some(&Dialog::About));
        press(&mut app, 'x');
        assert!(app.dialog().is_none());
        assert_eq!(app.session.display(), "");
    }

    #[test]
    fn test_playback_advances_and_clamps() {
        let mut circuit = Circuit::new();
        circuit.x();
        let options = TransitionOptions {
            fpg: 10,
            spg: 1.0,
            trace: false,
        };
        let mut playback = Playback::new(Transition::from_circuit(&circuit, &options).unwrap());
        playback.advance(Duration::from_millis(550));
        assert_eq!(playback.frame_index(), 5);
        assert_eq!(playback.history().len(), 6);
        playback.advance(Duration::from_secs(5));
        assert!(playback.is_finished());
        assert_eq!(playback.frame_index(), 10);
        playback.restart();
        assert_eq!(playback.frame_index(), 0);
    }

    #[test]
    fn test_parse_angle_multiple() {
        assert_eq!(parse_angle_multiple(" 0.75 "), Ok(0.75));
        assert_eq!(parse_angle_multiple("-2"), Ok(-2.0));
        assert!(parse_angle_multiple("").is_err());
        assert!(parse_angle_multiple("2.5").is_err());
        assert!(parse_angle_multiple("pi").is_err());
    }
}
