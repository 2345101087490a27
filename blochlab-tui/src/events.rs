//! Key mapping for the main window and the angle dialog.

use blochlab::{Axis, FixedGate};
use crossterm::event::{KeyCode, KeyEvent};

/// Main-window commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Gate(FixedGate),
    /// Open the angle dialog for a rotation gate.
    Rotation(Axis),
    Visualize,
    Replay,
    Clear,
    Quit,
    About,
    Ignore,
}

impl From<KeyEvent> for Command {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::Char('x') => Command::Gate(FixedGate::X),
            KeyCode::Char('y') => Command::Gate(FixedGate::Y),
            KeyCode::Char('z') => Command::Gate(FixedGate::Z),
            KeyCode::Char('X') => Command::Rotation(Axis::X),
            KeyCode::Char('Y') => Command::Rotation(Axis::Y),
            KeyCode::Char('Z') => Command::Rotation(Axis::Z),
            KeyCode::Char('s') => Command::Gate(FixedGate::S),
            KeyCode::Char('S') => Command::Gate(FixedGate::Sdg),
            KeyCode::Char('t') => Command::Gate(FixedGate::T),
            KeyCode::Char('T') => Command::Gate(FixedGate::Tdg),
            KeyCode::Char('h') | KeyCode::Char('H') => Command::Gate(FixedGate::H),
            KeyCode::Char('v') | KeyCode::Enter => Command::Visualize,
            KeyCode::Char(' ') => Command::Replay,
            KeyCode::Char('c') => Command::Clear,
            KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
            KeyCode::Char('a') | KeyCode::Char('?') => Command::About,
            _ => Command::Ignore,
        }
    }
}

/// Angle-dialog input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleInput {
    /// Apply the preset at this index.
    Preset(usize),
    PrevPreset,
    NextPreset,
    /// Character for the free-form entry.
    Char(char),
    Backspace,
    Submit,
    Cancel,
    Ignore,
}

impl From<KeyEvent> for AngleInput {
    fn from(key: KeyEvent) -> Self {
        match key.code {
            KeyCode::F(n @ 1..=4) => AngleInput::Preset(n as usize - 1),
            KeyCode::Left => AngleInput::PrevPreset,
            KeyCode::Right | KeyCode::Tab => AngleInput::NextPreset,
            KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' || c == '+' => {
                AngleInput::Char(c)
            }
            KeyCode::Backspace => AngleInput::Backspace,
            KeyCode::Enter => AngleInput::Submit,
            KeyCode::Esc => AngleInput::Cancel,
            _ => AngleInput::Ignore,
        }
    }
}
