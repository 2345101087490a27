//! Main dashboard layout.
//!
//! Organizes all widgets into a cohesive display.

use super::{AmplitudeBars, BlochSphere, CircuitDiagram};
use crate::app::{AngleDialog, App, Dialog, ANGLE_PRESETS};
use blochlab::{TransitionFrame, AUTO_VISUALIZE_THRESHOLD};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the full dashboard.
pub fn render_dashboard(frame: &mut Frame, app: &App) {
    frame.render_widget(Clear, frame.size());

    // Main layout: header, content, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(4), // Footer/status
        ])
        .split(frame.size());

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);

    match app.dialog() {
        Some(Dialog::Angle(dialog)) => render_angle_dialog(frame, dialog),
        Some(Dialog::About) => render_about_dialog(frame),
        None => {}
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let title = vec![
        Span::styled("◆ ", Style::default().fg(Color::Cyan)),
        Span::styled("BLOCHLAB", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled(" QUANTUM VISUALIZER", Style::default().fg(Color::Cyan)),
        Span::raw("  │  "),
        Span::styled(
            format!("{} gates", app.session.circuit().len()),
            Style::default().fg(Color::Green),
        ),
    ];

    let mode_text = match (&app.playback, app.dialog()) {
        (_, Some(Dialog::Angle(_))) => "ANGLE",
        (_, Some(Dialog::About)) => "ABOUT",
        (Some(playback), None) if !playback.is_finished() => "ANIMATING",
        _ => "BUILD",
    };

    let header = Paragraph::new(Line::from(title)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", mode_text),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )),
    );

    frame.render_widget(header, area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(32), // Left panel
            Constraint::Min(40),    // Main visualization
        ])
        .split(area);

    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Display buffer
            Constraint::Length(11), // Gate palette
            Constraint::Min(4),     // Session info
        ])
        .split(main_chunks[0]);

    render_display(frame, left_chunks[0], app);
    render_gate_palette(frame, left_chunks[1]);
    render_session_info(frame, left_chunks[2], app);

    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(13),   // Bloch + amplitudes
            Constraint::Length(4), // Circuit
        ])
        .split(main_chunks[1]);

    let top_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Bloch sphere
            Constraint::Percentage(45), // Amplitudes
        ])
        .split(right_chunks[0]);

    match &app.playback {
        Some(playback) => {
            let trail: &[TransitionFrame] = if app.trace() { playback.history() } else { &[] };
            frame.render_widget(
                BlochSphere::new(Some(playback.current().vector))
                    .title("Bloch Sphere")
                    .trail(trail)
                    .frame(app.frame()),
                top_chunks[0],
            );
            // Once the animation is over, the diagram follows the circuit being built
            let diagram = if playback.is_finished() {
                CircuitDiagram::new(app.session.circuit().gates())
            } else {
                CircuitDiagram::new(playback.transition().gates())
                    .title("Animated Circuit")
                    .current(playback.current().gate_index)
            };
            frame.render_widget(diagram, right_chunks[1]);
        }
        None => {
            frame.render_widget(BlochSphere::new(None).frame(app.frame()), top_chunks[0]);
            frame.render_widget(
                CircuitDiagram::new(app.session.circuit().gates()),
                right_chunks[1],
            );
        }
    }

    let state = app.session.circuit().simulate();
    frame.render_widget(
        AmplitudeBars::new(&state).title("Current State |ψ⟩"),
        top_chunks[1],
    );
}

fn render_display(frame: &mut Frame, area: Rect, app: &App) {
    let text = if app.session.display().is_empty() {
        Span::styled("(empty)", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(
            app.session.display(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )
    };

    let display = Paragraph::new(Line::from(text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Gates ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );

    frame.render_widget(display, area);
}

fn render_gate_palette(frame: &mut Frame, area: Rect) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Green));
    let rot = |k: &'static str| Span::styled(k, Style::default().fg(Color::Magenta));

    let lines = vec![
        Line::from(vec![
            Span::styled("Pauli:", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![key(" x"), Span::raw("=X  "), key("y"), Span::raw("=Y  "), key("z"), Span::raw("=Z")]),
        Line::from(vec![
            Span::styled("Phase:", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![key(" s"), Span::raw("=S  "), key("S"), Span::raw("=S†  "), key("t"), Span::raw("=T  "), key("T"), Span::raw("=T†")]),
        Line::from(vec![
            Span::styled("Other:", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![key(" h"), Span::raw("=H")]),
        Line::from(vec![
            Span::styled("Rotations (asks angle):", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(vec![rot(" X"), Span::raw("=Rx  "), rot("Y"), Span::raw("=Ry  "), rot("Z"), Span::raw("=Rz")]),
    ];

    let palette = Paragraph::new(lines).block(
        Block::default()
            .title(" Gate Keys ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );

    frame.render_widget(palette, area);
}

fn render_session_info(frame: &mut Frame, area: Rect, app: &App) {
    let logged = app.session.gate_log().len();
    let lines = vec![
        Line::from(vec![
            Span::raw("  Auto-visualize: "),
            Span::styled(
                format!("{}/{}", logged, AUTO_VISUALIZE_THRESHOLD),
                Style::default().fg(if logged + 1 >= AUTO_VISUALIZE_THRESHOLD {
                    Color::Yellow
                } else {
                    Color::Cyan
                }),
            ),
        ]),
        Line::from(vec![
            Span::raw("  Circuit gates:  "),
            Span::styled(
                format!("{}", app.session.circuit().len()),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    let info = Paragraph::new(lines).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );

    frame.render_widget(info, area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let keys = match app.dialog() {
        Some(Dialog::Angle(_)) => "F1-F4 Preset  │  ←→ Select  │  Enter Apply  │  Esc Cancel",
        Some(Dialog::About) => "Press any key to close",
        None => "v Visualize  │  Space Replay  │  c Clear  │  a About  │  q Quit",
    };

    let footer = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(app.status.as_str(), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled(keys, Style::default().fg(Color::DarkGray)),
        ]),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );

    frame.render_widget(footer, area);
}

fn render_angle_dialog(frame: &mut Frame, dialog: &AngleDialog) {
    let area = centered_rect(50, 40, frame.size());
    frame.render_widget(Clear, area);

    let mut presets = vec![Span::raw(" ")];
    for (i, multiple) in ANGLE_PRESETS.iter().enumerate() {
        let style = if i == dialog.selected {
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        presets.push(Span::styled(format!(" F{} {}π ", i + 1, multiple), style));
        presets.push(Span::raw(" "));
    }

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Rotation about {} by θ = k·π", dialog.axis.name()),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(presets),
        Line::from(""),
        Line::from(vec![
            Span::raw(" k = "),
            Span::styled(
                format!("{}▏", dialog.entry),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];
    if let Some(error) = &dialog.error {
        lines.push(Line::from(Span::styled(
            format!(" ✗ {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    let panel = Paragraph::new(lines).block(
        Block::default()
            .title(format!(" Get θ for R{} ", dialog.axis.name().to_lowercase()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    frame.render_widget(panel, area);
}

fn render_about_dialog(frame: &mut Frame) {
    let area = centered_rect(70, 85, frame.size());
    frame.render_widget(Clear, area);

    let gate = |name: &'static str, text: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<4}", name), Style::default().fg(Color::Magenta)),
            Span::raw(text),
        ])
    };

    let text = vec![
        Line::from(Span::styled(
            "◆ BLOCHLAB QUANTUM VISUALIZER",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from("Visualization tool for single-qubit rotations on the Bloch sphere."),
        Line::from(""),
        Line::from(Span::styled("─── Gates ───", Style::default().fg(Color::Yellow))),
        gate("X", "flips the state of the qubit (π about X)"),
        gate("Y", "rotates the state vector by π about the Y axis"),
        gate("Z", "flips the phase by π radians"),
        gate("Rx", "parameterized rotation about the X axis"),
        gate("Ry", "parameterized rotation about the Y axis"),
        gate("Rz", "parameterized rotation about the Z axis"),
        gate("S", "rotates about Z by π/2"),
        gate("S†", "rotates about Z by -π/2"),
        gate("T", "rotates about Z by π/4"),
        gate("T†", "rotates about Z by -π/4"),
        gate("H", "creates a superposition (π about (X+Z)/√2)"),
        Line::from(""),
        Line::from(Span::styled("─── Notes ───", Style::default().fg(Color::Yellow))),
        Line::from("  Rotation angles are entered as multiples of π within [-2π, 2π]."),
        Line::from(format!(
            "  At most {} gates can be animated; every {}th gate animates automatically.",
            blochlab::MAX_GATES,
            AUTO_VISUALIZE_THRESHOLD
        )),
        Line::from("  Circuits that cannot be animated leave the sphere unchanged."),
    ];

    let about = Paragraph::new(text)
        .block(
            Block::default()
                .title(" About ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(about, area);
}

/// Helper to create a centered rectangle.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
