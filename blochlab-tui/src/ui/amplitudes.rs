//! Amplitude bar visualization widget.
//!
//! Displays the two basis amplitudes as horizontal bars with their phase.

use blochlab::QubitState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

/// Widget for displaying qubit amplitudes as bars.
pub struct AmplitudeBars<'a> {
    state: &'a QubitState,
    title: &'a str,
}

impl<'a> AmplitudeBars<'a> {
    pub fn new(state: &'a QubitState) -> Self {
        Self {
            state,
            title: "State Amplitudes",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Get color for probability value (gradient from blue to red).
    fn prob_color(prob: f64) -> Color {
        if prob < 0.001 {
            Color::DarkGray
        } else if prob < 0.1 {
            Color::Blue
        } else if prob < 0.3 {
            Color::Cyan
        } else if prob < 0.5 {
            Color::Yellow
        } else if prob < 0.7 {
            Color::Rgb(255, 165, 0)
        } else {
            Color::Red
        }
    }

    /// Bar of `width` cells filled to `fill` with eighth-block precision.
    fn bar_string(width: usize, fill: f64) -> String {
        let exact = width as f64 * fill.clamp(0.0, 1.0);
        let full_blocks = exact as usize;
        let mut bar = "█".repeat(full_blocks);

        if full_blocks < width {
            let partial = ((exact - full_blocks as f64) * 8.0) as usize;
            bar.push(match partial {
                0 => ' ',
                1 => '▏',
                2 => '▎',
                3 => '▍',
                4 => '▌',
                5 => '▋',
                6 => '▊',
                _ => '▉',
            });
            bar.push_str(&" ".repeat(width - full_blocks - 1));
        }

        bar
    }
}

impl<'a> Widget for AmplitudeBars<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        let probs = self.state.probabilities();
        let amps = self.state.amplitudes();

        // "|0⟩ " label, bar, " 100.0% ∠-180°"
        let label_width = 4;
        let bar_width = (inner.width as usize).saturating_sub(label_width + 14);

        for (row, (prob, amp)) in probs.iter().zip(amps.iter()).enumerate() {
            if row >= inner.height as usize {
                break;
            }
            let y = inner.y + row as u16;

            buf.set_string(inner.x, y, format!("|{}⟩", row), Style::default().fg(Color::White));

            let bar = Self::bar_string(bar_width, *prob);
            buf.set_string(
                inner.x + label_width as u16,
                y,
                &bar,
                Style::default().fg(Self::prob_color(*prob)),
            );

            let phase = if *prob > 1e-9 { amp.arg().to_degrees() } else { 0.0 };
            let value = format!("{:5.1}% ∠{:.0}°", prob * 100.0, phase);
            let value_x = inner.x + (label_width + bar_width) as u16 + 1;
            if value_x as usize + value.chars().count() <= (inner.x + inner.width) as usize {
                buf.set_string(value_x, y, &value, Style::default().fg(Color::Yellow));
            }
        }
    }
}
