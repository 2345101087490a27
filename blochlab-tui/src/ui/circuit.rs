//! Single-wire circuit diagram.

use blochlab::Gate;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

/// Circuit diagram widget.
pub struct CircuitDiagram<'a> {
    gates: &'a [Gate],
    /// Gate being animated, if any
    current: Option<usize>,
    title: &'a str,
}

impl<'a> CircuitDiagram<'a> {
    pub fn new(gates: &'a [Gate]) -> Self {
        Self {
            gates,
            current: None,
            title: "Circuit",
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn current(mut self, current: Option<usize>) -> Self {
        self.current = current;
        self
    }
}

impl<'a> Widget for CircuitDiagram<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 1 || inner.width < 10 {
            return;
        }

        let y = inner.y;
        let right = inner.x + inner.width;
        buf.set_string(inner.x, y, "q0", Style::default().fg(Color::Cyan));
        for x in (inner.x + 3)..right {
            buf.set_string(x, y, "─", Style::default().fg(Color::DarkGray));
        }

        // Show the most recent gates when the wire is too short
        let mut cells = Vec::with_capacity(self.gates.len());
        for (index, gate) in self.gates.iter().enumerate() {
            cells.push((index, format!("[{}]", gate.name())));
        }
        let available = (inner.width as usize).saturating_sub(4);
        let mut used = 0;
        let mut skip = cells.len();
        for (_, cell) in cells.iter().rev() {
            let width = cell.chars().count() + 1;
            if used + width > available {
                break;
            }
            used += width;
            skip -= 1;
        }

        let mut x = inner.x + 4;
        for (index, cell) in cells.iter().skip(skip) {
            let color = match self.current {
                Some(current) if *index == current => Color::Yellow,
                Some(current) if *index < current => Color::Green,
                _ => Color::White,
            };
            buf.set_string(x, y, cell, Style::default().fg(color));
            x += cell.chars().count() as u16 + 1;
        }

        if skip > 0 {
            buf.set_string(inner.x + 3, y, "…", Style::default().fg(Color::DarkGray));
        }

        if let (Some(current), true) = (self.current, inner.height > 1) {
            let progress = format!("Gate {}/{}", current + 1, self.gates.len());
            if inner.width as usize > progress.len() + 1 {
                let x = right - progress.len() as u16 - 1;
                buf.set_string(x, inner.y + inner.height - 1, &progress, Style::default().fg(Color::Magenta));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16, width: u16) -> String {
        (0..width).map(|x| buf.get(x, y).symbol().to_string()).collect()
    }

    #[test]
    fn test_renders_gates_in_order() {
        let gates = [Gate::H, Gate::Sdg, Gate::Rx(1.0)];
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);
        CircuitDiagram::new(&gates).render(area, &mut buf);
        let wire = row(&buf, 1, 40);
        assert!(wire.contains("[H]─[S†]─[Rx]"), "{wire}");
    }

    #[test]
    fn test_truncates_from_the_left() {
        let gates = vec![Gate::X; 12];
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        CircuitDiagram::new(&gates).render(area, &mut buf);
        let wire = row(&buf, 1, 20);
        assert!(wire.contains('…'));
        assert_eq!(wire.matches("[X]").count(), 3);
    }
}
