//! Bloch sphere visualization widget.
//!
//! Draws the sphere as ASCII art and plots the animated state vector on it.

use blochlab::{BlochVector, TransitionFrame};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

const SPHERE_ART: [&str; 11] = [
    "       z       ",
    "       │       ",
    "   ╭───┼───╮   ",
    "  ╱    │    ╲  ",
    " │     │     │ ",
    " │─────●─────│─y",
    " │    ╱      │ ",
    "  ╲  ╱      ╱  ",
    "   ╰╱──────╯   ",
    "   ╱           ",
    "  x            ",
];

/// ASCII Bloch sphere visualization.
pub struct BlochSphere<'a> {
    vector: Option<BlochVector>,
    trail: &'a [TransitionFrame],
    title: &'a str,
    frame: u64,
}

impl<'a> BlochSphere<'a> {
    pub fn new(vector: Option<BlochVector>) -> Self {
        Self {
            vector,
            trail: &[],
            title: "Bloch Sphere",
            frame: 0,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Earlier frames to draw as a path.
    pub fn trail(mut self, trail: &'a [TransitionFrame]) -> Self {
        self.trail = trail;
        self
    }

    pub fn frame(mut self, frame: u64) -> Self {
        self.frame = frame;
        self
    }
}

/// Oblique projection of a Bloch vector onto the cell grid: y to the right,
/// z up, x toward the viewer (down and to the left).
pub fn project(v: &BlochVector, cx: i32, cy: i32, radius_x: f64, radius_y: f64) -> (i32, i32) {
    let px = cx as f64 + (v.y - 0.5 * v.x) * radius_x;
    let py = cy as f64 - (v.z - 0.5 * v.x) * radius_y;
    (px.round() as i32, py.round() as i32)
}

fn in_rect(area: Rect, x: i32, y: i32) -> bool {
    x >= area.x as i32
        && y >= area.y as i32
        && x < (area.x + area.width) as i32
        && y < (area.y + area.height) as i32
}

impl<'a> Widget for BlochSphere<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 17 || inner.height < 11 {
            return; // Too small to render
        }

        // Sphere center
        let cx = (inner.x + inner.width / 2) as i32;
        let cy = (inner.y + inner.height / 2) as i32;
        let radius_x = 6.0;
        let radius_y = 3.0;

        let start_y = cy - 5;
        let start_x = cx - 7;

        for (i, line) in SPHERE_ART.iter().enumerate() {
            for (j, ch) in line.chars().enumerate() {
                let (x, y) = (start_x + j as i32, start_y + i as i32);
                if ch == ' ' || !in_rect(inner, x, y) {
                    continue;
                }
                let color = match ch {
                    'x' | 'y' | 'z' => Color::Cyan,
                    '●' => Color::Yellow,
                    _ => Color::DarkGray,
                };
                buf.set_string(x as u16, y as u16, ch.to_string(), Style::default().fg(color));
            }
        }

        for frame in self.trail {
            let (x, y) = project(&frame.vector, cx, cy, radius_x, radius_y);
            if in_rect(inner, x, y) {
                buf.set_string(x as u16, y as u16, "·", Style::default().fg(Color::Magenta));
            }
        }

        let Some(vector) = self.vector else {
            let hint = "press v to visualize";
            if inner.width as usize > hint.len() + 2 {
                buf.set_string(
                    inner.x + 1,
                    inner.y + inner.height - 1,
                    hint,
                    Style::default().fg(Color::DarkGray),
                );
            }
            return;
        };

        let (px, py) = project(&vector, cx, cy, radius_x, radius_y);
        if in_rect(inner, px, py) {
            let blink = (self.frame / 8) % 2 == 0;
            let symbol = if blink { "◆" } else { "◇" };
            buf.set_string(px as u16, py as u16, symbol, Style::default().fg(Color::Red));
        }

        let label = vector.label();
        let label_x = inner.x + inner.width - label.chars().count() as u16 - 1;
        buf.set_string(
            label_x,
            inner.y + inner.height - 1,
            &label,
            Style::default().fg(Color::Green),
        );

        let (theta, phi, _) = vector.spherical();
        let coords = format!("θ={:.0}° φ={:.0}°", theta.to_degrees(), phi.to_degrees());
        if inner.width as usize > coords.chars().count() + 2 {
            buf.set_string(inner.x + 1, inner.y, &coords, Style::default().fg(Color::DarkGray));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_axes() {
        assert_eq!(project(&BlochVector::zero_state(), 20, 10, 6.0, 3.0), (20, 7));
        assert_eq!(project(&BlochVector::new(0.0, 1.0, 0.0), 20, 10, 6.0, 3.0), (26, 10));
        assert_eq!(project(&BlochVector::new(1.0, 0.0, 0.0), 20, 10, 6.0, 3.0), (17, 12));
    }

    #[test]
    fn test_render_plots_vector() {
        let area = Rect::new(0, 0, 30, 15);
        let mut buf = Buffer::empty(area);
        BlochSphere::new(Some(BlochVector::zero_state())).render(area, &mut buf);

        // Inner area starts at (1, 1) with size 28x13: center (15, 7)
        assert_eq!(buf.get(15, 4).symbol(), "◆");
        let bottom: String = (1..29).map(|x| buf.get(x, 13).symbol().to_string()).collect();
        assert!(bottom.contains("|0⟩"));
    }

    #[test]
    fn test_small_area_draws_only_border() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        BlochSphere::new(Some(BlochVector::zero_state())).render(area, &mut buf);
        assert_eq!(buf.get(4, 2).symbol(), " ");
    }
}
