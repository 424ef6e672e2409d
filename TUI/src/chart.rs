use std::f64::consts::TAU;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::backend::{Category, SentimentTriple};

pub const POSITIVE_COLOR: Color = Color::Rgb(0x34, 0xD3, 0x99); // #34D399
pub const NEUTRAL_COLOR: Color = Color::Rgb(0x60, 0xA5, 0xFA);  // #60A5FA
pub const NEGATIVE_COLOR: Color = Color::Rgb(0xF8, 0x71, 0x71); // #F87171

const FILL: &str = "█";

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Positive => POSITIVE_COLOR,
        Category::Neutral => NEUTRAL_COLOR,
        Category::Negative => NEGATIVE_COLOR,
    }
}

/// Three-slice pie, clockwise from 12 o'clock in Positive, Neutral, Negative order.
pub struct PieChart<'a> {
    triple: &'a SentimentTriple,
    empty_style: Style,
}

impl<'a> PieChart<'a> {
    pub fn new(triple: &'a SentimentTriple) -> Self {
        Self {
            triple,
            empty_style: Style::default(),
        }
    }

    pub fn empty_style(mut self, style: Style) -> Self {
        self.empty_style = style;
        self
    }
}

/// Slice owning a point `turn` of the way around (0.0..1.0).
fn slice_at(fractions: &[f64; 3], turn: f64) -> Category {
    let mut cumulative = 0.0;
    let mut last = Category::Negative;
    for (category, share) in Category::ALL.iter().zip(fractions.iter()) {
        if *share <= 0.0 {
            continue;
        }
        cumulative += share;
        last = *category;
        if turn < cumulative {
            return *category;
        }
    }
    last
}

impl Widget for PieChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(fractions) = self.triple.fractions() else {
            if area.width > 0 && area.height > 0 {
                let y = area.y + area.height / 2;
                let msg = "no data";
                let x = area.x + area.width.saturating_sub(msg.len() as u16) / 2;
                buf.set_stringn(x, y, msg, area.width as usize, self.empty_style);
            }
            return;
        };

        // Terminal cells are about twice as tall as they are wide, so measure
        // horizontal distance in half-cells.
        let half_w = area.width as f64 / 2.0;
        let half_h = area.height as f64 / 2.0;
        let radius = half_h.min(half_w / 2.0);
        if radius < 1.0 {
            return;
        }

        for row in 0..area.height {
            for col in 0..area.width {
                let dx = (col as f64 + 0.5 - half_w) / 2.0;
                let dy = row as f64 + 0.5 - half_h;
                if dx * dx + dy * dy > radius * radius {
                    continue;
                }
                let angle = dx.atan2(-dy).rem_euclid(TAU);
                let color = category_color(slice_at(&fractions, angle / TAU));
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(FILL).set_fg(color);
                }
            }
        }
    }
}

/// One legend line per category, e.g. `■ Positive  80.0%`.
pub fn legend_lines(triple: &SentimentTriple, label_style: Style) -> Vec<Line<'static>> {
    let fractions = triple.fractions().unwrap_or([0.0; 3]);
    Category::ALL
        .iter()
        .zip(fractions.iter())
        .map(|(category, share)| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(category_color(*category))),
                Span::styled(format!("{:<9}", category.label()), label_style),
                Span::styled(format!("{:>6.1}%", share * 100.0), label_style),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(triple: &SentimentTriple, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        PieChart::new(triple).render(area, &mut buf);
        buf
    }

    fn painted(buf: &Buffer) -> Vec<Color> {
        let area = buf.area;
        let mut colors = Vec::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let cell = &buf[(x, y)];
                if cell.symbol() == FILL {
                    colors.push(cell.fg);
                }
            }
        }
        colors
    }

    #[test]
    fn test_single_category_paints_only_its_color() {
        let buf = render(&SentimentTriple::new(1.0, 0.0, 0.0), 20, 10);
        let colors = painted(&buf);

        assert!(!colors.is_empty());
        assert!(colors.iter().all(|c| *c == POSITIVE_COLOR));
    }

    #[test]
    fn test_half_split_sides() {
        let buf = render(&SentimentTriple::new(50.0, 0.0, 50.0), 20, 10);

        // Right half runs clockwise from 12 o'clock, so it is the first slice.
        assert_eq!(buf[(15, 3)].fg, POSITIVE_COLOR);
        assert_eq!(buf[(4, 3)].fg, NEGATIVE_COLOR);
    }

    #[test]
    fn test_corners_stay_blank() {
        let buf = render(&SentimentTriple::new(1.0, 1.0, 1.0), 20, 10);
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(19, 9)].symbol(), " ");
    }

    #[test]
    fn test_zero_triple_shows_placeholder() {
        let buf = render(&SentimentTriple::default(), 20, 10);
        assert!(painted(&buf).is_empty());
        let row: String = (0..20).map(|x| buf[(x, 5)].symbol().to_string()).collect();
        assert!(row.contains("no data"));
    }

    #[test]
    fn test_slice_at_skips_empty_slices() {
        let fractions = [0.5, 0.0, 0.5];
        assert_eq!(slice_at(&fractions, 0.1), Category::Positive);
        assert_eq!(slice_at(&fractions, 0.5), Category::Negative);
        assert_eq!(slice_at(&fractions, 0.99), Category::Negative);
        assert_eq!(slice_at(&[0.2, 0.3, 0.5], 0.3), Category::Neutral);
    }

    #[test]
    fn test_legend_percentages() {
        let lines = legend_lines(&SentimentTriple::new(0.8, 0.15, 0.05), Style::default());
        assert_eq!(lines.len(), 3);
        let first: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(first.contains("Positive"));
        assert!(first.contains("80.0%"));
    }
}
