//! CardView: maps a card and its marks into boxed text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{complete_rows, Card};
use crate::line::{Line, Tone};
use crate::types::{Number, NumberSet};

/// Width of one cell: `[nn]` or ` nn `.
const CELL_W: usize = 4;

pub struct CardView {
    /// Append a marker after rows that form a complete line.
    row_markers: bool,
}

impl Default for CardView {
    fn default() -> Self {
        Self { row_markers: true }
    }
}

impl CardView {
    pub fn new(row_markers: bool) -> Self {
        Self { row_markers }
    }

    /// Render `card` with `marked` cells bracketed.
    ///
    /// `drawn` is highlighted when it is on the card but not yet marked.
    pub fn render(
        &self,
        title: &str,
        card: &Card,
        marked: &NumberSet,
        drawn: Option<Number>,
    ) -> Vec<Line> {
        let full = complete_rows(card, marked);
        let inner = card.cols() * CELL_W + card.cols().saturating_sub(1) + 2;

        let mut lines = Vec::with_capacity(card.rows() + 3);
        lines.push(Line::styled(title, Tone::Heading));
        lines.push(Line::plain(format!("┌{}┐", "─".repeat(inner))));

        for (r, row) in card.iter_rows().enumerate() {
            let complete = full.contains(&r);
            let mut line = Line::plain("│ ");
            for (c, &n) in row.iter().enumerate() {
                if c > 0 {
                    line.push(" ", Tone::Plain);
                }
                let (text, tone) = if marked.contains(&n) {
                    let tone = if complete { Tone::Complete } else { Tone::Marked };
                    (format!("[{:>2}]", n), tone)
                } else if drawn == Some(n) {
                    (format!(">{:>2}<", n), Tone::Drawn)
                } else {
                    (format!(" {:>2} ", n), Tone::Plain)
                };
                line.push(text, tone);
            }
            line.push(" │", Tone::Plain);
            if self.row_markers && complete {
                line.push(" LINE", Tone::Complete);
            }
            lines.push(line);
        }

        lines.push(Line::plain(format!("└{}┘", "─".repeat(inner))));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card::from_rows(&[[1, 2, 3, 4, 5], [10, 11, 12, 13, 14], [20, 21, 22, 23, 24]]).unwrap()
    }

    #[test]
    fn renders_box_and_rows() {
        let lines = CardView::default().render("You", &card(), &NumberSet::new(), None);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].text(), "You");
        assert_eq!(lines[2].text(), "│   1    2    3    4    5  │");
        // Border width matches the row width.
        assert_eq!(
            lines[1].text().chars().count(),
            lines[2].text().chars().count()
        );
    }

    #[test]
    fn marks_and_complete_rows() {
        let marked: NumberSet = [1, 2, 3, 4, 5, 12].into_iter().collect();
        let lines = CardView::default().render("You", &card(), &marked, Some(20));

        let row0 = &lines[2];
        assert!(row0.text().starts_with("│ [ 1] [ 2]"));
        assert!(row0.text().ends_with(" LINE"));
        assert!(row0.spans.iter().any(|s| s.tone == Tone::Complete));

        let row1 = &lines[3];
        assert!(row1.text().contains("[12]"));
        assert!(!row1.text().contains("LINE"));
        assert!(row1.spans.iter().any(|s| s.tone == Tone::Marked));

        assert!(lines[4].text().contains(">20<"));
    }

    #[test]
    fn row_markers_can_be_disabled() {
        let marked: NumberSet = (1..=5).collect();
        let lines = CardView::new(false).render("You", &card(), &marked, None);
        assert!(!lines[2].text().contains("LINE"));
    }
}
