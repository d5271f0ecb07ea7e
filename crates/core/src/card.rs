//! Card module - fixed-shape grid of unique numbers
//!
//! A card is generated once per player and never mutated afterwards; marks
//! live in the player's own set.
//!
//! Generation is two separate random steps: first a uniform sample of distinct
//! numbers from the range, then an independent shuffle that decides which cell
//! each number lands in. Keeping the layout shuffle separate means a cell's
//! position says nothing about its value.

use crate::error::CardError;
use crate::rng::SimpleRng;
use crate::types::{Number, BOARD_COLS, BOARD_ROWS, MAX_CARD_ROWS, NUMBER_HIGH, NUMBER_LOW};

/// Immutable bingo card stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    rows: usize,
    cols: usize,
    cells: Vec<Number>,
}

impl Card {
    /// Generate a `rows`x`cols` card of distinct numbers from `low..=high`.
    pub fn generate(
        rows: usize,
        cols: usize,
        low: Number,
        high: Number,
        rng: &mut SimpleRng,
    ) -> Result<Self, CardError> {
        let needed = check_shape(rows, cols)?;
        if low > high {
            return Err(CardError::InvalidRange { low, high });
        }

        let available = (high - low) as usize + 1;
        if available < needed {
            return Err(CardError::InsufficientRange {
                needed,
                available,
                low,
                high,
            });
        }

        let mut cells = rng.sample_distinct(low, high, needed);
        rng.shuffle(&mut cells);

        Ok(Self { rows, cols, cells })
    }

    /// Generate a standard 3x5 card over 1-90.
    pub fn standard(rng: &mut SimpleRng) -> Result<Self, CardError> {
        Self::generate(BOARD_ROWS, BOARD_COLS, NUMBER_LOW, NUMBER_HIGH, rng)
    }

    /// Build a card from explicit rows checked against the standard range.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bingo_core::Card;
    ///
    /// let card = Card::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(card.rows(), 2);
    /// assert_eq!(card.row(1), &[4, 5, 6]);
    ///
    /// assert!(Card::from_rows(&[[1, 1]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[Number]>>(rows: &[R]) -> Result<Self, CardError> {
        Self::from_rows_in(rows, NUMBER_LOW, NUMBER_HIGH)
    }

    /// Build a card from explicit rows checked against `low..=high`.
    pub fn from_rows_in<R: AsRef<[Number]>>(
        rows: &[R],
        low: Number,
        high: Number,
    ) -> Result<Self, CardError> {
        if low > high {
            return Err(CardError::InvalidRange { low, high });
        }
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        let size = check_shape(rows.len(), cols)?;

        let mut seen = [false; 256];
        let mut cells = Vec::with_capacity(size);
        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(CardError::RaggedRow {
                    row: row_idx,
                    len: row.len(),
                    expected: cols,
                });
            }
            for &number in row {
                if number < low || number > high {
                    return Err(CardError::OutOfRange { number, low, high });
                }
                if seen[number as usize] {
                    return Err(CardError::DuplicateNumber(number));
                }
                seen[number as usize] = true;
                cells.push(number);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (rows * cols).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get the number at a cell. Returns `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Number> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.cells.get(row * self.cols + col).copied()
    }

    /// Numbers of one row. Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> &[Number] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate rows top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Number]> {
        self.cells.chunks(self.cols)
    }

    /// All numbers in row-major order.
    pub fn numbers(&self) -> &[Number] {
        &self.cells
    }

    pub fn contains(&self, number: Number) -> bool {
        self.cells.contains(&number)
    }
}

/// Cell count of a `rows` x `cols` card.
fn check_shape(rows: usize, cols: usize) -> Result<usize, CardError> {
    if rows == 0 || cols == 0 || rows > MAX_CARD_ROWS {
        return Err(CardError::InvalidShape { rows, cols });
    }
    rows.checked_mul(cols).ok_or(CardError::InvalidShape { rows, cols })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CARD_SIZE;
    use std::collections::BTreeSet;

    #[test]
    fn test_standard_card_shape() {
        let mut rng = SimpleRng::new(1);
        let card = Card::standard(&mut rng).unwrap();

        assert_eq!(card.rows(), BOARD_ROWS);
        assert_eq!(card.cols(), BOARD_COLS);
        assert_eq!(card.len(), CARD_SIZE);
        assert_eq!(card.iter_rows().count(), BOARD_ROWS);
        assert!(card.iter_rows().all(|row| row.len() == BOARD_COLS));
    }

    #[test]
    fn test_standard_card_unique_and_in_range() {
        let mut rng = SimpleRng::new(42);
        let card = Card::standard(&mut rng).unwrap();

        let unique: BTreeSet<_> = card.numbers().iter().copied().collect();
        assert_eq!(unique.len(), CARD_SIZE);
        assert!(card
            .numbers()
            .iter()
            .all(|&n| (NUMBER_LOW..=NUMBER_HIGH).contains(&n)));
    }

    #[test]
    fn test_generate_same_seed_same_card() {
        let a = Card::standard(&mut SimpleRng::new(77)).unwrap();
        let b = Card::standard(&mut SimpleRng::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_exact_fit_range() {
        let mut rng = SimpleRng::new(5);
        let card = Card::generate(2, 3, 10, 15, &mut rng).unwrap();

        let mut numbers = card.numbers().to_vec();
        numbers.sort_unstable();
        assert_eq!(numbers, vec![10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_generate_insufficient_range() {
        let mut rng = SimpleRng::new(5);
        let err = Card::generate(3, 5, 1, 10, &mut rng).unwrap_err();
        assert_eq!(
            err,
            CardError::InsufficientRange {
                needed: 15,
                available: 10,
                low: 1,
                high: 10,
            }
        );
    }

    #[test]
    fn test_generate_rejects_bad_shape_and_range() {
        let mut rng = SimpleRng::new(5);
        assert!(matches!(
            Card::generate(0, 5, 1, 90, &mut rng),
            Err(CardError::InvalidShape { .. })
        ));
        assert!(matches!(
            Card::generate(3, 0, 1, 90, &mut rng),
            Err(CardError::InvalidShape { .. })
        ));
        assert!(matches!(
            Card::generate(MAX_CARD_ROWS + 1, 1, 1, 90, &mut rng),
            Err(CardError::InvalidShape { .. })
        ));
        assert_eq!(
            Card::generate(2, usize::MAX, 1, 90, &mut rng),
            Err(CardError::InvalidShape {
                rows: 2,
                cols: usize::MAX
            })
        );
        assert_eq!(
            Card::generate(3, 5, 90, 1, &mut rng),
            Err(CardError::InvalidRange { low: 90, high: 1 })
        );
    }

    #[test]
    fn test_from_rows_validation() {
        assert_eq!(
            Card::from_rows(&[vec![1, 2, 3], vec![4, 5]]),
            Err(CardError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            })
        );
        assert_eq!(
            Card::from_rows(&[[1, 2], [3, 2]]),
            Err(CardError::DuplicateNumber(2))
        );
        assert_eq!(
            Card::from_rows(&[[1, 91]]),
            Err(CardError::OutOfRange {
                number: 91,
                low: 1,
                high: 90
            })
        );
        let empty: [[Number; 0]; 0] = [];
        assert!(matches!(
            Card::from_rows(&empty),
            Err(CardError::InvalidShape { rows: 0, cols: 0 })
        ));
    }

    #[test]
    fn test_cell_access() {
        let card = Card::from_rows(&[[1, 2, 3, 4, 5], [10, 11, 12, 13, 14]]).unwrap();

        assert_eq!(card.get(0, 0), Some(1));
        assert_eq!(card.get(1, 4), Some(14));
        assert_eq!(card.get(2, 0), None);
        assert_eq!(card.get(0, 5), None);
        assert!(card.contains(12));
        assert!(!card.contains(6));
    }
}
