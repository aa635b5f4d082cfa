//! Grid cells and compass directions.

use std::fmt;

/// A single addressable grid position.
///
/// Mazes are 1-indexed: the top-left cell is `(1, 1)` and a `rows x cols`
/// maze ends at `(rows, cols)`. Coordinates are signed so that a step off
/// the grid (row 0, column 0) is still a representable cell. Such a cell
/// is simply absent from the wall map, and looking it up fails with
/// [`MazeError::MissingCell`](crate::MazeError::MissingCell).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, growing southwards.
    pub row: i32,
    /// Column index, growing eastwards.
    pub col: i32,
}

impl Cell {
    /// The top-left cell `(1, 1)`, conventionally the goal.
    pub const ORIGIN: Cell = Cell { row: 1, col: 1 };

    /// Create a cell at `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell one unit away in `dir`.
    ///
    /// Returns `None` only if the step would overflow `i32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lefthand_core::{Cell, Compass};
    ///
    /// let c = Cell::new(2, 2);
    /// assert_eq!(c.checked_neighbour(Compass::North), Some(Cell::new(1, 2)));
    /// assert_eq!(c.checked_neighbour(Compass::West), Some(Cell::new(2, 1)));
    /// ```
    pub fn checked_neighbour(self, dir: Compass) -> Option<Cell> {
        let (dr, dc) = dir.offset();
        Some(Cell {
            row: self.row.checked_add(dr)?,
            col: self.col.checked_add(dc)?,
        })
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl From<Cell> for (i32, i32) {
    fn from(c: Cell) -> Self {
        (c.row, c.col)
    }
}

/// One of the four absolute compass directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Compass {
    /// Towards row - 1.
    North,
    /// Towards row + 1.
    South,
    /// Towards col + 1.
    East,
    /// Towards col - 1.
    West,
}

impl Compass {
    /// All four directions in `N, S, E, W` order.
    pub const ALL: [Compass; 4] = [Compass::North, Compass::South, Compass::East, Compass::West];

    /// Returns the `(row_offset, col_offset)` for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Compass::North => (-1, 0),
            Compass::South => (1, 0),
            Compass::East => (0, 1),
            Compass::West => (0, -1),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Compass::North => Compass::South,
            Compass::South => Compass::North,
            Compass::East => Compass::West,
            Compass::West => Compass::East,
        }
    }

    /// Single-bit mask used by [`Openness`](crate::Openness).
    pub fn bit(self) -> u8 {
        match self {
            Compass::North => 0b0001,
            Compass::South => 0b0010,
            Compass::East => 0b0100,
            Compass::West => 0b1000,
        }
    }

    /// One-letter label (`N`, `S`, `E`, `W`).
    pub fn letter(self) -> char {
        match self {
            Compass::North => 'N',
            Compass::South => 'S',
            Compass::East => 'E',
            Compass::West => 'W',
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offsets_follow_row_col_convention() {
        let c = Cell::new(5, 5);
        assert_eq!(c.checked_neighbour(Compass::North), Some(Cell::new(4, 5)));
        assert_eq!(c.checked_neighbour(Compass::South), Some(Cell::new(6, 5)));
        assert_eq!(c.checked_neighbour(Compass::East), Some(Cell::new(5, 6)));
        assert_eq!(c.checked_neighbour(Compass::West), Some(Cell::new(5, 4)));
    }

    #[test]
    fn stepping_off_the_grid_is_representable() {
        assert_eq!(
            Cell::ORIGIN.checked_neighbour(Compass::North),
            Some(Cell::new(0, 1))
        );
    }

    #[test]
    fn overflow_returns_none() {
        let edge = Cell::new(i32::MAX, 0);
        assert_eq!(edge.checked_neighbour(Compass::South), None);
        assert!(edge.checked_neighbour(Compass::North).is_some());
    }

    #[test]
    fn bits_are_distinct() {
        let mut seen = 0u8;
        for dir in Compass::ALL {
            assert_eq!(seen & dir.bit(), 0);
            seen |= dir.bit();
        }
        assert_eq!(seen, 0b1111);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Cell::new(3, 7).to_string(), "(3, 7)");
        assert_eq!(Compass::West.to_string(), "W");
    }

    #[test]
    fn tuple_conversions() {
        let c: Cell = (2, 9).into();
        assert_eq!(c, Cell::new(2, 9));
        let t: (i32, i32) = c.into();
        assert_eq!(t, (2, 9));
    }

    fn arb_compass() -> impl Strategy<Value = Compass> {
        prop_oneof![
            Just(Compass::North),
            Just(Compass::South),
            Just(Compass::East),
            Just(Compass::West),
        ]
    }

    proptest! {
        #[test]
        fn step_then_opposite_returns_home(
            r in -1000i32..1000,
            c in -1000i32..1000,
            dir in arb_compass(),
        ) {
            let start = Cell::new(r, c);
            let there = start.checked_neighbour(dir).unwrap();
            prop_assert_ne!(there, start);
            prop_assert_eq!(there.checked_neighbour(dir.opposite()), Some(start));
        }
    }
}
