//! Per-cell wall openness and the wall map.

use std::fmt;

use indexmap::IndexMap;

use crate::cell::{Cell, Compass};
use crate::error::MazeError;

/// Which of the four sides of a cell are passable.
///
/// Stored as a 4-bit set, one bit per [`Compass`] direction. A cleared
/// bit is a wall; a set bit is an open side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Openness(u8);

impl Openness {
    /// Every side walled.
    pub const CLOSED: Openness = Openness(0);
    /// Every side open.
    pub const ALL_OPEN: Openness = Openness(0b1111);

    /// Build from per-direction values in `[N, S, E, W]` order.
    ///
    /// Zero means wall, any non-zero value means open.
    ///
    /// # Examples
    ///
    /// ```
    /// use lefthand_core::{Compass, Openness};
    ///
    /// let o = Openness::from_values([0, 1, 7, 0]);
    /// assert!(!o.is_open(Compass::North));
    /// assert!(o.is_open(Compass::South));
    /// assert!(o.is_open(Compass::East));
    /// assert!(!o.is_open(Compass::West));
    /// ```
    pub fn from_values(values: [u8; 4]) -> Self {
        let mut bits = 0;
        for (dir, v) in Compass::ALL.iter().zip(values) {
            if v != 0 {
                bits |= dir.bit();
            }
        }
        Openness(bits)
    }

    /// Raw 4-bit representation.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether `dir` is passable.
    pub fn is_open(self, dir: Compass) -> bool {
        self.0 & dir.bit() != 0
    }

    /// Copy of `self` with `dir` opened.
    pub fn with(self, dir: Compass) -> Self {
        Openness(self.0 | dir.bit())
    }

    /// Open `dir` in place.
    pub fn open(&mut self, dir: Compass) {
        self.0 |= dir.bit();
    }

    /// Wall off `dir` in place.
    pub fn close(&mut self, dir: Compass) {
        self.0 &= !dir.bit();
    }

    /// Number of open sides.
    pub fn count_open(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Display for Openness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for dir in Compass::ALL {
            if self.is_open(dir) {
                write!(f, "{}", dir.letter())?;
            } else {
                write!(f, "-")?;
            }
        }
        Ok(())
    }
}

/// Mapping from each cell of a maze to its [`Openness`].
///
/// Produced once by a maze provider and read-only during exploration.
/// Iteration follows insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WallMap {
    cells: IndexMap<Cell, Openness>,
}

impl WallMap {
    /// Create an empty wall map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty wall map with room for `n` cells.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            cells: IndexMap::with_capacity(n),
        }
    }

    /// Insert or replace the openness of `cell`, returning the old value.
    pub fn insert(&mut self, cell: Cell, openness: Openness) -> Option<Openness> {
        self.cells.insert(cell, openness)
    }

    /// Openness of `cell`, if present.
    pub fn get(&self, cell: Cell) -> Option<Openness> {
        self.cells.get(&cell).copied()
    }

    /// Mutable openness of `cell`, if present.
    pub fn get_mut(&mut self, cell: Cell) -> Option<&mut Openness> {
        self.cells.get_mut(&cell)
    }

    /// Checked lookup: `Err(MissingCell)` if `cell` is not a key.
    pub fn openness(&self, cell: Cell) -> Result<Openness, MazeError> {
        self.get(cell).ok_or(MazeError::MissingCell { cell })
    }

    /// Whether `cell` is a key.
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the map has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.keys().copied()
    }

    /// `(cell, openness)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Openness)> + '_ {
        self.cells.iter().map(|(c, o)| (*c, *o))
    }
}

impl FromIterator<(Cell, Openness)> for WallMap {
    fn from_iter<I: IntoIterator<Item = (Cell, Openness)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Extend<(Cell, Openness)> for WallMap {
    fn extend<I: IntoIterator<Item = (Cell, Openness)>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}
