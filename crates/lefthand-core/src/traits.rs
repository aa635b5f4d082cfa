//! The read-only maze handle consumed by the explorer.

use crate::cell::Cell;
use crate::walls::WallMap;

/// Read-only access to a maze produced elsewhere.
///
/// A provider owns the wall map and the grid bounds; exploration only
/// borrows them. How the maze was generated or persisted is the
/// provider's business.
pub trait MazeProvider {
    /// Number of rows in the grid.
    fn rows(&self) -> u32;

    /// Number of columns in the grid.
    fn cols(&self) -> u32;

    /// The wall map covering every cell of the maze.
    fn wall_map(&self) -> &WallMap;

    /// Where exploration starts. Defaults to the far corner `(rows, cols)`.
    fn start(&self) -> Cell {
        Cell::new(self.rows() as i32, self.cols() as i32)
    }

    /// Where the derived path should end. Defaults to `(1, 1)`.
    fn goal(&self) -> Cell {
        Cell::ORIGIN
    }
}
