//! Error types for maze lookups and grid construction.
//!
//! [`MazeError`] covers failures while walking a wall map; [`GridError`]
//! covers building or editing a [`GridMaze`](crate::GridMaze).

use std::error::Error;
use std::fmt;

use crate::cell::{Cell, Compass};

/// Errors raised while exploring a wall map.
///
/// All variants are detected at the point of the failing lookup and
/// returned to the caller as-is. Exploration is deterministic, so the
/// same inputs always produce the same error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// A cell that had to be dereferenced is not a key of the wall map.
    ///
    /// Raised for an absent start cell and for a walk that stepped
    /// through an open side into a cell the provider never described.
    MissingCell {
        /// The cell that was looked up.
        cell: Cell,
    },
    /// Exploration hit its iteration limit before every cell was seen.
    ///
    /// Only raised when the caller configured a limit; an unbounded
    /// exploration of a disconnected maze never returns.
    TraversalIncomplete {
        /// Distinct cells recorded when the limit was hit.
        visited: usize,
        /// Number of cells in the wall map.
        total: usize,
        /// Iterations performed.
        iterations: u64,
    },
    /// Stepping from `cell` towards `direction` would overflow `i32`.
    CoordinateOverflow {
        /// The cell the step started from.
        cell: Cell,
        /// The direction of the step.
        direction: Compass,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCell { cell } => write!(f, "cell {cell} is not in the wall map"),
            Self::TraversalIncomplete {
                visited,
                total,
                iterations,
            } => write!(
                f,
                "traversal incomplete: {visited}/{total} cells visited after {iterations} iterations"
            ),
            Self::CoordinateOverflow { cell, direction } => {
                write!(f, "stepping {direction} from {cell} overflows the coordinate range")
            }
        }
    }
}

impl Error for MazeError {}

/// Errors from grid construction and passage carving.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or columns.
    EmptyGrid,
    /// A dimension exceeds the coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// A cell lies outside `[1, rows] x [1, cols]`.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
    },
    /// Two cells passed to a carve/wall operation do not share a side.
    NotAdjacent {
        /// First cell.
        a: Cell,
        /// Second cell.
        b: Cell,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::CellOutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} out of bounds: [1, {rows}] x [1, {cols}]")
            }
            Self::NotAdjacent { a, b } => write!(f, "cells {a} and {b} are not adjacent"),
        }
    }
}

impl Error for GridError {}
