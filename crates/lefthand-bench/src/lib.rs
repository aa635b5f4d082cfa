//! Benchmark profiles for the Lefthand maze explorer.
//!
//! - [`reference_maze`]: 100x100 perfect maze (10K cells)
//! - [`stress_maze`]: 316x316 perfect maze (~100K cells)
//! - [`reference_sequence`]: the visitation sequence over [`reference_maze`]

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lefthand_core::{Cell, GridMaze, MazeProvider};
use lefthand_explore::explore;
use lefthand_test_utils::fixtures::perfect_maze;

/// Side length of [`reference_maze`].
pub const REFERENCE_SIDE: u32 = 100;

/// Side length of [`stress_maze`].
pub const STRESS_SIDE: u32 = 316;

/// Build the reference benchmark maze: 100x100 perfect maze.
pub fn reference_maze(seed: u64) -> GridMaze {
    perfect_maze(REFERENCE_SIDE, REFERENCE_SIDE, seed)
}

/// Build the stress benchmark maze: 316x316 perfect maze.
///
/// Same generator as [`reference_maze`] at 10x the cell count.
pub fn stress_maze(seed: u64) -> GridMaze {
    perfect_maze(STRESS_SIDE, STRESS_SIDE, seed)
}

/// Visitation sequence for [`reference_maze`] from its default start.
///
/// Perfect mazes are always fully covered, so this never fails.
pub fn reference_sequence(seed: u64) -> Vec<Cell> {
    let maze = reference_maze(seed);
    explore(maze.wall_map(), maze.start()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_sequence_covers_the_maze() {
        let seq = reference_sequence(42);
        assert_eq!(seq.len(), (REFERENCE_SIDE * REFERENCE_SIDE) as usize);
        assert_eq!(seq[0], Cell::new(100, 100));
    }

    #[test]
    fn profiles_are_deterministic() {
        assert_eq!(reference_maze(7), reference_maze(7));
    }
}
