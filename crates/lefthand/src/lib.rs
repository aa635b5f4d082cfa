//! Lefthand: deterministic left-hand wall-following maze exploration.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Lefthand sub-crates. For most users, adding `lefthand` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use lefthand::prelude::*;
//!
//! // A 1x3 corridor: (1,1) - (1,2) - (1,3).
//! let mut maze = GridMaze::new(1, 3).unwrap();
//! maze.carve(Cell::new(1, 1), Cell::new(1, 2)).unwrap();
//! maze.carve(Cell::new(1, 2), Cell::new(1, 3)).unwrap();
//!
//! // Explore from the middle cell, facing north.
//! let seq = explore(maze.wall_map(), Cell::new(1, 2)).unwrap();
//! assert_eq!(seq, vec![Cell::new(1, 2), Cell::new(1, 1), Cell::new(1, 3)]);
//!
//! // The path from the default start (1,3) to the default goal (1,1).
//! let solution = solve(&maze, &ExploreConfig::state_space_bounded()).unwrap();
//! assert_eq!(
//!     solution.path.route(),
//!     vec![Cell::new(1, 3), Cell::new(1, 2), Cell::new(1, 1)]
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `lefthand-core` | Cells, compass directions, wall maps, grid mazes, errors |
//! | [`explore`] | `lefthand-explore` | Orientation model, explorer, path builder, `solve` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`lefthand-core`).
///
/// Contains [`types::Cell`], [`types::Compass`], [`types::WallMap`],
/// [`types::GridMaze`], the [`types::MazeProvider`] trait, and the error
/// types.
pub use lefthand_core as types;

/// Exploration and path building (`lefthand-explore`).
///
/// [`explore::Explorer`] runs the wall follower, [`explore::build_path`]
/// derives the goal route, and [`explore::solve`] does both.
pub use lefthand_explore as explore;

/// Common imports for typical Lefthand usage.
///
/// ```rust
/// use lefthand::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use lefthand_core::{Cell, Compass, GridMaze, MazeProvider, Openness, WallMap};

    // Errors
    pub use lefthand_core::{GridError, MazeError};

    // Exploration
    pub use lefthand_explore::{
        build_path, explore, solve, ConfigError, Exploration, ExploreConfig, ExploreStats,
        Explorer, IterationLimit, Orientation, Path, Solution, SolveError,
    };
}
