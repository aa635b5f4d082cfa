//! Left-hand wall-following exploration for Lefthand mazes.
//!
//! Three pieces, each usable on its own:
//!
//! - [`Orientation`]: the agent's forward/left/back/right binding to
//!   compass directions, and the two 90° rotations.
//! - [`Explorer`]: walks a [`WallMap`](lefthand_core::WallMap) keeping a
//!   hand on the left wall and records every cell it reaches.
//! - [`build_path`]: turns a visitation sequence into a [`Path`] that
//!   ends at the goal.
//!
//! [`solve`] chains them for any [`MazeProvider`](lefthand_core::MazeProvider).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod explorer;
pub mod orientation;
pub mod path;
pub mod solve;

pub use config::{ConfigError, ExploreConfig, IterationLimit};
pub use explorer::{explore, Exploration, ExploreStats, Explorer};
pub use orientation::{Orientation, OrientationError, Relative};
pub use path::{build_path, Path};
pub use solve::{solve, Solution, SolveError};
