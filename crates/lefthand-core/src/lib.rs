//! Core types and traits for the Lefthand maze explorer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the rest of the workspace: grid cells,
//! compass directions, per-cell wall openness, the wall map handed over
//! by a maze provider, and the error types raised when a lookup fails.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod traits;
pub mod walls;

pub use cell::{Cell, Compass};
pub use error::{GridError, MazeError};
pub use grid::GridMaze;
pub use traits::MazeProvider;
pub use walls::{Openness, WallMap};
