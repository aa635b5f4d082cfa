//! Test utilities and mock types for Lefthand development.
//!
//! Provides a [`MockMaze`] implementing [`MazeProvider`] over an arbitrary
//! wall map, plus maze fixtures in [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use lefthand_core::{Cell, MazeProvider, WallMap};

/// Mock implementation of [`MazeProvider`].
///
/// Wraps any wall map, consistent or not, with explicit bounds and
/// optional start/goal overrides.
#[derive(Clone, Debug)]
pub struct MockMaze {
    rows: u32,
    cols: u32,
    walls: WallMap,
    start: Option<Cell>,
    goal: Option<Cell>,
}

impl MockMaze {
    pub fn new(rows: u32, cols: u32, walls: WallMap) -> Self {
        Self {
            rows,
            cols,
            walls,
            start: None,
            goal: None,
        }
    }

    /// Override the provider's start cell.
    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = Some(start);
        self
    }

    /// Override the provider's goal cell.
    pub fn with_goal(mut self, goal: Cell) -> Self {
        self.goal = Some(goal);
        self
    }
}

impl MazeProvider for MockMaze {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn wall_map(&self) -> &WallMap {
        &self.walls
    }

    fn start(&self) -> Cell {
        self.start
            .unwrap_or(Cell::new(self.rows as i32, self.cols as i32))
    }

    fn goal(&self) -> Cell {
        self.goal.unwrap_or(Cell::ORIGIN)
    }
}
