//! Left-hand wall follower.
//!
//! The agent keeps its left hand on the wall. Each iteration looks at the
//! current cell only:
//!
//! 1. left open: turn anticlockwise and step forward;
//! 2. left walled, forward open: step forward;
//! 3. both walled: turn clockwise without moving.
//!
//! A cell walled on three sides therefore takes several iterations to
//! leave, one quarter turn at a time. The walk stops as soon as every cell
//! of the wall map has been recorded.

use indexmap::IndexSet;
use lefthand_core::{Cell, Compass, MazeError, WallMap};
use log::{debug, trace};

use crate::config::{ConfigError, ExploreConfig};
use crate::orientation::Orientation;

/// Counters collected over one exploration run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExploreStats {
    /// Loop iterations performed.
    pub iterations: u64,
    /// Single-cell moves.
    pub moves: u64,
    /// In-place clockwise quarter turns.
    pub clockwise_turns: u64,
    /// Anticlockwise quarter turns (each followed by a move).
    pub anticlockwise_turns: u64,
    /// Moves that landed on an already-recorded cell.
    pub revisits: u64,
}

/// Result of a completed exploration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exploration {
    /// Every reachable cell, in first-visit order, starting with the start cell.
    pub sequence: Vec<Cell>,
    /// Run counters.
    pub stats: ExploreStats,
    /// Heading when the last cell was recorded.
    pub final_orientation: Orientation,
}

/// What a single iteration did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    TurnLeftAndStep,
    Step,
    TurnClockwise,
}

/// Wall-following explorer over a borrowed [`WallMap`].
///
/// The wall map is never mutated, so several explorers may share one.
pub struct Explorer<'a> {
    walls: &'a WallMap,
    config: ExploreConfig,
}

impl<'a> Explorer<'a> {
    /// Create an explorer after validating `config`.
    pub fn new(walls: &'a WallMap, config: ExploreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { walls, config })
    }

    /// Create an unbounded explorer.
    pub fn with_defaults(walls: &'a WallMap) -> Self {
        Self {
            walls,
            config: ExploreConfig::default(),
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }

    /// Walk the maze from `start` until every cell has been recorded.
    ///
    /// An empty wall map yields an empty sequence. A `start` absent from a
    /// non-empty wall map is rejected with [`MazeError::MissingCell`]
    /// before any step is taken.
    ///
    /// # Errors
    ///
    /// - [`MazeError::MissingCell`] if the walk dereferences a cell the
    ///   wall map does not contain.
    /// - [`MazeError::TraversalIncomplete`] if the configured iteration
    ///   limit is reached first.
    /// - [`MazeError::CoordinateOverflow`] if a step leaves the `i32` range.
    pub fn run(&self, start: Cell) -> Result<Exploration, MazeError> {
        let total = self.walls.len();
        let mut stats = ExploreStats::default();
        let mut orientation = Orientation::INITIAL;

        if total == 0 {
            debug!("[Explorer] empty wall map, nothing to explore");
            return Ok(Exploration {
                sequence: Vec::new(),
                stats,
                final_orientation: orientation,
            });
        }
        if !self.walls.contains(start) {
            debug!("[Explorer] FAILED: start {start} is not in the wall map");
            return Err(MazeError::MissingCell { cell: start });
        }

        let limit = self.config.resolved_iteration_limit(total);
        debug!("[Explorer] run: start={start} cells={total} limit={limit:?}");

        let mut visited: IndexSet<Cell> = IndexSet::with_capacity(total);
        visited.insert(start);
        let mut position = start;

        while visited.len() < total {
            if let Some(max) = limit {
                if stats.iterations >= max {
                    debug!(
                        "[Explorer] FAILED: TraversalIncomplete ({}/{} cells after {} iterations)",
                        visited.len(),
                        total,
                        stats.iterations
                    );
                    return Err(MazeError::TraversalIncomplete {
                        visited: visited.len(),
                        total,
                        iterations: stats.iterations,
                    });
                }
            }

            let openness = self.walls.openness(position).inspect_err(|_| {
                debug!("[Explorer] FAILED: walked into unmapped cell {position}");
            })?;

            let action = if !openness.is_open(orientation.left()) {
                if !openness.is_open(orientation.forward()) {
                    orientation = orientation.rotated_clockwise();
                    Action::TurnClockwise
                } else {
                    position = step(position, orientation.forward())?;
                    Action::Step
                }
            } else {
                orientation = orientation.rotated_anticlockwise();
                position = step(position, orientation.forward())?;
                Action::TurnLeftAndStep
            };

            stats.iterations += 1;
            match action {
                Action::TurnClockwise => stats.clockwise_turns += 1,
                Action::TurnLeftAndStep => {
                    stats.anticlockwise_turns += 1;
                    stats.moves += 1;
                }
                Action::Step => stats.moves += 1,
            }
            trace!(
                "[Explorer] #{} {:?} -> at {} facing {}",
                stats.iterations,
                action,
                position,
                orientation
            );

            if action != Action::TurnClockwise && !visited.insert(position) {
                stats.revisits += 1;
            }
        }

        debug!(
            "[Explorer] done: {} cells in {} iterations ({} moves, {} revisits)",
            visited.len(),
            stats.iterations,
            stats.moves,
            stats.revisits
        );

        Ok(Exploration {
            sequence: visited.into_iter().collect(),
            stats,
            final_orientation: orientation,
        })
    }
}

/// Explore `walls` from `start` with no iteration limit.
///
/// Returns the visitation sequence: every cell reached, in first-visit
/// order, beginning with `start`. On a disconnected maze this never
/// returns; use an [`Explorer`] with a bounded [`ExploreConfig`] instead.
///
/// # Examples
///
/// ```
/// use lefthand_core::{Cell, GridMaze, MazeProvider};
/// use lefthand_explore::explore;
///
/// let room = GridMaze::open_room(2, 2).unwrap();
/// let seq = explore(room.wall_map(), Cell::new(2, 2)).unwrap();
/// assert_eq!(
///     seq,
///     vec![Cell::new(2, 2), Cell::new(2, 1), Cell::new(1, 1), Cell::new(1, 2)]
/// );
/// ```
pub fn explore(walls: &WallMap, start: Cell) -> Result<Vec<Cell>, MazeError> {
    Explorer::with_defaults(walls)
        .run(start)
        .map(|e| e.sequence)
}

fn step(cell: Cell, dir: Compass) -> Result<Cell, MazeError> {
    cell.checked_neighbour(dir)
        .ok_or(MazeError::CoordinateOverflow {
            cell,
            direction: dir,
        })
}
