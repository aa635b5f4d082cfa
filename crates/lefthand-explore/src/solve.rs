//! End-to-end helper: explore a provided maze, then derive the goal path.

use std::error::Error;
use std::fmt;

use lefthand_core::{MazeError, MazeProvider};
use log::debug;

use crate::config::{ConfigError, ExploreConfig};
use crate::explorer::{Exploration, Explorer};
use crate::path::{build_path, Path};

/// Output of [`solve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// The full exploration run.
    pub exploration: Exploration,
    /// Route from the provider's start to its goal.
    pub path: Path,
}

/// Errors from [`solve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolveError {
    /// The exploration config failed validation.
    Config(ConfigError),
    /// Exploration failed.
    Maze(MazeError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Maze(e) => write!(f, "maze: {e}"),
        }
    }
}

impl Error for SolveError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Maze(e) => Some(e),
        }
    }
}

impl From<ConfigError> for SolveError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<MazeError> for SolveError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

/// Explore `provider` from its start and build the path to its goal.
///
/// A path that never reaches the goal is still returned; check
/// [`Path::reached_goal`].
///
/// # Examples
///
/// ```
/// use lefthand_core::{Cell, GridMaze};
/// use lefthand_explore::{solve, ExploreConfig};
///
/// let maze = GridMaze::open_room(2, 2).unwrap();
/// let solution = solve(&maze, &ExploreConfig::state_space_bounded()).unwrap();
/// assert_eq!(solution.path.first().map(|(from, _)| from), Some(Cell::new(2, 2)));
/// assert!(solution.path.reached_goal());
/// ```
pub fn solve<P: MazeProvider + ?Sized>(
    provider: &P,
    config: &ExploreConfig,
) -> Result<Solution, SolveError> {
    let start = provider.start();
    let goal = provider.goal();
    debug!(
        "[Solve] {}x{} maze, start={} goal={}",
        provider.rows(),
        provider.cols(),
        start,
        goal
    );

    let explorer = Explorer::new(provider.wall_map(), config.clone())?;
    let exploration = explorer.run(start)?;
    let path = build_path(&exploration.sequence, goal);

    Ok(Solution { exploration, path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lefthand_core::{Cell, GridMaze};

    #[test]
    fn solve_open_room_reaches_origin() {
        let maze = GridMaze::open_room(2, 2).unwrap();
        let s = solve(&maze, &ExploreConfig::default()).unwrap();
        assert_eq!(
            s.exploration.sequence,
            vec![
                Cell::new(2, 2),
                Cell::new(2, 1),
                Cell::new(1, 1),
                Cell::new(1, 2)
            ]
        );
        assert_eq!(s.path.terminus(), Some(Cell::ORIGIN));
    }

    #[test]
    fn solve_propagates_config_error() {
        let maze = GridMaze::open_room(2, 2).unwrap();
        let err = solve(&maze, &ExploreConfig::with_max_iterations(0)).unwrap_err();
        assert_eq!(err, SolveError::Config(ConfigError::ZeroIterationLimit));
        assert!(err.source().is_some());
    }

    #[test]
    fn solve_propagates_maze_error() {
        let maze = GridMaze::new(2, 2).unwrap();
        let err = solve(&maze, &ExploreConfig::state_space_bounded()).unwrap_err();
        assert!(matches!(
            err,
            SolveError::Maze(MazeError::TraversalIncomplete { total: 4, .. })
        ));
        assert!(err.to_string().starts_with("maze: traversal incomplete"));
    }
}
