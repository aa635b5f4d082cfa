//! Goal path derivation from a visitation sequence.

use indexmap::IndexMap;
use lefthand_core::Cell;
use log::debug;

/// Cell-to-next-cell route derived by [`build_path`].
///
/// Keys keep the visitation order of the sequence they came from. When the
/// goal was visited, the last entry maps the goal to itself; that
/// self-mapping is the terminus. A path without a terminus is a valid,
/// distinct outcome meaning the goal was never reached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    steps: IndexMap<Cell, Cell>,
    goal: Cell,
}

impl Path {
    /// The goal this path was built towards.
    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Next cell after `cell`, if `cell` is on the path.
    pub fn get(&self, cell: Cell) -> Option<Cell> {
        self.steps.get(&cell).copied()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path has no entries.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// `(cell, next)` entries in visitation order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        self.steps.iter().map(|(k, v)| (*k, *v))
    }

    /// First entry.
    pub fn first(&self) -> Option<(Cell, Cell)> {
        self.steps.first().map(|(k, v)| (*k, *v))
    }

    /// Last entry.
    pub fn last(&self) -> Option<(Cell, Cell)> {
        self.steps.last().map(|(k, v)| (*k, *v))
    }

    /// The goal, if the path ends in its self-mapped terminus.
    pub fn terminus(&self) -> Option<Cell> {
        match self.last() {
            Some((cell, next)) if cell == self.goal && next == self.goal => Some(cell),
            _ => None,
        }
    }

    /// Whether the path reaches its goal.
    pub fn reached_goal(&self) -> bool {
        self.terminus().is_some()
    }

    /// Cells in the order a follower would step through them.
    ///
    /// Every key in order, then the target of the last entry if it is not
    /// already the last key. For a path with a terminus this ends at the
    /// goal; for one without, it ends at the last visited cell.
    pub fn route(&self) -> Vec<Cell> {
        let mut out: Vec<Cell> = self.steps.keys().copied().collect();
        if let Some((cell, next)) = self.last() {
            if cell != next {
                out.push(next);
            }
        }
        out
    }

    /// Consume the path, returning the underlying ordered map.
    pub fn into_inner(self) -> IndexMap<Cell, Cell> {
        self.steps
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = (&'a Cell, &'a Cell);
    type IntoIter = indexmap::map::Iter<'a, Cell, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Derive the route to `goal` from a visitation sequence.
///
/// Walks `sequence` in order. Each cell before the goal maps to the cell
/// after it; the goal maps to itself and ends the path. If the goal never
/// appears, every cell but the last gets an entry and there is no
/// terminus. Never fails.
///
/// # Examples
///
/// ```
/// use lefthand_core::Cell;
/// use lefthand_explore::build_path;
///
/// let seq = [Cell::new(2, 2), Cell::new(2, 1), Cell::new(1, 1), Cell::new(1, 2)];
/// let path = build_path(&seq, Cell::ORIGIN);
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.last(), Some((Cell::ORIGIN, Cell::ORIGIN)));
/// assert!(path.reached_goal());
/// ```
pub fn build_path(sequence: &[Cell], goal: Cell) -> Path {
    let mut steps = IndexMap::with_capacity(sequence.len());
    for (i, &cell) in sequence.iter().enumerate() {
        if cell == goal {
            steps.insert(cell, cell);
            break;
        }
        if let Some(&next) = sequence.get(i + 1) {
            steps.insert(cell, next);
        }
    }

    let path = Path { steps, goal };
    if path.reached_goal() {
        debug!("[PathBuilder] {} steps to goal {}", path.len(), goal);
    } else {
        debug!(
            "[PathBuilder] goal {} not in sequence of {} cells",
            goal,
            sequence.len()
        );
    }
    path
}
