//! Rectangular 1-indexed grid maze with a consistent wall map.

use smallvec::SmallVec;

use crate::cell::{Cell, Compass};
use crate::error::GridError;
use crate::traits::MazeProvider;
use crate::walls::{Openness, WallMap};

/// A `rows x cols` maze whose cells are `[1, rows] x [1, cols]`.
///
/// Every cell of the grid has an entry in the wall map. Passages are
/// edited in pairs through [`carve`](Self::carve) and [`wall`](Self::wall),
/// so the two sides of a shared wall always agree. The outer boundary is
/// closed and cannot be opened through this API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMaze {
    rows: u32,
    cols: u32,
    walls: WallMap,
}

impl GridMaze {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid with every wall standing.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds `i32::MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lefthand_core::{Cell, GridMaze, MazeProvider};
    ///
    /// let mut maze = GridMaze::new(2, 3).unwrap();
    /// assert_eq!(maze.wall_map().len(), 6);
    ///
    /// maze.carve(Cell::new(1, 1), Cell::new(1, 2)).unwrap();
    /// assert_eq!(maze.neighbours(Cell::new(1, 1)).len(), 2);
    /// ```
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let mut walls = WallMap::with_capacity((rows as usize) * (cols as usize));
        for cell in canonical_ordering(rows, cols) {
            walls.insert(cell, Openness::CLOSED);
        }
        Ok(Self { rows, cols, walls })
    }

    /// Create a grid where every interior passage is open.
    ///
    /// Only the outer boundary is walled.
    pub fn open_room(rows: u32, cols: u32) -> Result<Self, GridError> {
        let mut maze = Self::new(rows, cols)?;
        for cell in canonical_ordering(rows, cols) {
            for (dir, _) in maze.neighbours(cell) {
                if let Some(o) = maze.walls.get_mut(cell) {
                    o.open(dir);
                }
            }
        }
        Ok(maze)
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `cell` lies inside the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        self.check_bounds(cell).is_ok()
    }

    /// `Ok(())` if `cell` is inside the grid.
    pub fn check_bounds(&self, cell: Cell) -> Result<(), GridError> {
        if cell.row < 1
            || cell.row > self.rows as i32
            || cell.col < 1
            || cell.col > self.cols as i32
        {
            return Err(GridError::CellOutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// In-bounds neighbours of `cell`, regardless of walls.
    ///
    /// Returned in `N, S, E, W` order. Corners have 2, edges have 3.
    pub fn neighbours(&self, cell: Cell) -> SmallVec<[(Compass, Cell); 4]> {
        Compass::ALL
            .iter()
            .filter_map(|&dir| {
                let n = cell.checked_neighbour(dir)?;
                self.contains(n).then_some((dir, n))
            })
            .collect()
    }

    /// Neighbours of `cell` reachable through an open side.
    pub fn passages(&self, cell: Cell) -> SmallVec<[(Compass, Cell); 4]> {
        let Some(openness) = self.walls.get(cell) else {
            return SmallVec::new();
        };
        self.neighbours(cell)
            .into_iter()
            .filter(|(dir, _)| openness.is_open(*dir))
            .collect()
    }

    /// Open the shared wall between adjacent cells `a` and `b`.
    pub fn carve(&mut self, a: Cell, b: Cell) -> Result<(), GridError> {
        let dir = self.shared_side(a, b)?;
        self.set_side(a, dir, true);
        self.set_side(b, dir.opposite(), true);
        Ok(())
    }

    /// Close the shared wall between adjacent cells `a` and `b`.
    pub fn wall(&mut self, a: Cell, b: Cell) -> Result<(), GridError> {
        let dir = self.shared_side(a, b)?;
        self.set_side(a, dir, false);
        self.set_side(b, dir.opposite(), false);
        Ok(())
    }

    /// Whether `a` and `b` are adjacent and the wall between them is open.
    pub fn is_passage(&self, a: Cell, b: Cell) -> bool {
        match (self.shared_side(a, b), self.walls.get(a)) {
            (Ok(dir), Some(o)) => o.is_open(dir),
            _ => false,
        }
    }

    /// Row-major ordering of every cell: `(1,1), (1,2), ..., (rows, cols)`.
    pub fn canonical_ordering(&self) -> Vec<Cell> {
        canonical_ordering(self.rows, self.cols)
    }

    /// Consume the grid, keeping only its wall map.
    pub fn into_wall_map(self) -> WallMap {
        self.walls
    }

    fn shared_side(&self, a: Cell, b: Cell) -> Result<Compass, GridError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        Compass::ALL
            .iter()
            .copied()
            .find(|&dir| a.checked_neighbour(dir) == Some(b))
            .ok_or(GridError::NotAdjacent { a, b })
    }

    fn set_side(&mut self, cell: Cell, dir: Compass, open: bool) {
        if let Some(o) = self.walls.get_mut(cell) {
            if open {
                o.open(dir);
            } else {
                o.close(dir);
            }
        }
    }
}

impl MazeProvider for GridMaze {
    fn rows(&self) -> u32 {
        self.rows
    }

    fn cols(&self) -> u32 {
        self.cols
    }

    fn wall_map(&self) -> &WallMap {
        &self.walls
    }
}

fn canonical_ordering(rows: u32, cols: u32) -> Vec<Cell> {
    let mut out = Vec::with_capacity((rows as usize) * (cols as usize));
    for r in 1..=rows as i32 {
        for c in 1..=cols as i32 {
            out.push(Cell::new(r, c));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(r: i32, col: i32) -> Cell {
        Cell::new(r, col)
    }

    // ── Constructor tests ───────────────────────────────────────

    #[test]
    fn new_zero_rows_returns_error() {
        assert!(matches!(GridMaze::new(0, 5), Err(GridError::EmptyGrid)));
    }

    #[test]
    fn new_zero_cols_returns_error() {
        assert!(matches!(GridMaze::new(5, 0), Err(GridError::EmptyGrid)));
    }

    #[test]
    fn new_rejects_dims_exceeding_i32_max() {
        let big = i32::MAX as u32 + 1;
        assert!(matches!(
            GridMaze::new(big, 5),
            Err(GridError::DimensionTooLarge { name: "rows", .. })
        ));
        assert!(matches!(
            GridMaze::new(5, big),
            Err(GridError::DimensionTooLarge { name: "cols", .. })
        ));
    }

    #[test]
    fn new_grid_is_fully_walled() {
        let g = GridMaze::new(3, 4).unwrap();
        assert_eq!(g.wall_map().len(), 12);
        assert!(g.wall_map().iter().all(|(_, o)| o == Openness::CLOSED));
    }

    // ── Neighbour tests ─────────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let g = GridMaze::new(5, 5).unwrap();
        let n = g.neighbours(c(3, 3));
        assert_eq!(n.len(), 4);
        assert!(n.contains(&(Compass::North, c(2, 3))));
        assert!(n.contains(&(Compass::South, c(4, 3))));
        assert!(n.contains(&(Compass::East, c(3, 4))));
        assert!(n.contains(&(Compass::West, c(3, 2))));
    }

    #[test]
    fn neighbours_corner() {
        let g = GridMaze::new(5, 5).unwrap();
        let n = g.neighbours(c(1, 1));
        assert_eq!(n.len(), 2);
        assert!(n.contains(&(Compass::South, c(2, 1))));
        assert!(n.contains(&(Compass::East, c(1, 2))));
    }

    #[test]
    fn neighbours_edge() {
        let g = GridMaze::new(5, 5).unwrap();
        assert_eq!(g.neighbours(c(5, 3)).len(), 3);
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let g = GridMaze::new(1, 1).unwrap();
        assert!(g.neighbours(Cell::ORIGIN).is_empty());
    }

    // ── Carving tests ───────────────────────────────────────────

    #[test]
    fn carve_opens_both_sides() {
        let mut g = GridMaze::new(2, 2).unwrap();
        g.carve(c(1, 1), c(2, 1)).unwrap();
        let map = g.wall_map();
        assert!(map.get(c(1, 1)).unwrap().is_open(Compass::South));
        assert!(map.get(c(2, 1)).unwrap().is_open(Compass::North));
        assert!(g.is_passage(c(2, 1), c(1, 1)));
        assert_eq!(g.passages(c(1, 1)).as_slice(), &[(Compass::South, c(2, 1))]);
    }

    #[test]
    fn wall_closes_both_sides() {
        let mut g = GridMaze::open_room(2, 2).unwrap();
        g.wall(c(1, 2), c(1, 1)).unwrap();
        assert!(!g.is_passage(c(1, 1), c(1, 2)));
        assert!(!g.wall_map().get(c(1, 1)).unwrap().is_open(Compass::East));
        assert!(!g.wall_map().get(c(1, 2)).unwrap().is_open(Compass::West));
    }

    #[test]
    fn carve_rejects_non_adjacent() {
        let mut g = GridMaze::new(3, 3).unwrap();
        assert_eq!(
            g.carve(c(1, 1), c(2, 2)),
            Err(GridError::NotAdjacent {
                a: c(1, 1),
                b: c(2, 2)
            })
        );
        assert!(matches!(
            g.carve(c(1, 1), c(1, 1)),
            Err(GridError::NotAdjacent { .. })
        ));
    }

    #[test]
    fn carve_rejects_out_of_bounds() {
        let mut g = GridMaze::new(3, 3).unwrap();
        assert!(matches!(
            g.carve(c(1, 1), c(0, 1)),
            Err(GridError::CellOutOfBounds { .. })
        ));
    }

    #[test]
    fn open_room_keeps_boundary_closed() {
        let g = GridMaze::open_room(3, 3).unwrap();
        let corner = g.wall_map().get(c(1, 1)).unwrap();
        assert!(!corner.is_open(Compass::North));
        assert!(!corner.is_open(Compass::West));
        assert!(corner.is_open(Compass::South));
        assert!(corner.is_open(Compass::East));
        assert_eq!(g.wall_map().get(c(2, 2)).unwrap(), Openness::ALL_OPEN);
    }

    #[test]
    fn canonical_ordering_is_row_major() {
        let g = GridMaze::new(2, 2).unwrap();
        assert_eq!(
            g.canonical_ordering(),
            vec![c(1, 1), c(1, 2), c(2, 1), c(2, 2)]
        );
    }

    #[test]
    fn provider_defaults_start_at_far_corner() {
        let g = GridMaze::new(4, 7).unwrap();
        assert_eq!(g.start(), c(4, 7));
        assert_eq!(g.goal(), Cell::ORIGIN);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn open_room_walls_are_symmetric(rows in 1u32..8, cols in 1u32..8) {
            let g = GridMaze::open_room(rows, cols).unwrap();
            for cell in g.canonical_ordering() {
                let o = g.wall_map().get(cell).unwrap();
                for dir in Compass::ALL {
                    let inside = cell.checked_neighbour(dir).map(|n| g.contains(n)).unwrap_or(false);
                    prop_assert_eq!(o.is_open(dir), inside);
                }
            }
        }

        #[test]
        fn neighbours_symmetric(rows in 1u32..10, cols in 1u32..10, r in 1i32..10, col in 1i32..10) {
            let g = GridMaze::new(rows, cols).unwrap();
            let cell = c((r - 1) % rows as i32 + 1, (col - 1) % cols as i32 + 1);
            for (dir, nb) in g.neighbours(cell) {
                prop_assert!(g.neighbours(nb).contains(&(dir.opposite(), cell)));
            }
        }
    }
}
