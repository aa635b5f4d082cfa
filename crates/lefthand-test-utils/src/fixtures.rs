//! Reusable maze fixtures.
//!
//! - [`open_room`]: every interior passage open, boundary closed.
//! - [`corridor`]: a single `1 x len` row.
//! - [`comb`]: a spine along row 1 with a tooth down every column.
//! - [`perfect_maze`]: seeded recursive backtracker (a spanning tree).
//! - [`split_maze`]: a perfect maze over every cell but `(1, 1)`.
//! - [`boundless_wall_map`]: every side of every cell open, boundary included.
//!
//! Fixtures panic on zero dimensions; they are for tests only.

use lefthand_core::{Cell, GridMaze, MazeProvider, Openness, WallMap};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Grid with every interior wall removed.
pub fn open_room(rows: u32, cols: u32) -> GridMaze {
    GridMaze::open_room(rows, cols).expect("fixture dimensions must be non-zero")
}

/// A single horizontal corridor of `len` cells.
pub fn corridor(len: u32) -> GridMaze {
    open_room(1, len)
}

/// Row 1 fully open, and every column open from row 1 down to `rows`.
///
/// A tree, so a wall follower covers it from any start.
pub fn comb(rows: u32, cols: u32) -> GridMaze {
    let mut maze = GridMaze::new(rows, cols).expect("fixture dimensions must be non-zero");
    for c in 1..cols as i32 {
        carve(&mut maze, Cell::new(1, c), Cell::new(1, c + 1));
    }
    for c in 1..=cols as i32 {
        for r in 1..rows as i32 {
            carve(&mut maze, Cell::new(r, c), Cell::new(r + 1, c));
        }
    }
    maze
}

/// Perfect maze from a seeded recursive backtracker.
///
/// Every cell is reachable from every other by exactly one route. The
/// same `(rows, cols, seed)` always yields the same maze.
pub fn perfect_maze(rows: u32, cols: u32, seed: u64) -> GridMaze {
    let mut maze = GridMaze::new(rows, cols).expect("fixture dimensions must be non-zero");
    let mut visited = vec![false; maze.cell_count()];
    backtrack(&mut maze, &mut visited, Cell::ORIGIN, seed);
    maze
}

/// Perfect maze over every cell except `(1, 1)`, which stays fully walled.
///
/// The goal corner is unreachable from anywhere else, so an unbounded
/// wall follower never finishes. Needs at least two cells.
pub fn split_maze(rows: u32, cols: u32, seed: u64) -> GridMaze {
    let mut maze = GridMaze::new(rows, cols).expect("fixture dimensions must be non-zero");
    assert!(maze.cell_count() >= 2, "split_maze needs at least two cells");
    let mut visited = vec![false; maze.cell_count()];
    visited[0] = true;
    let far = Cell::new(rows as i32, cols as i32);
    backtrack(&mut maze, &mut visited, far, seed);
    maze
}

/// Iterative recursive-backtracker carving from `first`.
///
/// `visited` is indexed row-major and cells already marked are never
/// entered.
fn backtrack(maze: &mut GridMaze, visited: &mut [bool], first: Cell, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let width = maze.cols() as usize;
    let idx = |cell: Cell| (cell.row as usize - 1) * width + (cell.col as usize - 1);

    visited[idx(first)] = true;
    let mut stack = vec![first];

    while let Some(&current) = stack.last() {
        let unvisited: Vec<Cell> = maze
            .neighbours(current)
            .into_iter()
            .map(|(_, n)| n)
            .filter(|&n| !visited[idx(n)])
            .collect();
        if unvisited.is_empty() {
            stack.pop();
            continue;
        }
        let next = unvisited[rng.random_range(0..unvisited.len())];
        carve(maze, current, next);
        visited[idx(next)] = true;
        stack.push(next);
    }
}

/// Wall map over `rows x cols` with all four sides of every cell open.
///
/// Boundary sides lead to cells that are not in the map.
pub fn boundless_wall_map(rows: u32, cols: u32) -> WallMap {
    open_room(rows, cols)
        .wall_map()
        .cells()
        .map(|cell| (cell, Openness::ALL_OPEN))
        .collect()
}

fn carve(maze: &mut GridMaze, a: Cell, b: Cell) {
    maze.carve(a, b).expect("fixture cells are adjacent and in bounds");
}
