//! End-to-end solve example.
//!
//! Demonstrates: generate a maze → explore it from the far corner → build
//! the path to `(1, 1)` → print the route and run statistics.
//!
//! Run with `RUST_LOG=debug` to see the explorer's own log lines.

use lefthand_core::{Cell, MazeProvider};
use lefthand_explore::{solve, ExploreConfig};
use lefthand_test_utils::fixtures::perfect_maze;
use log::info;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Lefthand Solve Example ===\n");

    let maze = perfect_maze(20, 20, 42);
    info!(
        "generated {}x{} maze, start={} goal={}",
        maze.rows(),
        maze.cols(),
        maze.start(),
        maze.goal()
    );

    let solution = solve(&maze, &ExploreConfig::state_space_bounded()).unwrap();
    let stats = &solution.exploration.stats;

    println!("Exploration:");
    println!("  cells visited:       {}", solution.exploration.sequence.len());
    println!("  iterations:          {}", stats.iterations);
    println!("  moves:               {}", stats.moves);
    println!("  clockwise turns:     {}", stats.clockwise_turns);
    println!("  anticlockwise turns: {}", stats.anticlockwise_turns);
    println!("  revisits:            {}", stats.revisits);
    println!("  final orientation:   {}", solution.exploration.final_orientation);

    println!("\nPath to {}:", solution.path.goal());
    for (cell, next) in &solution.path {
        println!("  {cell} -> {next}");
    }

    let route = solution.path.route();
    println!(
        "\nRoute of {} cells, reached goal: {}",
        route.len(),
        solution.path.reached_goal()
    );
    assert_eq!(route.first(), Some(&maze.start()));
    assert_eq!(route.last(), Some(&Cell::ORIGIN));
}
