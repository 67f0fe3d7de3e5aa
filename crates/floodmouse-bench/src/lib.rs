//! Benchmark profiles for the floodmouse maze controller.
//!
//! - [`open_profile`]: a maze with no interior walls, the widest flood.
//! - [`perfect_profile`]: a seeded spanning-tree maze, the longest paths.
//! - [`simulated_run`]: a controller wired to a simulated robot.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use floodmouse_maze::{GoalSet, Grid};
use floodmouse_nav::{Controller, ControllerConfig};
use floodmouse_test_utils::fixtures;
use floodmouse_test_utils::SimulatedRobot;

/// An open `size × size` maze with its centre goals.
pub fn open_profile(size: usize) -> (Grid, GoalSet) {
    (fixtures::open_maze(size), GoalSet::center(size))
}

/// A perfect `size × size` maze with its centre goals.
pub fn perfect_profile(size: usize, seed: u64) -> (Grid, GoalSet) {
    (fixtures::random_perfect_maze(size, seed), GoalSet::center(size))
}

/// A fresh controller at the bottom-left corner of `truth`, knowing only
/// the perimeter.
///
/// # Panics
///
/// If `truth` has an invalid size for a controller config.
pub fn simulated_run(truth: Grid) -> Controller<SimulatedRobot> {
    let config = ControllerConfig {
        paint_path: false,
        max_ticks: 1_000_000,
        ..ControllerConfig::default().with_maze_size(truth.size())
    };
    let robot = SimulatedRobot::new(truth, config.start, config.mount_heading);
    Controller::new(robot, config).expect("bench config is valid")
}
