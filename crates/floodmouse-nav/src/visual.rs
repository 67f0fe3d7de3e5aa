//! Helpers for the simulator's visualization channel.
//!
//! Every call here is best effort: failures are logged at debug level
//! and dropped.

use floodmouse_core::{Cell, Color, Direction, InterfaceError, RobotInterface};
use floodmouse_maze::{DistanceField, GoalSet};
use tracing::debug;

pub(crate) fn best_effort(result: Result<(), InterfaceError>, what: &'static str) {
    if let Err(err) = result {
        debug!(%err, what, "visualization call failed");
    }
}

pub(crate) fn paint<R: RobotInterface + ?Sized>(robot: &mut R, size: usize, cell: Cell, color: Color) {
    best_effort(robot.set_color(cell.display(size), color), "setColor");
}

pub(crate) fn label<R: RobotInterface + ?Sized>(robot: &mut R, size: usize, cell: Cell, text: &str) {
    best_effort(robot.set_text(cell.display(size), text), "setText");
}

pub(crate) fn mark_wall<R: RobotInterface + ?Sized>(
    robot: &mut R,
    size: usize,
    cell: Cell,
    side: Direction,
) {
    best_effort(robot.set_wall(cell.display(size), side), "setWall");
}

/// Paint the start red and every goal green, with labels.
pub(crate) fn paint_landmarks<R: RobotInterface + ?Sized>(
    robot: &mut R,
    size: usize,
    start: Cell,
    goals: &GoalSet,
) {
    paint(robot, size, start, Color::DarkRed);
    label(robot, size, start, "Start");
    for goal in goals.iter() {
        paint(robot, size, goal, Color::DarkGreen);
        label(robot, size, goal, "Goal");
    }
}

/// Write every reachable cell's distance into the display.
pub(crate) fn annotate_distances<R: RobotInterface + ?Sized>(robot: &mut R, field: &DistanceField) {
    let size = field.size();
    for row in 0..size {
        for col in 0..size {
            let cell = Cell::new(row, col);
            if let Some(d) = field.distance(cell) {
                label(robot, size, cell, &d.to_string());
            }
        }
    }
}
