//! Robot pose and run phase.

use floodmouse_core::{Cell, Direction};
use std::fmt;

/// Where the robot is and which way it faces.
///
/// Only the motion executor changes `cell` and only the orientation
/// controller changes `heading`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RobotState {
    /// The cell the robot occupies.
    pub cell: Cell,
    /// The absolute heading the robot faces.
    pub heading: Direction,
}

impl RobotState {
    /// A robot at `cell` facing `heading`.
    pub fn new(cell: Cell, heading: Direction) -> Self {
        Self { cell, heading }
    }
}

impl fmt::Display for RobotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.cell, self.heading)
    }
}

/// Phase of the main loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Still searching for the goal; ticks sense, plan and move.
    Exploring,
    /// Terminal: the robot occupies a goal cell and no further
    /// sensing or motion happens.
    AtGoal,
}
