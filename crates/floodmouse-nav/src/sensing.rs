//! Wall sensing and merging sensed walls into the grid.
//!
//! The robot reports walls relative to its heading. [`merge_walls`]
//! rotates each reading into an absolute edge and records it, so callers
//! never branch on the heading themselves.

use crate::state::RobotState;
use floodmouse_core::{Direction, InterfaceError, Relative, RobotInterface};
use floodmouse_maze::Grid;
use smallvec::SmallVec;

/// One reading of the three wall sensors, relative to the heading at the
/// time of sensing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WallReading {
    /// Wall to the robot's left.
    pub left: bool,
    /// Wall directly ahead.
    pub front: bool,
    /// Wall to the robot's right.
    pub right: bool,
}

impl WallReading {
    /// Query the sensors in left, front, right order.
    ///
    /// The first failing call aborts the reading.
    pub fn sense<R: RobotInterface + ?Sized>(robot: &mut R) -> Result<Self, InterfaceError> {
        Ok(Self {
            left: robot.wall_left()?,
            front: robot.wall_front()?,
            right: robot.wall_right()?,
        })
    }

    /// The reading for one side.
    pub fn get(&self, side: Relative) -> bool {
        match side {
            Relative::Left => self.left,
            Relative::Front => self.front,
            Relative::Right => self.right,
        }
    }
}

/// Record every wall in `reading` on the edges around `state.cell`.
///
/// Returns the absolute sides whose walls were not known before, in
/// left, front, right order. Walls on the maze perimeter are already
/// implied by the grid and are skipped.
pub fn merge_walls(
    grid: &mut Grid,
    state: &RobotState,
    reading: &WallReading,
) -> SmallVec<[Direction; 3]> {
    Relative::SENSED
        .iter()
        .filter(|&&side| reading.get(side))
        .map(|&side| state.heading.rotate(side))
        .filter(|&dir| grid.add_wall(state.cell, dir))
        .collect()
}
