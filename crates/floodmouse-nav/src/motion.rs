//! Advancing the robot one cell.

use crate::state::RobotState;
use crate::visual;
use floodmouse_core::{Cell, Color, InterfaceError, RobotInterface};
use tracing::{debug, warn};

/// Outcome of one [`Motion::advance`] attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Advance {
    /// The robot drove from `from` to `to`.
    Moved {
        /// Cell before the move.
        from: Cell,
        /// Cell after the move.
        to: Cell,
    },
    /// A wall was sensed ahead; the robot stayed put.
    Vetoed,
    /// The move would have left the maze; the robot stayed put and no
    /// command was issued.
    Clamped,
}

impl Advance {
    /// Whether the robot changed cell.
    pub fn moved(&self) -> bool {
        matches!(self, Advance::Moved { .. })
    }
}

/// Executes forward motion and keeps [`RobotState::cell`] in sync.
#[derive(Clone, Copy, Debug)]
pub struct Motion {
    size: usize,
    paint_path: bool,
}

impl Motion {
    /// Motion inside a `size × size` maze. With `paint_path`, every newly
    /// entered cell is painted on the display.
    pub fn new(size: usize, paint_path: bool) -> Self {
        Self { size, paint_path }
    }

    /// Drive one cell in `state.heading` unless `front_wall` is set.
    ///
    /// A move that would leave the maze is clamped: nothing is sent to the
    /// robot. Position only changes after the robot acknowledges the move.
    pub fn advance<R: RobotInterface + ?Sized>(
        &self,
        robot: &mut R,
        state: &mut RobotState,
        front_wall: bool,
    ) -> Result<Advance, InterfaceError> {
        if front_wall {
            warn!(cell = %state.cell, heading = %state.heading, "move vetoed by front wall");
            return Ok(Advance::Vetoed);
        }
        let Some(to) = state.cell.neighbour(state.heading, self.size) else {
            warn!(cell = %state.cell, heading = %state.heading, "move clamped at maze edge");
            return Ok(Advance::Clamped);
        };

        robot.move_forward()?;
        let from = state.cell;
        state.cell = to;
        debug!(%from, %to, "advanced");

        if self.paint_path {
            visual::paint(robot, self.size, to, Color::DarkBlue);
        }
        Ok(Advance::Moved { from, to })
    }
}
