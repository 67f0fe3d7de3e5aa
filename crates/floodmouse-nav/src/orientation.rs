//! Turning the robot to face a desired heading.
//!
//! [`TURN_TABLE`] is total over every `(current, desired)` pair. A
//! reversal is always two right turns.

use crate::state::RobotState;
use floodmouse_core::{Command, Direction, InterfaceError, RobotInterface};

/// A single 90° in-place rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Counter-clockwise.
    Left,
    /// Clockwise.
    Right,
}

impl Turn {
    /// The recorded command for this turn.
    pub fn command(self) -> Command {
        match self {
            Turn::Left => Command::TurnLeft,
            Turn::Right => Command::TurnRight,
        }
    }

    /// The heading after applying this turn to `heading`.
    pub fn apply(self, heading: Direction) -> Direction {
        match self {
            Turn::Left => heading.turned_left(),
            Turn::Right => heading.turned_right(),
        }
    }
}

const STAY: &[Turn] = &[];
const LEFT: &[Turn] = &[Turn::Left];
const RIGHT: &[Turn] = &[Turn::Right];
const REVERSE: &[Turn] = &[Turn::Right, Turn::Right];

/// Turn sequence indexed by `[current.index()][desired.index()]`.
pub const TURN_TABLE: [[&[Turn]; 4]; 4] = [
    // Up
    [STAY, RIGHT, REVERSE, LEFT],
    // Right
    [LEFT, STAY, RIGHT, REVERSE],
    // Down
    [REVERSE, LEFT, STAY, RIGHT],
    // Left
    [RIGHT, REVERSE, LEFT, STAY],
];

/// The turns that rotate `current` onto `desired`.
pub fn turns_between(current: Direction, desired: Direction) -> &'static [Turn] {
    TURN_TABLE[current.index()][desired.index()]
}

/// Turn the robot to face `desired`, updating `state.heading` after each
/// acknowledged turn.
///
/// Returns the turns issued. On failure the heading reflects the turns
/// that completed.
pub fn face<R: RobotInterface + ?Sized>(
    robot: &mut R,
    state: &mut RobotState,
    desired: Direction,
) -> Result<&'static [Turn], InterfaceError> {
    let turns = turns_between(state.heading, desired);
    for &turn in turns {
        match turn {
            Turn::Left => robot.turn_left()?,
            Turn::Right => robot.turn_right()?,
        }
        state.heading = turn.apply(state.heading);
    }
    debug_assert_eq!(state.heading, desired);
    Ok(turns)
}
