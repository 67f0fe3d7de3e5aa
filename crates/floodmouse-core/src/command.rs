//! Physical commands issued to the robot.

use std::fmt;

/// A motion command sent through the [`RobotInterface`](crate::RobotInterface).
///
/// Only commands that change the robot's physical pose are recorded;
/// sensing and visualization calls are not.
///
/// # Examples
///
/// ```
/// use floodmouse_core::Command;
///
/// let log = [Command::TurnRight, Command::MoveForward];
/// assert!(log[1].is_move());
/// assert_eq!(log[0].to_string(), "turnRight");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Rotate 90° counter-clockwise in place.
    TurnLeft = 0,
    /// Rotate 90° clockwise in place.
    TurnRight = 1,
    /// Drive one cell forward.
    MoveForward = 2,
}

impl Command {
    /// Whether this command translates the robot.
    pub fn is_move(self) -> bool {
        self == Command::MoveForward
    }

    /// Stable one-byte tag, used when hashing command sequences.
    pub fn tag(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::TurnLeft => "turnLeft",
            Command::TurnRight => "turnRight",
            Command::MoveForward => "moveForward",
        };
        f.write_str(name)
    }
}
