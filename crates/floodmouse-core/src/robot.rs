//! The robot actuation and sensing interface consumed by the controller.

use crate::error::InterfaceError;
use crate::geom::{Direction, DisplayCoord};

/// Cell highlight colours understood by the simulator display.
///
/// Each colour maps to the single-character code the simulator expects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// `k`
    Black,
    /// `b`
    Blue,
    /// `c`
    Cyan,
    /// `g`
    Green,
    /// `o`
    Orange,
    /// `r`
    Red,
    /// `w`
    White,
    /// `y`
    Yellow,
    /// `B`, used for cells the robot has driven through.
    DarkBlue,
    /// `G`, used for goal cells.
    DarkGreen,
    /// `R`, used for the start cell.
    DarkRed,
}

impl Color {
    /// The simulator's colour code.
    pub fn code(self) -> char {
        match self {
            Color::Black => 'k',
            Color::Blue => 'b',
            Color::Cyan => 'c',
            Color::Green => 'g',
            Color::Orange => 'o',
            Color::Red => 'r',
            Color::White => 'w',
            Color::Yellow => 'y',
            Color::DarkBlue => 'B',
            Color::DarkGreen => 'G',
            Color::DarkRed => 'R',
        }
    }
}

/// Synchronous interface to a physical or simulated micromouse.
///
/// Sensor readings are relative to the robot's current heading. Every
/// call may block; implementations bound that wait and report an
/// [`InterfaceError`] rather than hanging.
///
/// The visualization methods (`set_color`, `set_text`, `set_wall`) are a
/// debugging side channel. Callers treat their failures as non-fatal.
/// They take [`DisplayCoord`]s, whose rows count from the bottom.
pub trait RobotInterface {
    /// Whether a wall is directly to the robot's left.
    fn wall_left(&mut self) -> Result<bool, InterfaceError>;

    /// Whether a wall is directly ahead.
    fn wall_front(&mut self) -> Result<bool, InterfaceError>;

    /// Whether a wall is directly to the robot's right.
    fn wall_right(&mut self) -> Result<bool, InterfaceError>;

    /// Rotate 90° counter-clockwise.
    fn turn_left(&mut self) -> Result<(), InterfaceError>;

    /// Rotate 90° clockwise.
    fn turn_right(&mut self) -> Result<(), InterfaceError>;

    /// Drive one cell forward.
    ///
    /// The caller guarantees that no wall is ahead.
    fn move_forward(&mut self) -> Result<(), InterfaceError>;

    /// Highlight a cell.
    fn set_color(&mut self, at: DisplayCoord, color: Color) -> Result<(), InterfaceError>;

    /// Write a short label into a cell.
    fn set_text(&mut self, at: DisplayCoord, text: &str) -> Result<(), InterfaceError>;

    /// Mark a wall on the given side of a cell.
    fn set_wall(&mut self, at: DisplayCoord, side: Direction) -> Result<(), InterfaceError>;
}

impl<R: RobotInterface + ?Sized> RobotInterface for &mut R {
    fn wall_left(&mut self) -> Result<bool, InterfaceError> {
        (**self).wall_left()
    }

    fn wall_front(&mut self) -> Result<bool, InterfaceError> {
        (**self).wall_front()
    }

    fn wall_right(&mut self) -> Result<bool, InterfaceError> {
        (**self).wall_right()
    }

    fn turn_left(&mut self) -> Result<(), InterfaceError> {
        (**self).turn_left()
    }

    fn turn_right(&mut self) -> Result<(), InterfaceError> {
        (**self).turn_right()
    }

    fn move_forward(&mut self) -> Result<(), InterfaceError> {
        (**self).move_forward()
    }

    fn set_color(&mut self, at: DisplayCoord, color: Color) -> Result<(), InterfaceError> {
        (**self).set_color(at, color)
    }

    fn set_text(&mut self, at: DisplayCoord, text: &str) -> Result<(), InterfaceError> {
        (**self).set_text(at, text)
    }

    fn set_wall(&mut self, at: DisplayCoord, side: Direction) -> Result<(), InterfaceError> {
        (**self).set_wall(at, side)
    }
}
