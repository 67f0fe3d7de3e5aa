use std::collections::VecDeque;

use floodmouse_core::{
    Color, Command, Direction, DisplayCoord, InterfaceError, RobotInterface,
};

use crate::display::DisplayLog;

/// A robot whose sensors replay fixed scripts.
///
/// Each sensor has its own queue; a call pops the next value, or returns
/// `false` once the queue is empty. Motion always succeeds and is only
/// recorded, so the robot has no pose of its own.
///
/// [`with_reading`](Self::with_reading) queues one full left/front/right
/// reading. [`with_front`](Self::with_front) queues an extra front value,
/// consumed by the re-check after a turn.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRobot {
    lefts: VecDeque<bool>,
    fronts: VecDeque<bool>,
    rights: VecDeque<bool>,
    commands: Vec<Command>,
    sensor_calls: usize,
    display: DisplayLog,
}

impl ScriptedRobot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reading(mut self, left: bool, front: bool, right: bool) -> Self {
        self.lefts.push_back(left);
        self.fronts.push_back(front);
        self.rights.push_back(right);
        self
    }

    pub fn with_front(mut self, front: bool) -> Self {
        self.fronts.push_back(front);
        self
    }

    pub fn with_failing_display(mut self) -> Self {
        self.display.fail = true;
        self
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn moves(&self) -> usize {
        self.commands.iter().filter(|c| c.is_move()).count()
    }

    /// Sensor queries answered so far.
    pub fn sensor_calls(&self) -> usize {
        self.sensor_calls
    }

    pub fn colors(&self) -> &[(DisplayCoord, Color)] {
        &self.display.colors
    }

    pub fn texts(&self) -> &[(DisplayCoord, String)] {
        &self.display.texts
    }

    pub fn walls(&self) -> &[(DisplayCoord, Direction)] {
        &self.display.walls
    }

    fn pop(queue: &mut VecDeque<bool>, calls: &mut usize) -> Result<bool, InterfaceError> {
        *calls += 1;
        Ok(queue.pop_front().unwrap_or(false))
    }
}

impl RobotInterface for ScriptedRobot {
    fn wall_left(&mut self) -> Result<bool, InterfaceError> {
        Self::pop(&mut self.lefts, &mut self.sensor_calls)
    }

    fn wall_front(&mut self) -> Result<bool, InterfaceError> {
        Self::pop(&mut self.fronts, &mut self.sensor_calls)
    }

    fn wall_right(&mut self) -> Result<bool, InterfaceError> {
        Self::pop(&mut self.rights, &mut self.sensor_calls)
    }

    fn turn_left(&mut self) -> Result<(), InterfaceError> {
        self.commands.push(Command::TurnLeft);
        Ok(())
    }

    fn turn_right(&mut self) -> Result<(), InterfaceError> {
        self.commands.push(Command::TurnRight);
        Ok(())
    }

    fn move_forward(&mut self) -> Result<(), InterfaceError> {
        self.commands.push(Command::MoveForward);
        Ok(())
    }

    fn set_color(&mut self, at: DisplayCoord, color: Color) -> Result<(), InterfaceError> {
        self.display.set_color(at, color)
    }

    fn set_text(&mut self, at: DisplayCoord, text: &str) -> Result<(), InterfaceError> {
        self.display.set_text(at, text)
    }

    fn set_wall(&mut self, at: DisplayCoord, side: Direction) -> Result<(), InterfaceError> {
        self.display.set_wall(at, side)
    }
}
