use floodmouse_core::{
    Cell, Color, Command, Direction, DisplayCoord, InterfaceError, Relative, RobotInterface,
};
use floodmouse_maze::Grid;

use crate::display::DisplayLog;

/// A robot driving through a maze whose walls are fully known.
///
/// Sensors report the true walls around the current cell. Moving into a
/// wall fails with [`InterfaceError::Crashed`] and leaves the robot where
/// it was.
#[derive(Clone, Debug)]
pub struct SimulatedRobot {
    truth: Grid,
    cell: Cell,
    heading: Direction,
    commands: Vec<Command>,
    visited: Vec<Cell>,
    display: DisplayLog,
}

impl SimulatedRobot {
    /// A robot at `cell` physically facing `heading`.
    pub fn new(truth: Grid, cell: Cell, heading: Direction) -> Self {
        Self {
            truth,
            cell,
            heading,
            commands: Vec::new(),
            visited: vec![cell],
            display: DisplayLog::default(),
        }
    }

    pub fn truth(&self) -> &Grid {
        &self.truth
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn moves(&self) -> usize {
        self.commands.iter().filter(|c| c.is_move()).count()
    }

    /// Every cell occupied, starting with the start cell.
    pub fn visited(&self) -> &[Cell] {
        &self.visited
    }

    pub fn display(&self) -> &DisplayLog {
        &self.display
    }

    fn sense(&self, side: Relative) -> bool {
        self.truth.has_wall(self.cell, self.heading.rotate(side))
    }
}

impl RobotInterface for SimulatedRobot {
    fn wall_left(&mut self) -> Result<bool, InterfaceError> {
        Ok(self.sense(Relative::Left))
    }

    fn wall_front(&mut self) -> Result<bool, InterfaceError> {
        Ok(self.sense(Relative::Front))
    }

    fn wall_right(&mut self) -> Result<bool, InterfaceError> {
        Ok(self.sense(Relative::Right))
    }

    fn turn_left(&mut self) -> Result<(), InterfaceError> {
        self.commands.push(Command::TurnLeft);
        self.heading = self.heading.turned_left();
        Ok(())
    }

    fn turn_right(&mut self) -> Result<(), InterfaceError> {
        self.commands.push(Command::TurnRight);
        self.heading = self.heading.turned_right();
        Ok(())
    }

    fn move_forward(&mut self) -> Result<(), InterfaceError> {
        if self.sense(Relative::Front) {
            return Err(InterfaceError::Crashed { op: "moveForward" });
        }
        let next = self
            .cell
            .neighbour(self.heading, self.truth.size())
            .ok_or(InterfaceError::Crashed { op: "moveForward" })?;
        self.commands.push(Command::MoveForward);
        self.cell = next;
        self.visited.push(next);
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
