use floodmouse_core::{Color, Direction, DisplayCoord, InterfaceError, RobotInterface};

/// Wraps a robot and fails deterministically after N sensor or motion
/// calls.
///
/// Calls `0..fail_after` are forwarded; every later one returns
/// [`InterfaceError::Timeout`]. Display calls are forwarded and never
/// counted.
#[derive(Clone, Debug)]
pub struct FailingRobot<R> {
    inner: R,
    fail_after: usize,
    calls: usize,
}

impl<R: RobotInterface> FailingRobot<R> {
    pub fn new(inner: R, fail_after: usize) -> Self {
        Self {
            inner,
            fail_after,
            calls: 0,
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn calls(&self) -> usize {
        self.calls
    }

    fn gate(&mut self, op: &'static str) -> Result<(), InterfaceError> {
        self.calls += 1;
        if self.calls > self.fail_after {
            return Err(InterfaceError::Timeout {
                op,
                timeout_ms: 5_000,
            });
        }
        Ok(())
    }
}

impl<R: RobotInterface> RobotInterface for FailingRobot<R> {
    fn wall_left(&mut self) -> Result<bool, InterfaceError> {
        self.gate("wallLeft")?;
        self.inner.wall_left()
    }

    fn wall_front(&mut self) -> Result<bool, InterfaceError> {
        self.gate("wallFront")?;
        self.inner.wall_front()
    }

    fn wall_right(&mut self) -> Result<bool, InterfaceError> {
        self.gate("wallRight")?;
        self.inner.wall_right()
    }

    fn turn_left(&mut self) -> Result<(), InterfaceError> {
        self.gate("turnLeft")?;
        self.inner.turn_left()
    }

    fn turn_right(&mut self) -> Result<(), InterfaceError> {
        self.gate("turnRight")?;
        self.inner.turn_right()
    }

    fn move_forward(&mut self) -> Result<(), InterfaceError> {
        self.gate("moveForward")?;
        self.inner.move_forward()
    }

    fn set_color(&mut self, at: DisplayCoord, color: Color) -> Result<(), InterfaceError> {
        self.inner.set_color(at, color)
    }

    fn set_text(&mut self, at: DisplayCoord, text: &str) -> Result<(), InterfaceError> {
        self.inner.set_text(at, text)
    }

    fn set_wall(&mut self, at: DisplayCoord, side: Direction) -> Result<(), InterfaceError> {
        self.inner.set_wall(at, side)
    }
}
