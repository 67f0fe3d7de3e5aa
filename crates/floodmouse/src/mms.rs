//! Adapter for the `mms` micromouse simulator.
//!
//! The simulator launches the controller as a child process and talks
//! to it over a line protocol: each request is one line on the
//! controller's stdout, and requests that expect an answer get exactly
//! one line back on stdin.
//!
//! | Request | Response |
//! |---------|----------|
//! | `wallLeft`, `wallFront`, `wallRight` | `true` or `false` |
//! | `turnLeft`, `turnRight` | `ack` |
//! | `moveForward` | `ack` or `crash` |
//! | `mazeWidth`, `mazeHeight` | integer |
//! | `setColor x y c`, `setText x y text`, `setWall x y d` | none |
//!
//! Responses are read on a background thread and handed over through a
//! channel, so every request can wait with a bound.

use std::io::{self, BufRead, BufReader, Write};
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError};
use floodmouse_core::{Color, Direction, DisplayCoord, InterfaceError, RobotInterface};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Settings for [`MmsRobot`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MmsConfig {
    /// How long a request may wait for its response. Default: 5000.
    pub response_timeout_ms: u64,
}

impl Default for MmsConfig {
    fn default() -> Self {
        Self {
            response_timeout_ms: 5_000,
        }
    }
}

/// A [`RobotInterface`] speaking the `mms` protocol.
pub struct MmsRobot<W> {
    out: W,
    responses: Receiver<io::Result<String>>,
    timeout: Duration,
    timeout_ms: u64,
}

impl MmsRobot<io::Stdout> {
    /// Talk to the simulator over the process's stdin and stdout.
    pub fn stdio(config: &MmsConfig) -> Result<Self, InterfaceError> {
        Self::new(BufReader::new(io::stdin()), io::stdout(), config)
    }
}

impl<W: Write> MmsRobot<W> {
    /// Read responses from `input` and write requests to `out`.
    ///
    /// `input` is moved to a reader thread that lives until it reaches
    /// end of input.
    pub fn new<I>(input: I, out: W, config: &MmsConfig) -> Result<Self, InterfaceError>
    where
        I: BufRead + Send + 'static,
    {
        let (tx, rx) = crossbeam_channel::unbounded();
        thread::Builder::new()
            .name("mms-reader".into())
            .spawn(move || {
                for line in input.lines() {
                    let failed = line.is_err();
                    if tx.send(line).is_err() || failed {
                        break;
                    }
                }
            })
            .map_err(|source| InterfaceError::Io {
                op: "spawn reader",
                source,
            })?;
        Ok(Self {
            out,
            responses: rx,
            timeout: Duration::from_millis(config.response_timeout_ms),
            timeout_ms: config.response_timeout_ms,
        })
    }

    /// The request sink.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Width of the simulated maze, in cells.
    pub fn maze_width(&mut self) -> Result<usize, InterfaceError> {
        self.query_size("mazeWidth")
    }

    /// Height of the simulated maze, in cells.
    pub fn maze_height(&mut self) -> Result<usize, InterfaceError> {
        self.query_size("mazeHeight")
    }

    fn send(&mut self, op: &'static str, line: &str) -> Result<(), InterfaceError> {
        trace!(request = line, "mms");
        writeln!(self.out, "{line}")
            .and_then(|()| self.out.flush())
            .map_err(|source| InterfaceError::Io { op, source })
    }

    fn request(&mut self, op: &'static str) -> Result<String, InterfaceError> {
        self.send(op, op)?;
        match self.responses.recv_timeout(self.timeout) {
            Ok(Ok(line)) => {
                trace!(response = line.as_str(), "mms");
                Ok(line.trim().to_string())
            }
            Ok(Err(source)) => Err(InterfaceError::Io { op, source }),
            Err(RecvTimeoutError::Timeout) => Err(InterfaceError::Timeout {
                op,
                timeout_ms: self.timeout_ms,
            }),
            Err(RecvTimeoutError::Disconnected) => Err(InterfaceError::Disconnected),
        }
    }

    fn query_bool(&mut self, op: &'static str) -> Result<bool, InterfaceError> {
        let response = self.request(op)?;
        match response.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(InterfaceError::Protocol { op, response }),
        }
    }

    fn query_ack(&mut self, op: &'static str) -> Result<(), InterfaceError> {
        let response = self.request(op)?;
        match response.as_str() {
            "ack" => Ok(()),
            "crash" => Err(InterfaceError::Crashed { op }),
            _ => Err(InterfaceError::Protocol { op, response }),
        }
    }

    fn query_size(&mut self, op: &'static str) -> Result<usize, InterfaceError> {
        let response = self.request(op)?;
        response
            .parse()
            .map_err(|_| InterfaceError::Protocol { op, response })
    }
}

impl<W: Write> RobotInterface for MmsRobot<W> {
    fn wall_left(&mut self) -> Result<bool, InterfaceError> {
        self.query_bool("wallLeft")
    }

    fn wall_front(&mut self) -> Result<bool, InterfaceError> {
        self.query_bool("wallFront")
    }

    fn wall_right(&mut self) -> Result<bool, InterfaceError> {
        self.query_bool("wallRight")
    }

    fn turn_left(&mut self) -> Result<(), InterfaceError> {
        self.query_ack("turnLeft")
    }

    fn turn_right(&mut self) -> Result<(), InterfaceError> {
        self.query_ack("turnRight")
    }

    fn move_forward(&mut self) -> Result<(), InterfaceError> {
        self.query_ack("moveForward")
    }

    fn set_color(&mut self, at: DisplayCoord, color: Color) -> Result<(), InterfaceError> {
        self.send("setColor", &format!("setColor {at} {}", color.code()))
    }

    fn set_text(&mut self, at: DisplayCoord, text: &str) -> Result<(), InterfaceError> {
        self.send("setText", &format!("setText {at} {text}"))
    }

    fn set_wall(&mut self, at: DisplayCoord, side: Direction) -> Result<(), InterfaceError> {
        self.send("setWall", &format!("setWall {at} {}", side.compass()))
    }
}
