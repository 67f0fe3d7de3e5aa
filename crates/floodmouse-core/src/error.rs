//! Error types for the floodmouse controller.
//!
//! Two layers: [`InterfaceError`] for failures of the external robot
//! interface, and [`NavError`] for everything that aborts a run. There are
//! no recoverable categories; any anomaly means either an unsolvable maze
//! or a malfunctioning interface.

use crate::geom::Cell;
use thiserror::Error;

/// Failures of a call through the [`RobotInterface`](crate::RobotInterface).
///
/// All of them are fatal to the run. Physical motion is never retried.
#[derive(Debug, Error)]
pub enum InterfaceError {
    /// Reading from or writing to the robot link failed.
    #[error("robot i/o failed during `{op}`: {source}")]
    Io {
        /// The request being executed.
        op: &'static str,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The robot did not answer within the configured bound.
    #[error("robot did not answer `{op}` within {timeout_ms} ms")]
    Timeout {
        /// The request being executed.
        op: &'static str,
        /// The configured response bound.
        timeout_ms: u64,
    },
    /// The robot answered with something the protocol does not allow.
    #[error("unexpected response to `{op}`: {response:?}")]
    Protocol {
        /// The request being executed.
        op: &'static str,
        /// The raw response line.
        response: String,
    },
    /// The robot reported a collision while executing a motion.
    #[error("robot crashed while executing `{op}`")]
    Crashed {
        /// The motion being executed.
        op: &'static str,
    },
    /// The robot link was closed.
    #[error("robot interface disconnected")]
    Disconnected,
}

/// Fatal errors that abort a navigation run.
#[derive(Debug, Error)]
pub enum NavError {
    /// The current cell has no traversable neighbour.
    #[error("boxed in at {cell}: every neighbour is outside the maze or behind a known wall")]
    BoxedIn {
        /// The robot's cell.
        cell: Cell,
    },
    /// The current cell has no known path to any goal cell.
    #[error("no path from {cell} to the goal under current wall knowledge")]
    UnreachableGoal {
        /// The robot's cell.
        cell: Cell,
    },
    /// The safety bound on ticks was reached before the goal.
    #[error("tick limit of {limit} reached before the goal")]
    TickLimitExceeded {
        /// The configured limit.
        limit: u64,
    },
    /// A sensor or actuator call failed.
    #[error("robot interface failure: {0}")]
    Interface(#[from] InterfaceError),
}
