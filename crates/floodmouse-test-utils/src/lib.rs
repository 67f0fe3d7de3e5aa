//! Test robots and maze fixtures for floodmouse development.
//!
//! Three [`RobotInterface`](floodmouse_core::RobotInterface) implementations
//! cover the scenarios the controller is tested against:
//!
//! - [`SimulatedRobot`]: drives through a ground-truth [`Grid`] and senses
//!   its real walls. Crashes if told to move into one.
//! - [`ScriptedRobot`]: answers sensor queries from fixed scripts,
//!   independent of any maze.
//! - [`FailingRobot`]: wraps another robot and fails after N calls.
//!
//! Each records the commands and display calls it received.
//!
//! [`Grid`]: floodmouse_maze::Grid

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
mod display;
mod failing;
mod scripted;
mod simulated;

pub use display::DisplayLog;
pub use failing::FailingRobot;
pub use scripted::ScriptedRobot;
pub use simulated::SimulatedRobot;
