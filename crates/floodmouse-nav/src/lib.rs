//! Navigation loop for the floodmouse controller.
//!
//! Provides the [`Controller`] that drives a [`RobotInterface`] from its
//! start cell into the goal region, one tick at a time:
//!
//! sense walls → merge into the [`Grid`] → recompute the
//! [`DistanceField`] → choose a direction → turn → advance.
//!
//! Each stage lives in its own module and can be used on its own:
//! [`sensing`], [`navigator`], [`orientation`] and [`motion`].
//!
//! [`RobotInterface`]: floodmouse_core::RobotInterface
//! [`Grid`]: floodmouse_maze::Grid
//! [`DistanceField`]: floodmouse_maze::DistanceField

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod metrics;
pub mod motion;
pub mod navigator;
pub mod orientation;
pub mod record;
pub mod sensing;
pub mod state;
mod visual;

pub use config::{ConfigError, ControllerConfig};
pub use controller::{Controller, RunReport, TickReport};
pub use metrics::RunMetrics;
pub use motion::{Advance, Motion};
pub use orientation::Turn;
pub use record::CommandLog;
pub use sensing::WallReading;
pub use state::{Phase, RobotState};
