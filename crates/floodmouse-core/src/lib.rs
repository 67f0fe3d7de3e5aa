//! Core types and traits for the floodmouse maze controller.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: cell
//! coordinates, headings, the robot actuation/sensor interface, the
//! command record, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod command;
pub mod error;
pub mod geom;
pub mod robot;

pub use command::Command;
pub use error::{InterfaceError, NavError};
pub use geom::{Cell, Direction, DisplayCoord, Relative};
pub use robot::{Color, RobotInterface};
