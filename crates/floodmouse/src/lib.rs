//! Floodmouse: a flood-fill maze controller for micromouse robots.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all floodmouse sub-crates, together with the adapter for the `mms`
//! simulator and the `floodmouse` binary that runs under it.
//!
//! # Quick start
//!
//! ```rust
//! use floodmouse::prelude::*;
//!
//! // A 16×16 maze with one wall above the start cell.
//! let mut grid = Grid::classic();
//! grid.add_wall(Cell::new(15, 0), Direction::Up);
//!
//! let field = DistanceField::compute(&grid, &GoalSet::center(16));
//! assert_eq!(field.distance(Cell::new(15, 0)), Some(14));
//! assert_eq!(
//!     floodmouse::nav::navigator::choose_direction(&grid, &field, Cell::new(15, 0)).unwrap(),
//!     Direction::Right,
//! );
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `floodmouse-core` | Cells, headings, commands, the robot trait, errors |
//! | [`maze`] | `floodmouse-maze` | Wall grid, goal set, distance field, text mazes |
//! | [`nav`] | `floodmouse-nav` | Navigator, orientation, motion, the main loop |
//! | [`mms`] | this crate | `mms` simulator protocol adapter |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`floodmouse-core`).
pub use floodmouse_core as types;

/// Wall grid and distance field (`floodmouse-maze`).
pub use floodmouse_maze as maze;

/// The navigation loop and its stages (`floodmouse-nav`).
pub use floodmouse_nav as nav;

pub mod app;
pub mod mms;

/// Common imports for driving a controller.
///
/// ```rust
/// use floodmouse::prelude::*;
/// ```
pub mod prelude {
    pub use floodmouse_core::{
        Cell, Color, Command, Direction, DisplayCoord, InterfaceError, NavError, Relative,
        RobotInterface,
    };
    pub use floodmouse_maze::{DistanceField, GoalSet, Grid, MazeError};
    pub use floodmouse_nav::{
        Advance, CommandLog, ConfigError, Controller, ControllerConfig, Phase, RobotState,
        RunMetrics, RunReport, TickReport,
    };

    pub use crate::app::{AppConfig, AppError};
    pub use crate::mms::{MmsConfig, MmsRobot};
}
