//! Maze state for the floodmouse controller.
//!
//! This crate owns the two pieces of spatial state the controller
//! reasons over:
//!
//! - [`Grid`]: the monotonic record of discovered walls, one bit per
//!   shared edge.
//! - [`DistanceField`]: hop distances to the [`GoalSet`], recomputed from
//!   scratch by multi-source breadth-first propagation.
//!
//! The [`ascii`] module reads and writes the classic text maze format
//! used by fixtures and debug logs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ascii;
pub mod distance;
pub mod error;
pub mod goal;
pub mod grid;

pub use distance::DistanceField;
pub use error::MazeError;
pub use goal::GoalSet;
pub use grid::Grid;
