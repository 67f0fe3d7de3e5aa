//! Error types for maze construction and parsing.

use thiserror::Error;

/// Errors arising from grid construction or maze text parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Attempted to construct a maze with zero cells.
    #[error("maze must have at least one cell")]
    EmptyMaze,
    /// The requested side length exceeds what distances can represent.
    #[error("maze size {size} exceeds maximum of {max}")]
    MazeTooLarge {
        /// The requested side length.
        size: usize,
        /// The largest supported side length.
        max: usize,
    },
    /// A text maze could not be parsed.
    #[error("maze text line {line}: {reason}")]
    Parse {
        /// 1-based line number of the problem.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}
