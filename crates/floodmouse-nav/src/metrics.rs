//! Per-run counters.

use serde::Serialize;

/// Counters accumulated over a navigation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunMetrics {
    /// Exploring ticks executed.
    pub ticks: u64,
    /// Ticks that ended with the robot in a new cell.
    pub advances: u64,
    /// Ticks where a front wall stopped the move.
    pub vetoes: u64,
    /// Ticks where a move toward the outside was suppressed.
    pub clamps: u64,
    /// Turn commands issued, including the initial alignment.
    pub turns: u64,
    /// Interior walls newly recorded.
    pub walls_discovered: u64,
    /// Distance updates summed over every field computation.
    pub relaxations: u64,
}
