//! Controller configuration, validation, and error types.
//!
//! [`ControllerConfig`] is read from TOML. Missing keys take their
//! defaults, so an empty file describes the classic 16×16 run.

use floodmouse_core::{Cell, Direction};
use floodmouse_maze::{Grid, MazeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

// ── ControllerConfig ───────────────────────────────────────────────

/// Parameters of a navigation run.
///
/// ```
/// use floodmouse_core::{Cell, Direction};
/// use floodmouse_nav::ControllerConfig;
///
/// let config: ControllerConfig = toml::from_str("max_ticks = 500").unwrap();
/// assert_eq!(config.max_ticks, 500);
/// assert_eq!(config.start, Cell::new(15, 0));
/// assert_eq!(config.start_heading, Direction::Right);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Side length of the square maze. Default: 16.
    pub maze_size: usize,
    /// Start cell. Default: row 15, col 0 (bottom-left).
    pub start: Cell,
    /// Heading the robot is turned to before the first tick. Default: right.
    pub start_heading: Direction,
    /// Heading the robot physically faces at power-on. Default: up.
    pub mount_heading: Direction,
    /// Exploring ticks allowed before the run is aborted. Default: 10 000.
    pub max_ticks: u64,
    /// Paint each entered cell on the display. Default: true.
    pub paint_path: bool,
    /// Write every cell's distance on the display after each recompute.
    /// Default: false.
    pub annotate_distances: bool,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            maze_size: Grid::CLASSIC_SIZE,
            start: Cell::new(Grid::CLASSIC_SIZE - 1, 0),
            start_heading: Direction::Right,
            mount_heading: Direction::Up,
            max_ticks: 10_000,
            paint_path: true,
            annotate_distances: false,
        }
    }
}

impl ControllerConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maze_size == 0 || self.maze_size > Grid::MAX_SIZE {
            return Err(ConfigError::InvalidMazeSize {
                size: self.maze_size,
            });
        }
        if !self.start.in_bounds(self.maze_size) {
            return Err(ConfigError::StartOutOfBounds {
                start: self.start,
                size: self.maze_size,
            });
        }
        if self.max_ticks == 0 {
            return Err(ConfigError::ZeroTickLimit);
        }
        Ok(())
    }

    /// Copy of this config with the maze size replaced and the start
    /// moved to the bottom-left corner of the new maze.
    pub fn with_maze_size(&self, size: usize) -> Self {
        Self {
            maze_size: size,
            start: Cell::new(size.saturating_sub(1), 0),
            ..self.clone()
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while loading or validating a [`ControllerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `maze_size` is zero or too large to store.
    #[error("invalid maze size {size} (must be 1..={max})", max = Grid::MAX_SIZE)]
    InvalidMazeSize {
        /// The configured size.
        size: usize,
    },
    /// `start` lies outside the maze.
    #[error("start cell {start} is outside the {size}x{size} maze")]
    StartOutOfBounds {
        /// The configured start.
        start: Cell,
        /// The configured maze size.
        size: usize,
    },
    /// `max_ticks` is zero.
    #[error("max_ticks must be at least 1")]
    ZeroTickLimit,
    /// A supplied grid does not match `maze_size`.
    #[error("grid is {actual}x{actual} but the config expects {expected}x{expected}")]
    GridSizeMismatch {
        /// The configured size.
        expected: usize,
        /// The grid's size.
        actual: usize,
    },
    /// Building the grid failed.
    #[error(transparent)]
    Maze(#[from] MazeError),
    /// The config file could not be read.
    #[error("cannot read config {}: {source}", .path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML for this schema.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ControllerConfig::default();
        config.validate().unwrap();
        assert_eq!(config.maze_size, 16);
        assert_eq!(config.start, Cell::new(15, 0));
        assert_eq!(config.mount_heading, Direction::Up);
        assert!(config.paint_path);
        assert!(!config.annotate_distances);
    }

    #[test]
    fn empty_toml_is_default() {
        let config: ControllerConfig = toml::from_str("").unwrap();
        assert_eq!(config, ControllerConfig::default());
    }

    #[test]
    fn full_toml() {
        let config: ControllerConfig = toml::from_str(
            r#"
            maze_size = 8
            start = { row = 7, col = 0 }
            start_heading = "up"
            mount_heading = "up"
            max_ticks = 100
            paint_path = false
            annotate_distances = true
            "#,
        )
        .unwrap();
        config.validate().unwrap();
        assert_eq!(config.start, Cell::new(7, 0));
        assert_eq!(config.start_heading, Direction::Up);
        assert!(config.annotate_distances);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = toml::from_str::<ControllerConfig>("speed = 3").unwrap_err();
        assert!(err.to_string().contains("speed"));
    }

    #[test]
    fn validation_failures() {
        let mut config = ControllerConfig {
            maze_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidMazeSize { size: 0 })));

        config.maze_size = 4;
        assert!(matches!(config.validate(), Err(ConfigError::StartOutOfBounds { .. })));

        config = config.with_maze_size(4);
        assert_eq!(config.start, Cell::new(3, 0));
        config.validate().unwrap();

        config.max_ticks = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroTickLimit)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ControllerConfig::load("/nonexistent/floodmouse.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/floodmouse.toml"));
    }

    #[test]
    fn load_validates() {
        let path = std::env::temp_dir().join(format!("floodmouse-cfg-{}.toml", std::process::id()));
        std::fs::write(&path, "max_ticks = 0\n").unwrap();
        let err = ControllerConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::ZeroTickLimit));
    }
}
