//! Running a controller against the `mms` simulator.
//!
//! [`AppConfig`] bundles the controller and adapter settings read by the
//! binary, and [`run_mms`] sizes the maze from the simulator before
//! handing control to the [`Controller`].

use std::io::Write;
use std::path::Path;

use floodmouse_core::{InterfaceError, NavError};
use floodmouse_nav::{ConfigError, Controller, ControllerConfig, RunReport};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::mms::{MmsConfig, MmsRobot};

/// Config file looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "floodmouse.toml";

/// Settings read by the `floodmouse` binary.
///
/// ```toml
/// [controller]
/// max_ticks = 5000
/// annotate_distances = true
///
/// [mms]
/// response_timeout_ms = 2000
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Navigation settings.
    pub controller: ControllerConfig,
    /// Simulator link settings.
    pub mms: MmsConfig,
}

impl AppConfig {
    /// Read and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text)?;
        config.controller.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, else [`DEFAULT_CONFIG_FILE`] if it
    /// exists, else the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!(path = %path.display(), "loading configuration");
            return Self::load(path);
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            info!(path = DEFAULT_CONFIG_FILE, "loading configuration");
            return Self::load(fallback);
        }
        info!("using default configuration");
        Ok(Self::default())
    }
}

/// Anything that stops the binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The run aborted.
    #[error(transparent)]
    Nav(#[from] NavError),
    /// The simulator link failed before the run started.
    #[error(transparent)]
    Interface(#[from] InterfaceError),
    /// The simulator reports a maze that is not square.
    #[error("maze is {width}x{height}; only square mazes are supported")]
    NonSquareMaze {
        /// Reported width.
        width: usize,
        /// Reported height.
        height: usize,
    },
}

/// Size the maze from the simulator, then run the controller to the goal.
///
/// The simulator's dimensions override `maze_size` in `config`, with the
/// start moved to the new bottom-left corner.
pub fn run_mms<W: Write>(
    mut robot: MmsRobot<W>,
    config: &ControllerConfig,
) -> Result<RunReport, AppError> {
    let width = robot.maze_width()?;
    let height = robot.maze_height()?;
    if width != height {
        return Err(AppError::NonSquareMaze { width, height });
    }

    let config = if width == config.maze_size {
        config.clone()
    } else {
        warn!(
            configured = config.maze_size,
            simulator = width,
            "maze size differs from configuration; using the simulator's"
        );
        config.with_maze_size(width)
    };

    let mut controller = Controller::new(robot, config)?;
    Ok(controller.run()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodmouse_core::Cell;
    use std::io::Cursor;

    fn link(script: &str) -> MmsRobot<Vec<u8>> {
        MmsRobot::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            &MmsConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn solves_a_tiny_simulated_maze() {
        // 3x3 open maze, goal (1,1), start (2,0).
        let script = "3\n3\n\
                      ack\n\
                      false\nfalse\ntrue\nack\nfalse\nack\n\
                      true\nfalse\nfalse\nack\nfalse\nack\n";
        let report = run_mms(link(script), &ControllerConfig::default()).unwrap();
        assert_eq!(report.state.cell, Cell::new(1, 1));
        assert_eq!(report.metrics.ticks, 2);
        assert_eq!(report.metrics.advances, 2);
        assert_eq!(report.metrics.turns, 3);
    }

    #[test]
    fn rejects_rectangular_maze() {
        let err = run_mms(link("16\n8\n"), &ControllerConfig::default()).unwrap_err();
        assert!(matches!(err, AppError::NonSquareMaze { width: 16, height: 8 }));
    }

    #[test]
    fn simulator_crash_aborts() {
        // Classic maze: align right, then the first move crashes.
        let script = "16\n16\nack\nfalse\nfalse\nfalse\nack\nfalse\ncrash\n";
        let err = run_mms(link(script), &ControllerConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            AppError::Nav(NavError::Interface(InterfaceError::Crashed { .. }))
        ));
    }

    #[test]
    fn config_sections() {
        let config: AppConfig = toml::from_str(
            "[controller]\nmax_ticks = 77\n\n[mms]\nresponse_timeout_ms = 250\n",
        )
        .unwrap();
        assert_eq!(config.controller.max_ticks, 77);
        assert_eq!(config.mms.response_timeout_ms, 250);
        assert_eq!(AppConfig::default().mms.response_timeout_ms, 5_000);
    }

    #[test]
    fn explicit_missing_file_fails() {
        let err = AppConfig::discover(Some(Path::new("/nonexistent/floodmouse.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
