//! Flood-fill controller for the `mms` micromouse simulator.
//!
//! Usage: `floodmouse [CONFIG.toml]`
//!
//! stdout carries the simulator protocol, so all logging goes to stderr.
//! Set `RUST_LOG` to change the log level.

use std::path::PathBuf;
use std::process::ExitCode;

use floodmouse::app::{run_mms, AppConfig, AppError};
use floodmouse::mms::MmsRobot;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("floodmouse=info,floodmouse_nav=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "floodmouse failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::discover(explicit.as_deref())?;

    let robot = MmsRobot::stdio(&config.mms)?;
    let report = run_mms(robot, &config.controller)?;

    info!(
        cell = %report.state.cell,
        ticks = report.metrics.ticks,
        turns = report.metrics.turns,
        commands = %format!("{:016x}", report.command_hash),
        "reached the goal"
    );
    Ok(())
}
