//! The main navigation loop.
//!
//! A [`Controller`] owns the robot link, the wall map and the robot's
//! pose. Each [`step`](Controller::step) runs one tick in fixed order:
//!
//! 1. sense left, front and right walls
//! 2. merge them into the [`Grid`]
//! 3. recompute the [`DistanceField`] from scratch
//! 4. choose the next direction
//! 5. turn to face it
//! 6. re-check the front wall if the robot turned, then advance
//! 7. check for the goal
//!
//! The loop stops in [`Phase::AtGoal`]. Any interface failure, an
//! enclosed or cut-off cell, or the tick limit aborts the run.

use crate::config::{ConfigError, ControllerConfig};
use crate::metrics::RunMetrics;
use crate::motion::{Advance, Motion};
use crate::navigator;
use crate::orientation::{self, Turn};
use crate::record::CommandLog;
use crate::sensing::{self, WallReading};
use crate::state::{Phase, RobotState};
use crate::visual;
use floodmouse_core::{Cell, Command, Direction, NavError, RobotInterface};
use floodmouse_maze::{DistanceField, GoalSet, Grid};
use tracing::{debug, error, info};

/// What happened during one exploring tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// 1-based tick number.
    pub tick: u64,
    /// Cell the tick started in.
    pub from: Cell,
    /// Distance to the goal at the start of the tick.
    pub distance: u16,
    /// Direction chosen by the navigator.
    pub chosen: Direction,
    /// Turns issued to face `chosen`.
    pub turns: &'static [Turn],
    /// Interior walls newly recorded this tick.
    pub walls_added: usize,
    /// Result of the move attempt.
    pub advance: Advance,
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Final pose; its cell is a goal cell.
    pub state: RobotState,
    /// Counters accumulated over the run.
    pub metrics: RunMetrics,
    /// [`CommandLog::hash`] of every command issued.
    pub command_hash: u64,
    /// [`Grid::fingerprint`] of the final wall map.
    pub grid_fingerprint: u64,
}

/// Drives a [`RobotInterface`] from its start cell into the goal region.
///
/// # Examples
///
/// ```
/// use floodmouse_core::Cell;
/// use floodmouse_maze::Grid;
/// use floodmouse_nav::{Controller, ControllerConfig};
/// use floodmouse_test_utils::SimulatedRobot;
///
/// let config = ControllerConfig::default();
/// let robot = SimulatedRobot::new(Grid::classic(), config.start, config.mount_heading);
/// let mut controller = Controller::new(robot, config).unwrap();
/// let report = controller.run().unwrap();
/// assert_eq!(report.metrics.advances, 14);
/// assert_eq!(report.state.cell, Cell::new(8, 7));
/// ```
#[derive(Debug)]
pub struct Controller<R> {
    robot: R,
    config: ControllerConfig,
    grid: Grid,
    goals: GoalSet,
    state: RobotState,
    phase: Phase,
    motion: Motion,
    metrics: RunMetrics,
    log: CommandLog,
    prepared: bool,
}

impl<R: RobotInterface> Controller<R> {
    /// A controller with no walls known beyond the perimeter.
    pub fn new(robot: R, config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.maze_size)?;
        Self::with_grid(robot, config, grid)
    }

    /// A controller starting from an existing wall map.
    pub fn with_grid(robot: R, config: ControllerConfig, grid: Grid) -> Result<Self, ConfigError> {
        config.validate()?;
        if grid.size() != config.maze_size {
            return Err(ConfigError::GridSizeMismatch {
                expected: config.maze_size,
                actual: grid.size(),
            });
        }
        let goals = GoalSet::center(config.maze_size);
        let phase = if goals.contains(config.start) {
            Phase::AtGoal
        } else {
            Phase::Exploring
        };
        Ok(Self {
            robot,
            state: RobotState::new(config.start, config.mount_heading),
            motion: Motion::new(config.maze_size, config.paint_path),
            grid,
            goals,
            phase,
            config,
            metrics: RunMetrics::default(),
            log: CommandLog::new(),
            prepared: false,
        })
    }

    /// Paint the landmarks and turn from the mount heading to the start
    /// heading. Runs once; later calls do nothing.
    pub fn prepare(&mut self) -> Result<(), NavError> {
        if self.prepared {
            return Ok(());
        }
        let size = self.config.maze_size;
        visual::paint_landmarks(&mut self.robot, size, self.config.start, &self.goals);

        let turns = orientation::face(&mut self.robot, &mut self.state, self.config.start_heading)?;
        self.record_turns(turns);
        self.prepared = true;
        debug!(state = %self.state, turns = turns.len(), "prepared");
        Ok(())
    }

    /// Run one tick.
    ///
    /// Returns `None` once the robot is in the goal region; no sensing or
    /// motion happens from then on.
    pub fn step(&mut self) -> Result<Option<TickReport>, NavError> {
        self.prepare()?;
        if self.phase == Phase::AtGoal {
            return Ok(None);
        }
        if self.metrics.ticks >= self.config.max_ticks {
            return Err(NavError::TickLimitExceeded {
                limit: self.config.max_ticks,
            });
        }
        self.metrics.ticks += 1;
        let tick = self.metrics.ticks;
        let from = self.state.cell;

        let reading = WallReading::sense(&mut self.robot)?;
        let mut walls_added = self.merge(&reading);

        let field = DistanceField::compute(&self.grid, &self.goals);
        self.metrics.relaxations += field.relaxations() as u64;
        if self.config.annotate_distances {
            visual::annotate_distances(&mut self.robot, &field);
        }

        let Some(distance) = field.distance(from) else {
            return Err(if self.grid.open_neighbours(from).is_empty() {
                NavError::BoxedIn { cell: from }
            } else {
                NavError::UnreachableGoal { cell: from }
            });
        };

        let chosen = navigator::choose_direction(&self.grid, &field, from)?;
        let turns = orientation::face(&mut self.robot, &mut self.state, chosen)?;
        self.record_turns(turns);

        let front_wall = if turns.is_empty() {
            reading.front
        } else {
            let front = self.robot.wall_front()?;
            if front && self.grid.add_wall(from, self.state.heading) {
                walls_added += 1;
                self.metrics.walls_discovered += 1;
                visual::mark_wall(&mut self.robot, self.config.maze_size, from, self.state.heading);
            }
            front
        };

        let advance = self.motion.advance(&mut self.robot, &mut self.state, front_wall)?;
        match advance {
            Advance::Moved { .. } => {
                self.log.push(Command::MoveForward);
                self.metrics.advances += 1;
            }
            Advance::Vetoed => self.metrics.vetoes += 1,
            Advance::Clamped => self.metrics.clamps += 1,
        }

        debug!(
            tick,
            %from,
            distance,
            %chosen,
            turns = turns.len(),
            walls_added,
            ?advance,
            "tick"
        );

        if self.goals.contains(self.state.cell) {
            self.phase = Phase::AtGoal;
            info!(tick, cell = %self.state.cell, "goal reached");
        }

        Ok(Some(TickReport {
            tick,
            from,
            distance,
            chosen,
            turns,
            walls_added,
            advance,
        }))
    }

    /// Prepare, then step until the goal is reached.
    pub fn run(&mut self) -> Result<RunReport, NavError> {
        info!(
            size = self.config.maze_size,
            start = %self.config.start,
            max_ticks = self.config.max_ticks,
            "run starting"
        );
        if let Err(err) = self.drive() {
            error!(%err, tick = self.metrics.ticks, state = %self.state, "run aborted");
            return Err(err);
        }

        let report = RunReport {
            state: self.state,
            metrics: self.metrics.clone(),
            command_hash: self.log.hash(),
            grid_fingerprint: self.grid.fingerprint(),
        };
        info!(
            ticks = report.metrics.ticks,
            advances = report.metrics.advances,
            vetoes = report.metrics.vetoes,
            walls = report.metrics.walls_discovered,
            "run finished"
        );
        debug!("known walls:\n{}", self.grid.render_ascii(None));
        Ok(report)
    }

    fn drive(&mut self) -> Result<(), NavError> {
        self.prepare()?;
        while self.step()?.is_some() {}
        Ok(())
    }

    fn merge(&mut self, reading: &WallReading) -> usize {
        let added = sensing::merge_walls(&mut self.grid, &self.state, reading);
        for &side in &added {
            visual::mark_wall(&mut self.robot, self.config.maze_size, self.state.cell, side);
        }
        self.metrics.walls_discovered += added.len() as u64;
        added.len()
    }

    fn record_turns(&mut self, turns: &[Turn]) {
        for turn in turns {
            self.log.push(turn.command());
        }
        self.metrics.turns += turns.len() as u64;
    }

    /// The known walls.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The goal region.
    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }

    /// Current pose.
    pub fn state(&self) -> RobotState {
        self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Exploring ticks run so far.
    pub fn tick(&self) -> u64 {
        self.metrics.ticks
    }

    /// Counters so far.
    pub fn metrics(&self) -> &RunMetrics {
        &self.metrics
    }

    /// Every turn and move issued so far.
    pub fn command_log(&self) -> &CommandLog {
        &self.log
    }

    /// The active configuration.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The robot link.
    pub fn robot(&self) -> &R {
        &self.robot
    }

    /// The robot link, mutably.
    pub fn robot_mut(&mut self) -> &mut R {
        &mut self.robot
    }

    /// Give back the robot link.
    pub fn into_robot(self) -> R {
        self.robot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use floodmouse_core::{Color, DisplayCoord};
    use floodmouse_test_utils::ScriptedRobot;

    fn config() -> ControllerConfig {
        ControllerConfig::default()
    }

    #[test]
    fn prepare_paints_and_aligns() {
        let mut c = Controller::new(ScriptedRobot::new(), config()).unwrap();
        c.prepare().unwrap();
        c.prepare().unwrap();
        assert_eq!(c.state().heading, Direction::Right);
        assert_eq!(c.command_log().as_slice(), &[Command::TurnRight]);

        let robot = c.robot();
        assert_eq!(robot.colors()[0], (DisplayCoord { x: 0, y: 0 }, Color::DarkRed));
        assert_eq!(robot.texts()[0], (DisplayCoord { x: 0, y: 0 }, "Start".to_string()));
        let goals = robot.colors().iter().filter(|(_, c)| *c == Color::DarkGreen).count();
        assert_eq!(goals, 4);
        assert!(robot.colors().contains(&(DisplayCoord { x: 7, y: 8 }, Color::DarkGreen)));
    }

    #[test]
    fn first_tick_on_open_maze() {
        let mut c = Controller::new(ScriptedRobot::new(), config()).unwrap();
        let report = c.step().unwrap().unwrap();
        assert_eq!(report.tick, 1);
        assert_eq!(report.from, Cell::new(15, 0));
        assert_eq!(report.distance, 14);
        // Up and Right tie; Up wins.
        assert_eq!(report.chosen, Direction::Up);
        assert_eq!(report.turns, &[Turn::Left]);
        assert_eq!(
            report.advance,
            Advance::Moved {
                from: Cell::new(15, 0),
                to: Cell::new(14, 0)
            }
        );
        // Sensed left, front, right, then front again after the turn.
        assert_eq!(c.robot().sensor_calls(), 4);
    }

    #[test]
    fn straight_tick_reuses_front_reading() {
        let mut c = Controller::new(ScriptedRobot::new(), config()).unwrap();
        c.step().unwrap();
        let report = c.step().unwrap().unwrap();
        assert!(report.turns.is_empty());
        assert_eq!(c.robot().sensor_calls(), 7);
    }

    #[test]
    fn sensed_walls_are_recorded() {
        let robot = ScriptedRobot::new().with_reading(true, false, false);
        let mut c = Controller::new(robot, config()).unwrap();
        let report = c.step().unwrap().unwrap();
        // Facing right at (15,0), left is up.
        assert!(c.grid().has_wall(Cell::new(15, 0), Direction::Up));
        assert_eq!(report.walls_added, 1);
        assert_eq!(report.chosen, Direction::Right);
        assert!(report.turns.is_empty());
        assert_eq!(c.robot().walls(), &[(DisplayCoord { x: 0, y: 0 }, Direction::Up)]);
    }

    #[test]
    fn start_in_goal_does_nothing() {
        let config = ControllerConfig {
            start: Cell::new(7, 7),
            ..config()
        };
        let mut c = Controller::new(ScriptedRobot::new(), config).unwrap();
        assert_eq!(c.phase(), Phase::AtGoal);
        assert!(c.step().unwrap().is_none());
        assert_eq!(c.robot().sensor_calls(), 0);
    }

    #[test]
    fn annotation_writes_every_distance() {
        let config = ControllerConfig {
            annotate_distances: true,
            ..config()
        };
        let mut c = Controller::new(ScriptedRobot::new(), config).unwrap();
        c.step().unwrap();
        // Start and goal labels, then 256 distances.
        let texts = c.robot().texts();
        assert_eq!(texts.len(), 5 + 256);
        assert!(texts.contains(&(DisplayCoord { x: 0, y: 0 }, "14".to_string())));
    }

    #[test]
    fn display_failures_are_ignored() {
        let robot = ScriptedRobot::new().with_failing_display();
        let mut c = Controller::new(robot, config()).unwrap();
        assert!(c.step().unwrap().is_some());
    }

    #[test]
    fn grid_size_must_match() {
        let err = Controller::with_grid(ScriptedRobot::new(), config(), Grid::new(8).unwrap())
            .unwrap_err();
        assert!(matches!(err, ConfigError::GridSizeMismatch { expected: 16, actual: 8 }));
    }
}
