//! Tick-driven grid navigation simulation
//!
//! The simulation owns the occupancy map and the plan follower. Edits are
//! applied between ticks through [`Simulation::toggle`]; each [`Simulation::tick`]
//! lends the map read-only to one planning call and commits at most one move.

use log::info;
use nalgebra::DMatrix;

use crate::common::{Cell, CellState, GridPath, NavigationError, NavigationResult, RobotState};
use crate::path_tracking::{PlanFollower, StepOutcome};
use crate::utils::GridMap;

/// Configuration for a navigation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Initial occupancy map
    pub grid: GridMap,
    /// Robot start cell
    pub start: Cell,
    /// Goal cell
    pub goal: Cell,
    /// Intended tick rate for an external driver [Hz]
    pub tick_rate_hz: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        #[rustfmt::skip]
        let occupancy = DMatrix::from_row_slice(6, 6, &[
            0u8, 0, 0, 0, 1, 0,
            1,   1, 1, 0, 1, 0,
            0,   0, 1, 0, 1, 0,
            0,   1, 0, 0, 1, 0,
            0,   0, 0, 1, 1, 0,
            1,   0, 0, 0, 0, 0,
        ]);
        let states = occupancy.map(|v| if v == 0 { CellState::Free } else { CellState::Obstacle });
        Self {
            grid: GridMap::from_states(states),
            start: Cell::new(0, 0),
            goal: Cell::new(5, 5),
            tick_rate_hz: 5.0,
        }
    }
}

impl SimulationConfig {
    pub fn with_grid(mut self, grid: GridMap) -> Self {
        self.grid = grid;
        self
    }

    pub fn with_start(mut self, start: Cell) -> Self {
        self.start = start;
        self
    }

    pub fn with_goal(mut self, goal: Cell) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_tick_rate(mut self, hz: f64) -> Self {
        self.tick_rate_hz = hz;
        self
    }
}

/// Result of running the simulation without edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: usize,
    pub moves: usize,
    pub reached_goal: bool,
    pub last_outcome: Option<StepOutcome>,
}

pub struct Simulation {
    grid: GridMap,
    follower: PlanFollower,
    tick_count: usize,
    tick_rate_hz: f64,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> NavigationResult<Self> {
        let SimulationConfig {
            grid,
            start,
            goal,
            tick_rate_hz,
        } = config;

        if !(tick_rate_hz > 0.0 && tick_rate_hz.is_finite()) {
            return Err(NavigationError::InvalidParameter(format!(
                "tick rate must be positive, got {}",
                tick_rate_hz
            )));
        }
        for cell in [start, goal] {
            if !grid.contains(cell) {
                return Err(NavigationError::OutOfBounds {
                    cell,
                    height: grid.height(),
                    width: grid.width(),
                });
            }
        }

        Ok(Self {
            grid,
            follower: PlanFollower::new(start, goal),
            tick_count: 0,
            tick_rate_hz,
        })
    }

    /// Flip a cell between ticks. Out-of-bounds cells are rejected, never clamped.
    ///
    /// The robot's own cell and the goal may be toggled.
    pub fn toggle(&mut self, cell: Cell) -> NavigationResult<CellState> {
        self.grid.toggle(cell)
    }

    /// Run one plan + commit cycle
    pub fn tick(&mut self) -> StepOutcome {
        self.tick_count += 1;
        let outcome = self.follower.step(&self.grid);
        if let StepOutcome::Moved { to, .. } = outcome {
            if to == self.follower.goal() {
                info!("goal {} reached after {} ticks", to, self.tick_count);
            }
        }
        outcome
    }

    /// Tick until the goal is reached, no progress is possible, or `max_ticks` is spent
    pub fn run_until_settled(&mut self, max_ticks: usize) -> RunSummary {
        let mut summary = RunSummary {
            ticks: 0,
            moves: 0,
            reached_goal: self.follower.is_at_goal(),
            last_outcome: None,
        };

        while summary.ticks < max_ticks && !summary.reached_goal {
            let outcome = self.tick();
            summary.ticks += 1;
            summary.last_outcome = Some(outcome);
            match outcome {
                StepOutcome::Moved { .. } => summary.moves += 1,
                StepOutcome::AtGoal => {}
                StepOutcome::NoPath | StepOutcome::StepRejected { .. } => {
                    info!("run stalled at {} after {} ticks", self.position(), self.tick_count);
                    break;
                }
            }
            summary.reached_goal = self.follower.is_at_goal();
        }

        summary
    }

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn robot(&self) -> RobotState {
        self.follower.robot()
    }

    pub fn position(&self) -> Cell {
        self.follower.position()
    }

    pub fn goal(&self) -> Cell {
        self.follower.goal()
    }

    pub fn latest_path(&self) -> &GridPath {
        self.follower.latest_path()
    }

    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Seconds between ticks for an external driver
    pub fn tick_period(&self) -> f64 {
        1.0 / self.tick_rate_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scenario_reaches_goal() {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        let summary = sim.run_until_settled(100);
        assert!(summary.reached_goal);
        assert_eq!(summary.moves, 12);
        assert_eq!(summary.ticks, 12);
        assert_eq!(sim.position(), Cell::new(5, 5));
        assert_eq!(sim.tick_count(), 12);
    }

    #[test]
    fn test_first_tick_moves_right() {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        assert_eq!(
            sim.tick(),
            StepOutcome::Moved {
                from: Cell::new(0, 0),
                to: Cell::new(0, 1)
            }
        );
        assert_eq!(sim.latest_path().len(), 13);
    }

    #[test]
    fn test_rejects_out_of_bounds_config() {
        let config = SimulationConfig::default().with_goal(Cell::new(6, 5));
        assert!(matches!(
            Simulation::new(config),
            Err(NavigationError::OutOfBounds { .. })
        ));
        let config = SimulationConfig::default().with_start(Cell::new(0, -1));
        assert!(Simulation::new(config).is_err());
        let config = SimulationConfig::default().with_tick_rate(0.0);
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_toggle_rejects_out_of_bounds() {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        let before = sim.grid().clone();
        assert!(sim.toggle(Cell::new(-1, 3)).is_err());
        assert!(sim.toggle(Cell::new(2, 6)).is_err());
        assert_eq!(sim.grid(), &before);
    }

    #[test]
    fn test_blocking_route_stalls_then_recovers() {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        sim.tick();
        sim.toggle(Cell::new(1, 3)).unwrap();

        let summary = sim.run_until_settled(20);
        assert!(!summary.reached_goal);
        assert_eq!(summary.last_outcome, Some(StepOutcome::NoPath));
        let stuck_at = sim.position();

        assert_eq!(sim.tick(), StepOutcome::NoPath);
        assert_eq!(sim.position(), stuck_at);

        sim.toggle(Cell::new(1, 3)).unwrap();
        assert!(sim.run_until_settled(50).reached_goal);
    }

    #[test]
    fn test_robot_waits_when_goal_blocked() {
        let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
        assert!(sim.run_until_settled(100).reached_goal);

        // Blocking the goal under the robot does not move it
        assert_eq!(sim.toggle(Cell::new(5, 5)).unwrap(), CellState::Obstacle);
        assert_eq!(sim.tick(), StepOutcome::AtGoal);
        assert_eq!(sim.position(), Cell::new(5, 5));
    }

    #[test]
    fn test_boxed_in_robot_holds_position() {
        let config = SimulationConfig::default()
            .with_grid(GridMap::new(4, 4).unwrap())
            .with_start(Cell::new(0, 0))
            .with_goal(Cell::new(3, 3));
        let mut sim = Simulation::new(config).unwrap();
        sim.toggle(Cell::new(0, 1)).unwrap();
        sim.toggle(Cell::new(1, 0)).unwrap();

        assert_eq!(sim.tick(), StepOutcome::NoPath);
        assert_eq!(sim.position(), Cell::new(0, 0));
    }

    #[test]
    fn test_tick_period_from_rate() {
        let sim = Simulation::new(SimulationConfig::default()).unwrap();
        assert!((sim.tick_period() - 0.2).abs() < 1e-12);
    }
}
