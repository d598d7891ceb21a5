//! Single-step plan following
//!
//! Each tick the follower re-plans from the robot's current cell and commits
//! at most one move: the first step of the fresh path, and only if that cell
//! is still passable at commit time.

use log::{debug, warn};

use crate::common::{Cell, GridPath, GridPathPlanner, RobotState};
use crate::path_planning::AStarPlanner;
use crate::utils::GridMap;

/// What happened during one follower tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The robot advanced one cell
    Moved { from: Cell, to: Cell },
    /// Already at the goal; no move
    AtGoal,
    /// Goal unreachable under the current obstacles; holding position
    NoPath,
    /// The planned step was not passable at commit time; holding position
    StepRejected { blocked: Cell },
}

impl StepOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, StepOutcome::Moved { .. })
    }
}

pub struct PlanFollower<P: GridPathPlanner = AStarPlanner> {
    planner: P,
    robot: RobotState,
    goal: Cell,
    latest_path: GridPath,
}

impl PlanFollower {
    /// Follower backed by the default A* planner
    pub fn new(start: Cell, goal: Cell) -> Self {
        Self::with_planner(AStarPlanner::new(), start, goal)
    }
}

impl<P: GridPathPlanner> PlanFollower<P> {
    pub fn with_planner(planner: P, start: Cell, goal: Cell) -> Self {
        Self {
            planner,
            robot: RobotState::new(start),
            goal,
            latest_path: GridPath::new(),
        }
    }

    /// Re-plan from the current position and commit at most one step
    pub fn step(&mut self, grid: &GridMap) -> StepOutcome {
        let current = self.robot.position;
        self.latest_path = self.planner.plan(current, self.goal, grid);

        let next = match self.latest_path.len() {
            0 => {
                debug!("[Follower] no path from {} to {}, holding", current, self.goal);
                return StepOutcome::NoPath;
            }
            1 => return StepOutcome::AtGoal,
            _ => self.latest_path.cells[1],
        };

        if !grid.is_passable(next) {
            warn!("[Follower] planned step {} is blocked, holding at {}", next, current);
            return StepOutcome::StepRejected { blocked: next };
        }

        self.robot.position = next;
        StepOutcome::Moved {
            from: current,
            to: next,
        }
    }

    pub fn position(&self) -> Cell {
        self.robot.position
    }

    pub fn robot(&self) -> RobotState {
        self.robot
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Retarget; takes effect on the next `step`
    pub fn set_goal(&mut self, goal: Cell) {
        self.goal = goal;
    }

    /// Path computed by the most recent `step`
    pub fn latest_path(&self) -> &GridPath {
        &self.latest_path
    }

    pub fn is_at_goal(&self) -> bool {
        self.robot.position == self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a fixed path regardless of the map
    struct ScriptedPlanner {
        path: Vec<Cell>,
    }

    impl GridPathPlanner for ScriptedPlanner {
        fn plan(&self, _start: Cell, _goal: Cell, _grid: &GridMap) -> GridPath {
            GridPath::from_cells(self.path.clone())
        }
    }

    #[test]
    fn test_moves_exactly_one_step() {
        let grid = GridMap::new(5, 5).unwrap();
        let mut follower = PlanFollower::new(Cell::new(0, 0), Cell::new(4, 4));

        let outcome = follower.step(&grid);
        let planned = follower.latest_path().clone();
        assert_eq!(planned.steps(), 8);
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                from: Cell::new(0, 0),
                to: planned.cells[1]
            }
        );
        assert_eq!(follower.position(), planned.cells[1]);
    }

    #[test]
    fn test_reaches_goal_in_path_length_ticks() {
        let grid = GridMap::new(4, 6).unwrap();
        let goal = Cell::new(3, 5);
        let mut follower = PlanFollower::new(Cell::new(0, 0), goal);

        let mut moves = 0;
        while follower.step(&grid).moved() {
            moves += 1;
        }
        assert_eq!(moves, 8);
        assert!(follower.is_at_goal());
        assert_eq!(follower.step(&grid), StepOutcome::AtGoal);
        assert_eq!(follower.latest_path().cells, vec![goal]);
    }

    #[test]
    fn test_start_equals_goal_does_not_move() {
        let grid = GridMap::new(3, 3).unwrap();
        let mut follower = PlanFollower::new(Cell::new(1, 1), Cell::new(1, 1));
        assert_eq!(follower.step(&grid), StepOutcome::AtGoal);
        assert_eq!(follower.position(), Cell::new(1, 1));
    }

    #[test]
    fn test_holds_position_without_path() {
        let mut grid = GridMap::new(3, 3).unwrap();
        grid.toggle(Cell::new(0, 1)).unwrap();
        grid.toggle(Cell::new(1, 0)).unwrap();
        let mut follower = PlanFollower::new(Cell::new(0, 0), Cell::new(2, 2));

        assert_eq!(follower.step(&grid), StepOutcome::NoPath);
        assert_eq!(follower.position(), Cell::new(0, 0));
        assert!(follower.latest_path().is_empty());
    }

    #[test]
    fn test_rejects_blocked_step() {
        let mut grid = GridMap::new(3, 3).unwrap();
        grid.toggle(Cell::new(0, 1)).unwrap();
        let planner = ScriptedPlanner {
            path: vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
        };
        let mut follower = PlanFollower::with_planner(planner, Cell::new(0, 0), Cell::new(0, 2));

        assert_eq!(
            follower.step(&grid),
            StepOutcome::StepRejected {
                blocked: Cell::new(0, 1)
            }
        );
        assert_eq!(follower.position(), Cell::new(0, 0));
    }

    #[test]
    fn test_follows_replanned_route_after_toggle() {
        let mut grid = GridMap::new(3, 3).unwrap();
        let mut follower = PlanFollower::new(Cell::new(0, 0), Cell::new(0, 2));

        grid.toggle(Cell::new(0, 1)).unwrap();
        assert_eq!(
            follower.step(&grid),
            StepOutcome::Moved {
                from: Cell::new(0, 0),
                to: Cell::new(1, 0)
            }
        );
        assert_eq!(follower.latest_path().steps(), 4);
    }

    #[test]
    fn test_set_goal_applies_next_step() {
        let grid = GridMap::new(3, 3).unwrap();
        let mut follower = PlanFollower::new(Cell::new(1, 1), Cell::new(1, 1));
        follower.set_goal(Cell::new(1, 0));
        assert_eq!(
            follower.step(&grid),
            StepOutcome::Moved {
                from: Cell::new(1, 1),
                to: Cell::new(1, 0)
            }
        );
        assert!(follower.is_at_goal());
    }
}
