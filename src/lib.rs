//! grid_navigation - re-planning A* navigation on a mutable occupancy grid
//!
//! Every simulation tick the robot plans a fresh shortest path to its goal
//! on a 4-connected grid and advances by at most one cell. Obstacles may be
//! toggled between ticks; the next plan simply reflects the new map.

// Core modules
pub mod common;
pub mod utils;

// Algorithm modules
pub mod path_planning;
pub mod path_tracking;
pub mod simulation;

// Re-export common types for convenience
pub use common::{Cell, CellState, GridPath, RobotState};
pub use common::{GridPathPlanner, Heuristic};
pub use common::{NavigationError, NavigationResult};
pub use path_planning::{manhattan, AStarPlanner, ManhattanHeuristic, SearchOutcome};
pub use path_tracking::{PlanFollower, StepOutcome};
pub use simulation::{RunSummary, Simulation, SimulationConfig};
pub use utils::GridMap;
