//! Common traits defining interfaces for navigation algorithms

use crate::common::types::*;
use crate::utils::GridMap;

/// Trait for grid-based path planning algorithms
///
/// Planners borrow the map only for the duration of one call and keep no
/// search state between calls.
pub trait GridPathPlanner {
    /// Plan a path on `grid` from start to goal; an empty path means unreachable
    fn plan(&self, start: Cell, goal: Cell, grid: &GridMap) -> GridPath;
}

/// Estimate of the remaining cost between two cells
pub trait Heuristic {
    fn estimate(&self, from: Cell, to: Cell) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StayPlanner;

    impl GridPathPlanner for StayPlanner {
        fn plan(&self, start: Cell, _goal: Cell, _grid: &GridMap) -> GridPath {
            GridPath::from_cells(vec![start])
        }
    }

    #[test]
    fn test_grid_path_planner_trait() {
        let grid = GridMap::new(2, 2).unwrap();
        let planner = StayPlanner;
        let path = planner.plan(Cell::new(0, 0), Cell::new(1, 1), &grid);
        assert_eq!(path.len(), 1);
    }
}
