//! A* path planning on a 4-connected occupancy grid
//!
//! Every move costs 1 and the default heuristic is the Manhattan distance,
//! so the returned path is a shortest one. Each call searches from scratch;
//! nothing is cached between calls.

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::common::{Cell, GridPath, GridPathPlanner, Heuristic};
use crate::path_planning::frontier::Frontier;
use crate::path_planning::heuristic::ManhattanHeuristic;
use crate::utils::GridMap;

/// Counters gathered during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells closed and expanded
    pub expanded: usize,
    /// Entries pushed onto the frontier, duplicates included
    pub pushed: usize,
    /// Popped entries discarded because a cheaper route was already known
    pub stale_skipped: usize,
}

/// Path plus diagnostics for one planning call
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Empty when the goal is unreachable
    pub path: GridPath,
    pub stats: SearchStats,
}

impl SearchOutcome {
    fn new(path: GridPath, stats: SearchStats) -> Self {
        Self { path, stats }
    }

    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }
}

/// A* planner, generic over the heuristic
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner<H: Heuristic = ManhattanHeuristic> {
    heuristic: H,
}

impl AStarPlanner {
    pub fn new() -> Self {
        Self {
            heuristic: ManhattanHeuristic,
        }
    }
}

impl<H: Heuristic> AStarPlanner<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        Self { heuristic }
    }

    /// Plan from `start` to `goal` and report search counters.
    ///
    /// `start == goal` yields `[start]` even if that cell is blocked. Any
    /// other impassable start or goal yields an empty path without expanding.
    pub fn plan_with_stats(&self, start: Cell, goal: Cell, grid: &GridMap) -> SearchOutcome {
        trace!("[AStar] plan: start={} goal={}", start, goal);
        let mut stats = SearchStats::default();

        if start == goal {
            return SearchOutcome::new(GridPath::from_cells(vec![start]), stats);
        }
        if !grid.is_passable(start) || !grid.is_passable(goal) {
            debug!(
                "[AStar] no path: start {} passable={}, goal {} passable={}",
                start,
                grid.is_passable(start),
                goal,
                grid.is_passable(goal)
            );
            return SearchOutcome::new(GridPath::new(), stats);
        }

        let mut frontier = Frontier::new();
        let mut g_score: HashMap<Cell, u32> = HashMap::new();
        let mut came_from: HashMap<Cell, Cell> = HashMap::new();
        let mut closed: HashSet<Cell> = HashSet::new();

        g_score.insert(start, 0);
        frontier.push(start, 0, self.heuristic.estimate(start, goal));
        stats.pushed += 1;

        while let Some(current) = frontier.pop() {
            let best_g = g_score.get(&current.cell).copied().unwrap_or(u32::MAX);
            if current.g > best_g {
                stats.stale_skipped += 1;
                continue;
            }

            if current.cell == goal {
                let path = Self::reconstruct_path(&came_from, start, goal);
                debug!(
                    "[AStar] path found: {} steps, expanded={} pushed={} stale={}",
                    path.steps(),
                    stats.expanded,
                    stats.pushed,
                    stats.stale_skipped
                );
                return SearchOutcome::new(path, stats);
            }

            closed.insert(current.cell);
            stats.expanded += 1;

            let tentative_g = current.g + 1;
            for neighbor in grid.neighbors(current.cell) {
                let known_g = g_score.get(&neighbor).copied();

                if closed.contains(&neighbor) && known_g.map_or(false, |g| tentative_g >= g) {
                    continue;
                }

                if known_g.map_or(true, |g| tentative_g < g) {
                    came_from.insert(neighbor, current.cell);
                    g_score.insert(neighbor, tentative_g);
                    let f = tentative_g + self.heuristic.estimate(neighbor, goal);
                    frontier.push(neighbor, tentative_g, f);
                    stats.pushed += 1;
                }
            }
        }

        debug!(
            "[AStar] no path: frontier exhausted after expanding {} cells",
            stats.expanded
        );
        SearchOutcome::new(GridPath::new(), stats)
    }

    fn reconstruct_path(came_from: &HashMap<Cell, Cell>, start: Cell, goal: Cell) -> GridPath {
        let mut cells = vec![goal];
        let mut current = goal;

        while current != start {
            match came_from.get(&current) {
                Some(&previous) => {
                    cells.push(previous);
                    current = previous;
                }
                None => break,
            }
        }

        cells.reverse();
        GridPath::from_cells(cells)
    }
}

impl<H: Heuristic> GridPathPlanner for AStarPlanner<H> {
    fn plan(&self, start: Cell, goal: Cell, grid: &GridMap) -> GridPath {
        self.plan_with_stats(start, goal, grid).path
    }
}
