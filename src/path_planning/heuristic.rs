//! Distance heuristics for 4-connected unit-cost grids

use crate::common::{Cell, Heuristic};

/// Manhattan distance between two cells.
///
/// Admissible and consistent when every move is one axis step of cost 1.
/// Saturates at `u32::MAX` for cells at opposite corners of the `i32` range.
pub fn manhattan(a: Cell, b: Cell) -> u32 {
    a.row.abs_diff(b.row).saturating_add(a.col.abs_diff(b.col))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ManhattanHeuristic;

impl Heuristic for ManhattanHeuristic {
    fn estimate(&self, from: Cell, to: Cell) -> u32 {
        manhattan(from, to)
    }
}
