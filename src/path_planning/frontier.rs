//! Open set for best-first grid search
//!
//! A binary heap ordered by `f`, then by cell order, then by `g`. Entries are
//! never updated in place: a cell that gets a cheaper route is pushed again
//! and the older entry is left behind for the caller to discard on pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::common::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub f: u32,
    pub g: u32,
    pub cell: Cell,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.cell.cmp(&self.cell))
            .then_with(|| other.g.cmp(&self.g))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, cell: Cell, g: u32, f: u32) {
        self.heap.push(FrontierEntry { f, g, cell });
    }

    /// Remove the entry with the lowest `f` (ties: lowest cell, then lowest `g`)
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lowest_f_first() {
        let mut frontier = Frontier::new();
        frontier.push(Cell::new(0, 0), 0, 7);
        frontier.push(Cell::new(1, 1), 2, 3);
        frontier.push(Cell::new(2, 2), 1, 5);

        let order: Vec<u32> = std::iter::from_fn(|| frontier.pop()).map(|e| e.f).collect();
        assert_eq!(order, vec![3, 5, 7]);
    }

    #[test]
    fn test_ties_broken_by_cell_order() {
        let mut frontier = Frontier::new();
        frontier.push(Cell::new(1, 0), 1, 4);
        frontier.push(Cell::new(0, 3), 1, 4);
        frontier.push(Cell::new(0, 1), 1, 4);

        assert_eq!(frontier.pop().unwrap().cell, Cell::new(0, 1));
        assert_eq!(frontier.pop().unwrap().cell, Cell::new(0, 3));
        assert_eq!(frontier.pop().unwrap().cell, Cell::new(1, 0));
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_keeps_duplicate_entries() {
        let mut frontier = Frontier::new();
        let cell = Cell::new(2, 2);
        frontier.push(cell, 6, 9);
        frontier.push(cell, 4, 7);
        assert_eq!(frontier.len(), 2);

        let first = frontier.pop().unwrap();
        assert_eq!((first.cell, first.g), (cell, 4));
        let stale = frontier.pop().unwrap();
        assert_eq!((stale.cell, stale.g), (cell, 6));
    }

    #[test]
    fn test_equal_f_same_cell_prefers_lower_g() {
        let mut frontier = Frontier::new();
        let cell = Cell::new(0, 0);
        frontier.push(cell, 5, 5);
        frontier.push(cell, 3, 5);
        assert_eq!(frontier.pop().unwrap().g, 3);
    }
}
