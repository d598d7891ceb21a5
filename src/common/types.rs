//! Common types used throughout grid_navigation

use std::fmt;

/// Discrete grid coordinate.
///
/// Coordinates are signed so that values coming from an input layer
/// (negative, or past the map edge) stay representable and can be rejected
/// instead of wrapping. Ordering is lexicographic on `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell displaced by `(d_row, d_col)`
    pub fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// True if `other` is one axis move away
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

impl From<(i32, i32)> for Cell {
    fn from(tuple: (i32, i32)) -> Self {
        Self { row: tuple.0, col: tuple.1 }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Occupancy of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Free,
    Obstacle,
}

impl CellState {
    /// The opposite state
    pub fn toggled(self) -> Self {
        match self {
            CellState::Free => CellState::Obstacle,
            CellState::Obstacle => CellState::Free,
        }
    }

    pub fn is_free(self) -> bool {
        self == CellState::Free
    }
}

/// Path represented as a sequence of grid cells, start and goal inclusive.
///
/// An empty path means no path exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridPath {
    pub cells: Vec<Cell>,
}

impl GridPath {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    pub fn from_cells(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves along the path (0 for empty or single-cell paths)
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn last(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// First cell beyond the start, if the path has one
    pub fn next_step(&self) -> Option<Cell> {
        self.cells.get(1).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// True if every consecutive pair is one axis move apart
    pub fn is_contiguous(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(&w[1]))
    }
}

impl Default for GridPath {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a GridPath {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// The single tracked entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobotState {
    pub position: Cell,
}

impl RobotState {
    pub fn new(position: Cell) -> Self {
        Self { position }
    }
}
