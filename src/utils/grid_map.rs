// Occupancy grid map for grid-based planners

use itertools::iproduct;
use nalgebra::DMatrix;

use crate::common::{Cell, CellState, NavigationError, NavigationResult};

/// Axis moves in expansion order: right, down, left, up
pub const MOTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Fixed-size occupancy grid.
///
/// Dimensions are fixed at construction. The only mutations are `toggle`
/// and `set_state`, both of which reject out-of-bounds cells.
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap {
    data: DMatrix<CellState>,
}

impl GridMap {
    /// All-free map of the given size
    pub fn new(height: usize, width: usize) -> NavigationResult<Self> {
        Self::check_dimensions(height, width)?;
        Ok(Self {
            data: DMatrix::from_element(height, width, CellState::Free),
        })
    }

    /// Build from row-major occupancy values (`0` free, `1` obstacle)
    pub fn from_row_slice(height: usize, width: usize, values: &[u8]) -> NavigationResult<Self> {
        Self::check_dimensions(height, width)?;
        if values.len() != height * width {
            return Err(NavigationError::InvalidParameter(format!(
                "expected {} occupancy values for a {}x{} grid, got {}",
                height * width,
                height,
                width,
                values.len()
            )));
        }
        let states = values
            .iter()
            .map(|&v| Self::decode(v))
            .collect::<NavigationResult<Vec<_>>>()?;
        Ok(Self {
            data: DMatrix::from_row_slice(height, width, &states),
        })
    }

    /// Build from an occupancy matrix (`0` free, `1` obstacle)
    pub fn from_matrix(matrix: DMatrix<u8>) -> NavigationResult<Self> {
        Self::check_dimensions(matrix.nrows(), matrix.ncols())?;
        if let Some(&bad) = matrix.iter().find(|&&v| v > 1) {
            return Err(NavigationError::InvalidParameter(format!(
                "occupancy value must be 0 or 1, got {}",
                bad
            )));
        }
        Ok(Self {
            data: matrix.map(|v| if v == 0 { CellState::Free } else { CellState::Obstacle }),
        })
    }

    /// Wrap a state matrix whose dimensions are already known to be valid
    pub(crate) fn from_states(data: DMatrix<CellState>) -> Self {
        Self { data }
    }

    fn check_dimensions(height: usize, width: usize) -> NavigationResult<()> {
        if height == 0 || width == 0 {
            return Err(NavigationError::InvalidParameter(format!(
                "grid dimensions must be non-zero, got {}x{}",
                height, width
            )));
        }
        if height > i32::MAX as usize || width > i32::MAX as usize {
            return Err(NavigationError::InvalidParameter(format!(
                "grid dimensions {}x{} exceed the addressable cell range",
                height, width
            )));
        }
        Ok(())
    }

    fn decode(value: u8) -> NavigationResult<CellState> {
        match value {
            0 => Ok(CellState::Free),
            1 => Ok(CellState::Obstacle),
            other => Err(NavigationError::InvalidParameter(format!(
                "occupancy value must be 0 or 1, got {}",
                other
            ))),
        }
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    fn index(&self, cell: Cell) -> Option<(usize, usize)> {
        if cell.row < 0 || cell.col < 0 {
            return None;
        }
        let (r, c) = (cell.row as usize, cell.col as usize);
        if r < self.height() && c < self.width() {
            Some((r, c))
        } else {
            None
        }
    }

    fn out_of_bounds(&self, cell: Cell) -> NavigationError {
        NavigationError::OutOfBounds {
            cell,
            height: self.height(),
            width: self.width(),
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// Occupancy of `cell`, `None` when out of bounds
    pub fn state(&self, cell: Cell) -> Option<CellState> {
        self.index(cell).map(|idx| self.data[idx])
    }

    /// In bounds and free. Fails closed for out-of-bounds cells.
    pub fn is_passable(&self, cell: Cell) -> bool {
        self.state(cell).map_or(false, CellState::is_free)
    }

    /// Flip Free/Obstacle and return the new state
    pub fn toggle(&mut self, cell: Cell) -> NavigationResult<CellState> {
        let idx = self.index(cell).ok_or_else(|| self.out_of_bounds(cell))?;
        let next = self.data[idx].toggled();
        self.data[idx] = next;
        Ok(next)
    }

    pub fn set_state(&mut self, cell: Cell, state: CellState) -> NavigationResult<()> {
        let idx = self.index(cell).ok_or_else(|| self.out_of_bounds(cell))?;
        self.data[idx] = state;
        Ok(())
    }

    /// Passable axis neighbors of `cell`, in `MOTIONS` order
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        MOTIONS
            .iter()
            .map(move |&(d_row, d_col)| cell.offset(d_row, d_col))
            .filter(move |&n| self.is_passable(n))
    }

    /// Every cell with its state, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        iproduct!(0..self.height(), 0..self.width())
            .map(move |(r, c)| (Cell::new(r as i32, c as i32), self.data[(r, c)]))
    }

    pub fn obstacle_count(&self) -> usize {
        self.data.iter().filter(|s| !s.is_free()).count()
    }
}
