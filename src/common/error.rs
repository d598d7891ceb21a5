//! Error types for grid_navigation

use thiserror::Error;

use crate::common::types::Cell;

/// Main error type for navigation operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    /// Cell lies outside the map extents
    #[error("Cell {cell} is out of bounds for a {height}x{width} grid")]
    OutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },

    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Visualization error
    #[error("Visualization error: {0}")]
    Visualization(String),
}

/// Result type alias for navigation operations
pub type NavigationResult<T> = Result<T, NavigationError>;
