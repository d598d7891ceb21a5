//! Common types, traits, and error definitions for grid_navigation
//!
//! This module provides the foundational building blocks shared by the
//! map, the planner and the plan follower.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
