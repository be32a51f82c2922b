//! Typed errors for grid construction, building and braiding

use thiserror::Error;

/// Precondition failures raised by [`crate::Grid`], [`crate::MazeBuilder`]
/// and [`crate::Braider`].
///
/// Every precondition is checked eagerly; a failing call returns before any
/// mutation, so the grid is never observed in a partially built state.
#[derive(Debug, Error, PartialEq)]
pub enum MazeError {
    /// Maze dimensions must both be odd and at least 3.
    #[error("maze dimensions must be odd and at least 3, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Start coordinates must both be odd and lie in the carvable interior.
    #[error("start cell ({x}, {y}) must have odd coordinates within the maze interior")]
    InvalidStart { x: usize, y: usize },

    /// Braid probability must lie within [0, 1].
    #[error("braid probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    /// Coordinate access outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}
