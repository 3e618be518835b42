//! Offset hexagonal coordinates and the fixed adjacency table
//!
//! Columns run along ascending `x`. Even columns hold even `y` values and odd
//! columns hold odd `y` values, so vertically stacked cells are two `y` units
//! apart:
//!
//! ```text
//! 0123456
//! * * * * 0
//!  * * *  1
//! * * * * 2
//!  * * *  3
//! ```
//!
//! Edge 0 faces up and indices continue clockwise.

use crate::puzzle::tile::{EDGE_COUNT, opposite_edge};
use std::fmt;

/// Cell coordinate on the offset hexagonal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Column
    pub x: i32,
    /// Row, stepping by two within a column
    pub y: i32,
}

impl Position {
    /// Create a position
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Coordinate step taken when leaving a cell through `edge`
pub const fn direction(edge: usize) -> (i32, i32) {
    match edge % EDGE_COUNT {
        0 => (0, -2),
        1 => (1, -1),
        2 => (1, 1),
        3 => (0, 2),
        4 => (-1, 1),
        _ => (-1, -1),
    }
}

/// The cell sharing `edge` with `position`, and the edge it touches through
pub const fn neighbour(position: Position, edge: usize) -> (Position, usize) {
    let (dx, dy) = direction(edge);
    (
        Position::new(position.x + dx, position.y + dy),
        opposite_edge(edge % EDGE_COUNT),
    )
}

/// All six neighbouring cells in ascending edge order
///
/// Yields `(edge, neighbour_position, neighbour_edge)`.
pub fn neighbours_of(position: Position) -> impl Iterator<Item = (usize, Position, usize)> {
    (0..EDGE_COUNT).map(move |edge| {
        let (next, next_edge) = neighbour(position, edge);
        (edge, next, next_edge)
    })
}
