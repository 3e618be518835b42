//! Sparse hexagonal board with local constraint checks
//!
//! The board maps occupied cells to the tiles placed on them. It has no
//! bounds: the occupied region is whatever has been placed. Placement and
//! removal are plain map writes, and callers pair them up themselves.

use crate::puzzle::colour::Colour;
use crate::puzzle::tile::Tile;
use crate::spatial::hex::{Position, neighbour, neighbours_of};
use std::collections::HashMap;

/// Axis-aligned bounds of the occupied cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Smallest `x` and `y` (inclusive)
    pub min: Position,
    /// Largest `x` and `y` (inclusive)
    pub max: Position,
}

/// Position to tile mapping for one puzzle attempt
#[derive(Debug, Clone, Default)]
pub struct HexBoard {
    cells: HashMap<Position, Tile>,
}

impl HexBoard {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `tile` on `position`, returning whatever was there before
    pub fn place(&mut self, position: Position, tile: Tile) -> Option<Tile> {
        self.cells.insert(position, tile)
    }

    /// Take the tile off `position`
    pub fn remove(&mut self, position: Position) -> Option<Tile> {
        self.cells.remove(&position)
    }

    /// Check whether a tile sits on `position`
    pub fn is_occupied(&self, position: Position) -> bool {
        self.cells.contains_key(&position)
    }

    /// Tile on `position`, if any
    pub fn get(&self, position: Position) -> Option<&Tile> {
        self.cells.get(&position)
    }

    /// Mutable access to the tile on `position`, used to rotate it in place
    pub fn get_mut(&mut self, position: Position) -> Option<&mut Tile> {
        self.cells.get_mut(&position)
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether no tile has been placed
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Occupied cells in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Tile)> {
        self.cells.iter().map(|(&position, tile)| (position, tile))
    }

    /// Occupied neighbours of `position` in ascending edge order
    ///
    /// Yields `(edge, neighbour_tile, neighbour_edge)` where `neighbour_edge`
    /// is the neighbour's side of the shared edge.
    pub fn neighbours(&self, position: Position) -> impl Iterator<Item = (usize, &Tile, usize)> {
        neighbours_of(position).filter_map(|(edge, next, next_edge)| {
            self.cells.get(&next).map(|tile| (edge, tile, next_edge))
        })
    }

    /// Check the tile on `position` against its surroundings
    ///
    /// Invalid when any occupied neighbour shows a different colour on the
    /// shared edge. Unless `is_last` is set, the cell beyond `next_edge` must
    /// also still be free so the loop has somewhere to continue. An empty
    /// `position` is never valid.
    pub fn placement_is_valid(&self, position: Position, next_edge: usize, is_last: bool) -> bool {
        let Some(tile) = self.cells.get(&position) else {
            return false;
        };

        for (edge, other, other_edge) in self.neighbours(position) {
            if tile.edge_colour(edge) != other.edge_colour(other_edge) {
                return false;
            }
            if edge == next_edge && !is_last {
                return false;
            }
        }

        true
    }

    /// Check whether `edge` of the tile on `position` meets a matching neighbour
    pub fn joined(&self, position: Position, edge: usize) -> bool {
        let Some(tile) = self.cells.get(&position) else {
            return false;
        };
        let (next, next_edge) = neighbour(position, edge);

        self.cells
            .get(&next)
            .is_some_and(|other| other.edge_colour(next_edge) == tile.edge_colour(edge))
    }

    /// Colour shown on `edge` of the tile on `position`
    pub fn edge_colour(&self, position: Position, edge: usize) -> Option<Colour> {
        self.cells.get(&position).map(|tile| tile.edge_colour(edge))
    }

    /// Minimal bounds containing every occupied cell, `None` when empty
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut positions = self.cells.keys();
        let first = *positions.next()?;

        Some(positions.fold(
            BoundingBox {
                min: first,
                max: first,
            },
            |bounds, pos| BoundingBox {
                min: Position::new(bounds.min.x.min(pos.x), bounds.min.y.min(pos.y)),
                max: Position::new(bounds.max.x.max(pos.x), bounds.max.y.max(pos.y)),
            },
        ))
    }
}
