//! Hexagonal tile with rotatable coloured edges
//!
//! A tile carries six edge colours in a canonical orientation plus a rotation
//! offset. Every tile joins its edges in three same-coloured pairs, so each
//! edge has exactly one partner edge showing the same colour. The solver leans
//! on that pairing: entering a tile on one edge of a colour means leaving it
//! through the partner edge.

use crate::io::error::{RingError, Result};
use crate::puzzle::colour::Colour;
use std::fmt;

/// Number of edges on a hexagonal tile
pub const EDGE_COUNT: usize = 6;

/// Number of edges carrying any one colour on a valid tile
pub const EDGES_PER_COLOUR: usize = 2;

/// Edge on the far side of the tile
///
/// Two adjacent cells touch through `edge` on one side and
/// `opposite_edge(edge)` on the other.
pub const fn opposite_edge(edge: usize) -> usize {
    (edge + EDGE_COUNT / 2) % EDGE_COUNT
}

/// A puzzle tile with its current rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    id: u32,
    home_colour: Colour,
    base_edges: [Colour; EDGE_COUNT],
    rotation: usize,
}

impl Tile {
    /// Create an unrotated tile
    ///
    /// # Errors
    ///
    /// Returns `InvalidTile` unless every colour present appears on exactly
    /// two edges
    pub fn new(id: u32, home_colour: Colour, base_edges: [Colour; EDGE_COUNT]) -> Result<Self> {
        let mut counts = [0_usize; Colour::ALL.len()];
        for colour in base_edges {
            if let Some(count) = counts.get_mut(colour.index()) {
                *count += 1;
            }
        }

        for (colour, &count) in Colour::ALL.iter().zip(counts.iter()) {
            if count != 0 && count != EDGES_PER_COLOUR {
                return Err(RingError::InvalidTile {
                    id,
                    reason: format!(
                        "colour {colour} appears on {count} edges, expected {EDGES_PER_COLOUR}"
                    ),
                });
            }
        }

        Ok(Self {
            id,
            home_colour,
            base_edges,
            rotation: 0,
        })
    }

    /// Stable tile identifier
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// Colour of the tile as a whole, used for labelling only
    pub const fn home_colour(&self) -> Colour {
        self.home_colour
    }

    /// Current clockwise rotation in `0..6`
    pub const fn rotation(&self) -> usize {
        self.rotation
    }

    /// Colour presented on `edge` under the current rotation
    // Index is reduced modulo EDGE_COUNT before use
    #[allow(clippy::indexing_slicing)]
    pub const fn edge_colour(&self, edge: usize) -> Colour {
        self.base_edges[(edge % EDGE_COUNT + EDGE_COUNT - self.rotation) % EDGE_COUNT]
    }

    /// All six presented colours, edge 0 first
    pub fn edges(&self) -> [Colour; EDGE_COUNT] {
        std::array::from_fn(|edge| self.edge_colour(edge))
    }

    /// Rotate clockwise by `steps` edges
    pub const fn rotate(&mut self, steps: usize) {
        self.rotation = (self.rotation + steps) % EDGE_COUNT;
    }

    /// Rotate so that `edge` shows `colour`, never keeping the current rotation
    ///
    /// Tries offsets 1 to 5 and applies the smallest one that brings `colour`
    /// onto `edge`. When `edge` already shows `colour` this lands the other
    /// edge of the pair there instead, so two consecutive calls visit both ways
    /// of presenting `colour` on `edge`.
    ///
    /// Returns the applied offset, or `None` (tile untouched) if `colour` is
    /// not on the tile apart from possibly at `edge` itself.
    pub fn align_edge_to_colour(&mut self, edge: usize, colour: Colour) -> Option<usize> {
        let steps = (1..EDGE_COUNT).find(|&steps| {
            let mut candidate = *self;
            candidate.rotate(steps);
            candidate.edge_colour(edge) == colour
        })?;
        self.rotate(steps);
        Some(steps)
    }

    /// The other edge presenting the same colour as `edge`
    ///
    /// Total for tiles built through [`Tile::new`]; an unpaired edge maps to
    /// itself.
    pub fn paired_edge(&self, edge: usize) -> usize {
        let edge = edge % EDGE_COUNT;
        let colour = self.edge_colour(edge);
        (0..EDGE_COUNT)
            .find(|&other| other != edge && self.edge_colour(other) == colour)
            .unwrap_or(edge)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges: String = self.edges().iter().map(|colour| colour.symbol()).collect();
        write!(f, "({}{} {edges})", self.id, self.home_colour)
    }
}
