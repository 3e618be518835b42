//! Puzzle pieces
//!
//! This module contains the tile-level model:
//! - The edge colour palette
//! - Tiles with rotatable edges and colour pairing

/// Edge colour palette
pub mod colour;
/// Tile edge and rotation model
pub mod tile;

pub use colour::Colour;
pub use tile::Tile;
