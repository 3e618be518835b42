//! Spatial data structures for the hexagonal grid
//!
//! This module contains spatial-related functionality including:
//! - Offset hex coordinates and the adjacency table
//! - The sparse board and its local constraint checks

/// Sparse position to tile board
pub mod board;
/// Hex coordinates and neighbour geometry
pub mod hex;

pub use board::{BoundingBox, HexBoard};
pub use hex::Position;
