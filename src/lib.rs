//! Backtracking solver for hexagonal tile-matching ring puzzles
//!
//! Each tile has six coloured edges joined in three same-coloured pairs. A
//! solution places and rotates every tile on a hexagonal grid so that touching
//! edges agree in colour and one designated colour forms a single closed loop
//! through all tiles, ending back in the tile it started from.

#![forbid(unsafe_code)]

/// Backtracking search, unplaced-tile bookkeeping and solution checks
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Colours and tiles
pub mod puzzle;
/// Hex coordinates and the sparse board
pub mod spatial;

pub use io::error::{Result, RingError};
