//! Bitset of tiles still waiting to be placed

use bitvec::bitvec;
use bitvec::vec::BitVec;
use std::fmt;

/// Set of tile indices not yet placed on the board
///
/// Indices are 0-based positions in the solver's tile list. Iteration is in
/// ascending index order, which fixes the order candidates are tried in.
#[derive(Clone, Debug)]
pub struct RemainingTiles {
    bits: BitVec,
}

impl RemainingTiles {
    /// Create a set holding every index below `tile_count`
    pub fn all(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
        }
    }

    /// Return a tile index to the set
    pub fn insert(&mut self, tile: usize) {
        if tile < self.bits.len() {
            self.bits.set(tile, true);
        }
    }

    /// Take a tile index out of the set, reporting whether it was present
    pub fn take(&mut self, tile: usize) -> bool {
        if self.contains(tile) {
            self.bits.set(tile, false);
            true
        } else {
            false
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Test if every tile has been placed
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count unplaced tiles
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Snapshot of unplaced indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for RemainingTiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RemainingTiles({} tiles: {:?})", self.count(), self.to_vec())
    }
}
