//! Depth-first backtracking search for a closed ring of tiles
//!
//! The first tile is fixed at [`START_POSITION`] with the loop colour on its
//! top edge. From there the loop is extended one cell at a time: the next cell
//! is the neighbour across the previous tile's exit edge, and every unplaced
//! tile is tried there in both orientations that show the loop colour on the
//! entering edge. A branch succeeds once all tiles are placed and the last
//! exit edge meets a matching edge, which can only be the first tile's top.

use crate::algorithm::remaining::RemainingTiles;
use crate::puzzle::colour::Colour;
use crate::puzzle::tile::Tile;
use crate::spatial::board::HexBoard;
use crate::spatial::hex::{Position, neighbour};
use log::{debug, trace};
use std::time::{Duration, Instant};

/// Cell the first tile is placed on
pub const START_POSITION: Position = Position::new(0, 0);

/// Edge of the first tile that the loop finally closes onto
pub const START_EDGE: usize = 0;

/// Orientations tried per tile per cell
///
/// A colour covers exactly two edges of a tile, so there are exactly two
/// rotations that put it on the entering edge.
pub const ORIENTATIONS_PER_SLOT: usize = 2;

/// Counters collected over one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Calls into the recursive step
    pub nodes_visited: u64,
    /// Tentative tile placements
    pub placements: u64,
    /// Placements undone after their subtree failed
    pub backtracks: u64,
    /// Wall-clock time of the last search
    pub elapsed: Duration,
}

/// Backtracking ring solver over a fixed tile list
pub struct RingSolver {
    tiles: Vec<Tile>,
    pool: Vec<Tile>,
    loop_colour: Colour,
    board: HexBoard,
    remaining: RemainingTiles,
    stats: SearchStats,
}

impl RingSolver {
    /// Create a solver for `tiles`, tracing a loop of `loop_colour`
    ///
    /// The tiles are copied; the caller's tiles keep their rotations.
    pub fn new(tiles: &[Tile], loop_colour: Colour) -> Self {
        Self {
            tiles: tiles.to_vec(),
            pool: tiles.to_vec(),
            loop_colour,
            board: HexBoard::new(),
            remaining: RemainingTiles::all(tiles.len()),
            stats: SearchStats::default(),
        }
    }

    /// Colour the ring has to trace
    pub const fn loop_colour(&self) -> Colour {
        self.loop_colour
    }

    /// Counters from the most recent search
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Current board; after a failed search only the first tile remains
    pub const fn board(&self) -> &HexBoard {
        &self.board
    }

    /// Run the search, returning the solved board or `None` if no ring exists
    ///
    /// Each call starts from scratch. Candidate tiles are tried in ascending
    /// list order at every depth, so the result is deterministic.
    pub fn solve(&mut self) -> Option<HexBoard> {
        let start_time = Instant::now();
        self.pool.clone_from(&self.tiles);
        self.board = HexBoard::new();
        self.remaining = RemainingTiles::all(self.tiles.len());
        self.stats = SearchStats::default();

        debug!(
            "Searching for a {} ring through {} tiles",
            self.loop_colour,
            self.tiles.len()
        );

        let solved = self.start();
        self.stats.elapsed = start_time.elapsed();

        debug!(
            "Search {} after {} nodes, {} placements, {} backtracks in {:?}",
            if solved { "succeeded" } else { "exhausted" },
            self.stats.nodes_visited,
            self.stats.placements,
            self.stats.backtracks,
            self.stats.elapsed
        );

        solved.then(|| std::mem::take(&mut self.board))
    }

    fn start(&mut self) -> bool {
        let loop_colour = self.loop_colour;
        let Some(first) = self.pool.first_mut() else {
            return false;
        };
        if first.align_edge_to_colour(START_EDGE, loop_colour).is_none() {
            debug!("First tile {first} has no {loop_colour} edge");
            return false;
        }

        let first = *first;
        self.remaining.take(0);
        self.board.place(START_POSITION, first);
        self.stats.placements += 1;

        // A lone tile has nothing to close onto and counts as its own ring
        if self.remaining.is_empty() {
            return true;
        }

        self.advance(START_POSITION, first.paired_edge(START_EDGE))
    }

    fn advance(&mut self, last_position: Position, last_edge: usize) -> bool {
        self.stats.nodes_visited += 1;

        if self.remaining.is_empty() {
            return self.board.joined(last_position, last_edge);
        }

        let (position, position_edge) = neighbour(last_position, last_edge);

        for tile_id in self.remaining.to_vec() {
            if !self.place_tile(tile_id, position) {
                continue;
            }
            let is_last = self.remaining.is_empty();

            for _ in 0..ORIENTATIONS_PER_SLOT {
                let Some(tile) = self.board.get_mut(position) else {
                    break;
                };
                if tile
                    .align_edge_to_colour(position_edge, self.loop_colour)
                    .is_none()
                {
                    break;
                }
                let exit_edge = tile.paired_edge(position_edge);

                if self.board.placement_is_valid(position, exit_edge, is_last)
                    && self.advance(position, exit_edge)
                {
                    return true;
                }
            }

            self.remove_tile(tile_id, position);
        }

        false
    }

    fn place_tile(&mut self, tile_id: usize, position: Position) -> bool {
        let Some(&tile) = self.pool.get(tile_id) else {
            return false;
        };
        if !self.remaining.take(tile_id) {
            return false;
        }

        debug_assert!(!self.board.is_occupied(position));
        self.board.place(position, tile);
        self.stats.placements += 1;
        trace!("Placed {tile} at {position}");
        true
    }

    // Rotation is written back to the pool so the next attempt with this tile
    // starts from where the last one left it
    fn remove_tile(&mut self, tile_id: usize, position: Position) {
        if let Some(tile) = self.board.remove(position) {
            if let Some(slot) = self.pool.get_mut(tile_id) {
                *slot = tile;
            }
        }
        self.remaining.insert(tile_id);
        self.stats.backtracks += 1;
    }
}

/// Solve a ring puzzle in one call
///
/// Returns the populated board, or `None` when no placement closes the loop.
pub fn solve(tiles: &[Tile], loop_colour: Colour) -> Option<HexBoard> {
    RingSolver::new(tiles, loop_colour).solve()
}
