//! Independent check of a solved board

use crate::algorithm::solver::{START_EDGE, START_POSITION};
use crate::puzzle::colour::Colour;
use crate::spatial::board::HexBoard;
use crate::spatial::hex::{Position, neighbour};
use std::collections::HashSet;

/// Result of following the loop colour around a board
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoopTrace {
    /// Cells in the order the loop visits them, starting tile first
    pub cells: Vec<Position>,
    /// Whether the walk re-entered the start tile through its top edge
    pub closed: bool,
}

/// Follow the `loop_colour` link from the start tile
///
/// Starts on [`START_POSITION`], enters through [`START_EDGE`] and follows
/// each tile's paired edge into the next cell. Stops when the walk returns to
/// the start cell, leaves the occupied region, meets a cell twice or steps
/// onto an edge of another colour.
pub fn trace_loop(board: &HexBoard, loop_colour: Colour) -> LoopTrace {
    let mut trace = LoopTrace::default();
    let mut seen = HashSet::new();
    let mut position = START_POSITION;
    let mut entering = START_EDGE;

    while let Some(tile) = board.get(position) {
        if tile.edge_colour(entering) != loop_colour || !seen.insert(position) {
            break;
        }
        trace.cells.push(position);

        let (next, next_entering) = neighbour(position, tile.paired_edge(entering));
        if next == START_POSITION {
            trace.closed = next_entering == START_EDGE;
            break;
        }
        position = next;
        entering = next_entering;
    }

    trace
}

/// Check that `board` holds a valid closed ring of `loop_colour`
///
/// Every pair of adjacent tiles must agree on their shared edge, and the
/// loop traced from the start tile must pass through every tile exactly once
/// before re-entering the start tile through its top edge. A board holding
/// only the start tile counts as a ring.
pub fn verify_ring(board: &HexBoard, loop_colour: Colour) -> bool {
    if board.edge_colour(START_POSITION, START_EDGE) != Some(loop_colour) {
        return false;
    }

    let edges_match = board
        .iter()
        .all(|(position, _)| board.placement_is_valid(position, START_EDGE, true));
    if !edges_match {
        return false;
    }

    if board.len() == 1 {
        return true;
    }

    let trace = trace_loop(board, loop_colour);
    trace.closed && trace.cells.len() == board.len()
}
