//! Tests for the backtracking ring search

#[cfg(test)]
mod tests {
    use hexring::algorithm::solver::{RingSolver, START_EDGE, START_POSITION, solve};
    use hexring::algorithm::verify::verify_ring;
    use hexring::puzzle::{Colour, Tile};
    use hexring::spatial::{HexBoard, Position};

    fn tile(id: u32, edges: &str) -> Tile {
        let symbols: Vec<Colour> = edges
            .chars()
            .map(|c| Colour::from_symbol(c).unwrap())
            .collect();
        Tile::new(id, Colour::Red, symbols.try_into().unwrap()).unwrap()
    }

    fn triangle_tiles() -> Vec<Tile> {
        vec![tile(1, "RRGGBB"), tile(2, "GGBBRR"), tile(3, "BRRGGB")]
    }

    fn assert_edges_match(board: &HexBoard) {
        for (position, tile) in board.iter() {
            for (edge, other, other_edge) in board.neighbours(position) {
                assert_eq!(
                    tile.edge_colour(edge),
                    other.edge_colour(other_edge),
                    "clash between {position} edge {edge} and its neighbour"
                );
            }
        }
    }

    // Tests three tiles with adjacent red pairs close into a triangle
    // Verified by skipping the second orientation of each tile
    #[test]
    fn test_solves_three_tile_ring() {
        let board = solve(&triangle_tiles(), Colour::Red).unwrap();

        assert_eq!(board.len(), 3);
        for position in [
            Position::new(0, 0),
            Position::new(-1, -1),
            Position::new(0, -2),
        ] {
            assert!(board.is_occupied(position), "{position} should be occupied");
        }
        assert_edges_match(&board);
        assert!(board.joined(Position::new(0, -2), 3));
        assert!(verify_ring(&board, Colour::Red));
    }

    // Tests the first tile is fixed at the origin with the loop colour on top
    // Verified by placing the first tile unrotated
    #[test]
    fn test_first_tile_anchored() {
        let board = solve(&triangle_tiles(), Colour::Red).unwrap();
        let first = board.get(START_POSITION).unwrap();
        assert_eq!(first.id(), 1);
        assert_eq!(first.edge_colour(START_EDGE), Colour::Red);
    }

    // Tests a lone tile carrying the loop colour is its own ring
    // Verified by running the closure check for single tiles
    #[test]
    fn test_single_tile() {
        let board = solve(&[tile(1, "GRRGBB")], Colour::Red).unwrap();
        assert_eq!(board.len(), 1);
        assert_eq!(board.edge_colour(START_POSITION, START_EDGE), Some(Colour::Red));
    }

    // Tests the search reports no solution when the colour is missing entirely
    // Verified by ignoring a failed alignment of the first tile
    #[test]
    fn test_missing_colour_has_no_solution() {
        let tiles = triangle_tiles();
        assert!(solve(&tiles, Colour::Yellow).is_none());
        assert!(solve(&tiles[..1], Colour::Yellow).is_none());
    }

    // Tests candidates lacking the loop colour are skipped rather than placed
    // Verified by placing candidates whose alignment failed
    #[test]
    fn test_candidates_without_colour_exhaust() {
        let tiles = vec![tile(1, "YYGGBB"), tile(2, "RRGGBB"), tile(3, "RRGGBB")];
        let mut solver = RingSolver::new(&tiles, Colour::Yellow);
        assert!(solver.solve().is_none());
        assert_eq!(solver.board().len(), 1);
        // Each candidate is placed once, fails alignment and is taken back
        assert_eq!(solver.stats().placements, 3);
        assert_eq!(solver.stats().backtracks, 2);
    }

    // Tests two tiles cannot close a ring and every trial is undone
    // Verified by skipping removal on failed branches
    #[test]
    fn test_two_tiles_exhaust_and_restore() {
        let tiles = vec![tile(1, "RRGGBB"), tile(2, "RRGGBB")];
        let mut solver = RingSolver::new(&tiles, Colour::Red);

        assert!(solver.solve().is_none());
        assert_eq!(solver.board().len(), 1);
        assert!(solver.board().is_occupied(START_POSITION));

        let stats = solver.stats();
        assert_eq!(stats.placements, 2);
        assert_eq!(stats.backtracks, 1);
        // Entry step plus one terminal check per orientation
        assert_eq!(stats.nodes_visited, 3);
    }

    // Tests an empty tile list has no solution
    // Verified by treating an empty list as trivially solved
    #[test]
    fn test_empty_tiles() {
        assert!(solve(&[], Colour::Red).is_none());
    }

    // Tests statistics of a direct solve with no dead ends
    // Verified by counting placements after success
    #[test]
    fn test_stats_for_direct_solve() {
        let mut solver = RingSolver::new(&triangle_tiles(), Colour::Red);
        assert!(solver.solve().is_some());

        let stats = solver.stats();
        assert_eq!(stats.placements, 3);
        assert_eq!(stats.backtracks, 0);
        assert_eq!(stats.nodes_visited, 3);
        assert_eq!(solver.loop_colour(), Colour::Red);
    }

    // Tests repeated solves start from scratch and agree
    // Verified by keeping the previous board between calls
    #[test]
    fn test_solve_is_repeatable() {
        let mut solver = RingSolver::new(&triangle_tiles(), Colour::Red);
        let first = solver.solve().unwrap();
        let first_stats = solver.stats();
        let second = solver.solve().unwrap();

        assert_eq!(first.len(), second.len());
        for (position, tile) in first.iter() {
            assert_eq!(second.get(position), Some(tile));
        }
        assert_eq!(first_stats.placements, solver.stats().placements);
    }

    // Tests the caller's tiles are not rotated by the search
    // Verified by solving on the caller's slice in place
    #[test]
    fn test_input_tiles_untouched() {
        let tiles = triangle_tiles();
        let _ = solve(&tiles, Colour::Red);
        assert!(tiles.iter().all(|t| t.rotation() == 0));
    }
}
