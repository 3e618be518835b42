//! Tests for board rendering and PNG export

#[cfg(test)]
mod tests {
    use hexring::RingError;
    use hexring::algorithm::solve;
    use hexring::io::image::{
        cell_centre, edge_point, export_board_as_png, image_dimensions, render_board,
    };
    use hexring::puzzle::{Colour, Tile};
    use hexring::spatial::{BoundingBox, HexBoard, Position};
    use tempfile::TempDir;

    fn tile(id: u32, edges: &str) -> Tile {
        let symbols: Vec<Colour> = edges
            .chars()
            .map(|c| Colour::from_symbol(c).unwrap())
            .collect();
        Tile::new(id, Colour::Red, symbols.try_into().unwrap()).unwrap()
    }

    fn solved_triangle() -> HexBoard {
        let tiles = [tile(1, "RRGGBB"), tile(2, "GGBBRR"), tile(3, "BRRGGB")];
        solve(&tiles, Colour::Red).unwrap()
    }

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    // Tests cell centres are offset from the bounds' minimum corner
    // Verified by ignoring the bounds offset
    #[test]
    fn test_cell_centre() {
        let bounds = BoundingBox {
            min: Position::new(-1, -2),
            max: Position::new(0, 0),
        };
        let centre = cell_centre(Position::new(0, 0), &bounds, 40.0);
        assert!(close(centre, (120.0, 3.0_f64.sqrt() / 2.0 * 40.0 * 3.0)));

        let corner = cell_centre(Position::new(-1, -2), &bounds, 40.0);
        assert!(close(corner, (60.0, 3.0_f64.sqrt() / 2.0 * 40.0)));
    }

    // Tests edge 0 points up and edges run clockwise
    // Verified by starting the angle at zero
    #[test]
    fn test_edge_point_directions() {
        let centre = (100.0, 100.0);
        assert!(close(edge_point(centre, 0, 10.0), (100.0, 90.0)));
        assert!(close(edge_point(centre, 3, 10.0), (100.0, 110.0)));

        let upper_right = edge_point(centre, 1, 10.0);
        assert!(upper_right.0 > 100.0 && upper_right.1 < 100.0);
        let lower_left = edge_point(centre, 4, 10.0);
        assert!(lower_left.0 < 100.0 && lower_left.1 > 100.0);
    }

    // Tests image size grows with the occupied region
    // Verified by sizing from a fixed grid
    #[test]
    fn test_render_dimensions() {
        let board = solved_triangle();
        let bounds = board.bounds().unwrap();
        let img = render_board(&board, 40).unwrap();

        assert_eq!((img.width(), img.height()), image_dimensions(&bounds, 40.0));
        assert_eq!((img.width(), img.height()), (161, 140));
    }

    // Tests edge markers take the edge colour and the background stays clear
    // Verified by drawing markers in the outline colour
    #[test]
    fn test_render_pixels() {
        let board = solved_triangle();
        let img = render_board(&board, 40).unwrap();

        // Top marker of the start tile, centred at (120, 103.9) with size 40
        assert_eq!(img.get_pixel(120, 74).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }

    // Tests an empty board cannot be rendered
    // Verified by rendering a blank image instead
    #[test]
    fn test_render_empty_board() {
        assert!(matches!(
            render_board(&HexBoard::new(), 40).unwrap_err(),
            RingError::EmptyBoard { operation: "render" }
        ));
    }

    // Tests hexagon sizes outside the supported range are rejected
    // Verified by removing the range check
    #[test]
    fn test_render_hex_size_range() {
        let board = solved_triangle();
        for size in [0, 5, 10_000] {
            assert!(matches!(
                render_board(&board, size).unwrap_err(),
                RingError::InvalidParameter {
                    parameter: "hex_size",
                    ..
                }
            ));
        }
    }

    // Tests export creates missing directories and writes a readable PNG
    // Verified by skipping directory creation
    #[test]
    fn test_export_board_as_png() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("loop_3.png");
        let board = solved_triangle();

        export_board_as_png(&board, 30, &path).unwrap();
        assert!(path.exists());

        let reopened = image::open(&path).unwrap();
        let expected = render_board(&board, 30).unwrap();
        assert_eq!(reopened.width(), expected.width());
        assert_eq!(reopened.height(), expected.height());
    }
}
