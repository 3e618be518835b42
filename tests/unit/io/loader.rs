//! Tests for tile-set parsing and loading

#[cfg(test)]
mod tests {
    use hexring::RingError;
    use hexring::io::loader::{load_tiles, parse_record, parse_tiles};
    use hexring::puzzle::Colour;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE: &str = "\
# id,home,edges
1,R,RRGGBB

2,G,GGBBRR
  3 , B , BRRGGB
";

    fn parse_failure(text: &str) -> (usize, String) {
        match parse_tiles(text).unwrap_err() {
            RingError::TileParse { line, reason } => (line, reason),
            other => unreachable!("Expected TileParse, got {other:?}"),
        }
    }

    // Tests records are parsed in order with comments and blanks skipped
    // Verified by treating comment lines as records
    #[test]
    fn test_parse_sample() {
        let tiles = parse_tiles(SAMPLE).unwrap();
        let ids: Vec<u32> = tiles.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let last = tiles.last().unwrap();
        assert_eq!(last.home_colour(), Colour::Blue);
        assert_eq!(last.edge_colour(0), Colour::Blue);
        assert_eq!(last.edge_colour(1), Colour::Red);
        assert_eq!(last.rotation(), 0);
    }

    // Tests empty input yields no tiles
    // Verified by erroring on empty text
    #[test]
    fn test_parse_empty() {
        assert!(parse_tiles("").unwrap().is_empty());
        assert!(parse_tiles("# only a comment\n\n").unwrap().is_empty());
    }

    // Tests the field count is enforced with the line number reported
    // Verified by counting lines from zero
    #[test]
    fn test_wrong_field_count() {
        let (line, reason) = parse_failure("1,R,RRGGBB\n\n2,R\n");
        assert_eq!(line, 3);
        assert!(reason.contains("expected 3 fields, found 2"), "{reason}");
    }

    // Tests home and edge colours share the same case rule
    // Verified by uppercasing only the home colour field
    #[test]
    fn test_lowercase_symbols() {
        let lower = parse_record("1,r,rrggbb", 1).unwrap();
        let mixed = parse_record("1,R,RrGgbB", 1).unwrap();
        let upper = parse_record("1,R,RRGGBB", 1).unwrap();

        assert_eq!(lower.home_colour(), Colour::Red);
        assert_eq!(lower.edges(), upper.edges());
        assert_eq!(mixed.edges(), upper.edges());
    }

    // Tests non-numeric ids are rejected
    // Verified by defaulting unparsable ids to zero
    #[test]
    fn test_invalid_id() {
        let (line, reason) = parse_failure("x,R,RRGGBB");
        assert_eq!(line, 1);
        assert!(reason.contains("invalid tile id 'x'"), "{reason}");
    }

    // Tests unknown home and edge colours are rejected
    // Verified by mapping unknown symbols to Red
    #[test]
    fn test_invalid_colours() {
        let (line, reason) = parse_failure("1,Q,RRGGBB");
        assert_eq!(line, 1);
        assert!(reason.contains("'Q'"), "{reason}");

        let (line, reason) = parse_failure("1,R,RRGGBB\n2,R,RRGGBX");
        assert_eq!(line, 2);
        assert!(reason.contains("'X'"), "{reason}");
    }

    // Tests edge strings must hold exactly six symbols
    // Verified by padding short edge strings
    #[test]
    fn test_wrong_edge_count() {
        let (_, reason) = parse_failure("1,R,RRGGB");
        assert!(reason.contains("expected 6 edge colours"), "{reason}");

        let (_, reason) = parse_failure("1,R,RRGGBBY");
        assert!(reason.contains("expected 6 edge colours"), "{reason}");
    }

    // Tests edges that are not three colour pairs are rejected
    // Verified by skipping pairing validation in the loader
    #[test]
    fn test_unpaired_edges() {
        let (line, reason) = parse_failure("1,R,RRRGBB");
        assert_eq!(line, 1);
        assert!(reason.contains("Invalid tile 1"), "{reason}");
    }

    // Tests repeated ids are rejected at the second occurrence
    // Verified by keeping the first and silently dropping duplicates
    #[test]
    fn test_duplicate_id() {
        let (line, reason) = parse_failure("4,R,RRGGBB\n5,R,RRGGBB\n4,G,GGRRBB");
        assert_eq!(line, 3);
        assert_eq!(reason, "duplicate tile id 4");
    }

    // Tests a single record parses on its own
    // Verified by ignoring the line number argument
    #[test]
    fn test_parse_record() {
        let tile = parse_record("7,Y,YRRYGG", 1).unwrap();
        assert_eq!(tile.id(), 7);
        assert_eq!(tile.home_colour(), Colour::Yellow);

        assert!(matches!(
            parse_record("7,Y", 42).unwrap_err(),
            RingError::TileParse { line: 42, .. }
        ));
    }

    // Tests loading from disk and naming the file in parse errors
    // Verified by dropping the source name context
    #[test]
    fn test_load_tiles() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("tiles.txt");
        fs::write(&good, SAMPLE).unwrap();
        assert_eq!(load_tiles(&good).unwrap().len(), 3);

        let bad = dir.path().join("bad.txt");
        fs::write(&bad, "1,R,RRGGBB\n1,R,RRGGBB\n").unwrap();
        match load_tiles(&bad).unwrap_err() {
            RingError::TileParse { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("bad.txt"), "{reason}");
            }
            other => unreachable!("Expected TileParse, got {other:?}"),
        }
    }

    // Tests a missing file is reported as a file system error
    // Verified by returning an empty tile list for missing files
    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.txt");
        assert!(matches!(
            load_tiles(&missing).unwrap_err(),
            RingError::FileSystem {
                operation: "read tile set",
                ..
            }
        ));
    }
}
