//! Tile-set parsing from delimited text
//!
//! One record per line: `id,home_colour,edges`, where `edges` lists the six
//! edge colours in canonical order, e.g. `7,Y,RBYRYB`. Blank lines and lines
//! starting with `#` are skipped.

use crate::io::configuration::{COMMENT_PREFIX, RECORD_DELIMITER, RECORD_FIELDS};
use crate::io::error::{ErrorContext, Result, RingError, WithContext, parse_error};
use crate::puzzle::colour::Colour;
use crate::puzzle::tile::{EDGE_COUNT, Tile};
use log::debug;
use std::collections::HashSet;
use std::path::Path;

/// Read and parse a tile-set file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - Any record is malformed (see [`parse_tiles`])
pub fn load_tiles(path: &Path) -> Result<Vec<Tile>> {
    let text = std::fs::read_to_string(path).map_err(|e| RingError::FileSystem {
        path: path.to_path_buf(),
        operation: "read tile set",
        source: e,
    })?;

    let tiles = parse_tiles(&text).with_context(ErrorContext {
        source_name: Some(path.display().to_string()),
        ..Default::default()
    })?;
    debug!("Loaded {} tiles from {}", tiles.len(), path.display());
    Ok(tiles)
}

/// Parse tile records from text, preserving their order
///
/// # Errors
///
/// Returns `TileParse` with the 1-based line number if a record has the wrong
/// number of fields, a non-numeric id, an unknown colour symbol, other than
/// six edges, edges that do not form three colour pairs, or an id already used
/// by an earlier record.
pub fn parse_tiles(text: &str) -> Result<Vec<Tile>> {
    let mut tiles = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let tile = parse_record(line, line_number)?;
        if !seen_ids.insert(tile.id()) {
            return Err(parse_error(
                line_number,
                &format!("duplicate tile id {}", tile.id()),
            ));
        }
        tiles.push(tile);
    }

    Ok(tiles)
}

/// Parse a single `id,home_colour,edges` record
///
/// # Errors
///
/// Returns `TileParse` tagged with `line_number` for any malformed field
pub fn parse_record(line: &str, line_number: usize) -> Result<Tile> {
    let fields: Vec<&str> = line.split(RECORD_DELIMITER).map(str::trim).collect();
    let [id_field, colour_field, edges_field] = fields.as_slice() else {
        return Err(parse_error(
            line_number,
            &format!("expected {RECORD_FIELDS} fields, found {}", fields.len()),
        ));
    };

    let id: u32 = id_field.parse().map_err(|err| {
        parse_error(line_number, &format!("invalid tile id '{id_field}': {err}"))
    })?;

    let home_colour: Colour = colour_field.parse().with_line(line_number)?;

    let symbols: Vec<char> = edges_field.chars().collect();
    let Ok(symbols) = <[char; EDGE_COUNT]>::try_from(symbols) else {
        return Err(parse_error(
            line_number,
            &format!("expected {EDGE_COUNT} edge colours, found '{edges_field}'"),
        ));
    };

    let mut edges = [Colour::Red; EDGE_COUNT];
    for (edge, symbol) in edges.iter_mut().zip(symbols) {
        *edge = Colour::from_symbol(symbol).with_line(line_number)?;
    }

    Tile::new(id, home_colour, edges).with_line(line_number)
}
