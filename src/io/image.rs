//! PNG rendering of solved boards
//!
//! Cells are drawn as flat-topped hexagon outlines. Each edge gets a marker in
//! its colour, and a stroke joins it to its paired edge, so the three colour
//! links of every tile are visible and the loop can be followed by eye. The
//! tile id is printed in the centre in its home colour.

use crate::io::configuration::{
    BACKGROUND_COLOUR, EDGE_MARKER_DISTANCE, EDGE_MARKER_RADIUS, LINK_STROKE_WIDTH, MAX_HEX_SIZE,
    MIN_HEX_SIZE, OUTLINE_COLOUR,
};
use crate::io::error::{Result, RingError, invalid_parameter};
use crate::puzzle::tile::{EDGE_COUNT, Tile};
use crate::spatial::board::{BoundingBox, HexBoard};
use crate::spatial::hex::Position;
use image::{Rgb, RgbImage};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};
use std::path::Path;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

// 3x5 bitmap digits, one row per entry, most significant bit on the left
const DIGIT_GLYPHS: [[u8; 5]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b110, 0b010, 0b010, 0b111],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b001, 0b001],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];
const GLYPH_WIDTH: i64 = 3;
const GLYPH_HEIGHT: i64 = 5;

/// Pixel centre of a cell relative to the board's bounds
pub fn cell_centre(position: Position, bounds: &BoundingBox, hex_size: f64) -> (f64, f64) {
    let px = hex_size * f64::from(1 + position.x - bounds.min.x) * 1.5;
    let py = SQRT_3 / 2.0 * hex_size * f64::from(1 + position.y - bounds.min.y);
    (px, py)
}

/// Image dimensions needed to show every cell inside `bounds`
pub fn image_dimensions(bounds: &BoundingBox, hex_size: f64) -> (u32, u32) {
    let columns = f64::from(bounds.max.x - bounds.min.x);
    let rows = f64::from(bounds.max.y - bounds.min.y);
    let width = hex_size * (1.5 * (columns + 1.0) + 1.0);
    let height = SQRT_3 / 2.0 * hex_size * (rows + 2.0);
    (width.ceil() as u32 + 1, height.ceil() as u32 + 1)
}

/// Point `distance` from the centre toward the midpoint of `edge`
///
/// Edge 0 is straight up and indices run clockwise.
pub fn edge_point(centre: (f64, f64), edge: usize, distance: f64) -> (f64, f64) {
    let angle = FRAC_PI_6 + ((edge + 4) % EDGE_COUNT) as f64 * FRAC_PI_3;
    (
        centre.0 + distance * angle.cos(),
        centre.1 + distance * angle.sin(),
    )
}

/// Draw the board into a new image
///
/// # Errors
///
/// Returns an error if:
/// - No tiles have been placed on the board
/// - `hex_size` is outside the supported range
pub fn render_board(board: &HexBoard, hex_size: u32) -> Result<RgbImage> {
    if !(MIN_HEX_SIZE..=MAX_HEX_SIZE).contains(&hex_size) {
        return Err(invalid_parameter(
            "hex_size",
            &hex_size,
            &format!("must be between {MIN_HEX_SIZE} and {MAX_HEX_SIZE}"),
        ));
    }
    let bounds = board
        .bounds()
        .ok_or(RingError::EmptyBoard { operation: "render" })?;

    let size = f64::from(hex_size);
    let (width, height) = image_dimensions(&bounds, size);
    let mut img = RgbImage::from_pixel(width, height, Rgb(BACKGROUND_COLOUR));

    // Stable draw order so overlapping outlines render identically every time
    let mut cells: Vec<(Position, &Tile)> = board.iter().collect();
    cells.sort_by_key(|&(position, _)| position);

    for (position, tile) in cells {
        draw_tile(&mut img, cell_centre(position, &bounds, size), tile, size);
    }

    Ok(img)
}

/// Render the board and save it as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - Rendering fails (see [`render_board`])
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(board: &HexBoard, hex_size: u32, output_path: &Path) -> Result<()> {
    let img = render_board(board, hex_size)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| RingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| RingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn draw_tile(img: &mut RgbImage, centre: (f64, f64), tile: &Tile, size: f64) {
    let outline = Rgb(OUTLINE_COLOUR);
    for corner in 0..EDGE_COUNT {
        let start = hex_corner(centre, corner, size);
        let end = hex_corner(centre, corner + 1, size);
        draw_line(img, start, end, 1.0, outline);
    }

    let marker_distance = EDGE_MARKER_DISTANCE * size;
    let stroke = (LINK_STROKE_WIDTH * size).max(2.0);
    for edge in 0..EDGE_COUNT {
        let colour = Rgb(tile.edge_colour(edge).rgb());
        let from = edge_point(centre, edge, marker_distance);
        let to = edge_point(centre, tile.paired_edge(edge), marker_distance);
        draw_line(img, from, to, stroke, colour);
        fill_disc(img, from, EDGE_MARKER_RADIUS * size, colour);
    }

    draw_number(img, centre, tile.id(), size, Rgb(tile.home_colour().rgb()));
}

fn hex_corner(centre: (f64, f64), corner: usize, size: f64) -> (f64, f64) {
    let angle = (corner % EDGE_COUNT) as f64 * FRAC_PI_3;
    (
        centre.0 + size * angle.cos(),
        centre.1 + size * angle.sin(),
    )
}

fn put_pixel(img: &mut RgbImage, x: i64, y: i64, colour: Rgb<u8>) {
    if x < 0 || y < 0 {
        return;
    }
    if let Some(pixel) = img.get_pixel_mut_checked(x as u32, y as u32) {
        *pixel = colour;
    }
}

fn fill_disc(img: &mut RgbImage, centre: (f64, f64), radius: f64, colour: Rgb<u8>) {
    let reach = radius.ceil() as i64;
    let cx = centre.0.round() as i64;
    let cy = centre.1.round() as i64;
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if ((dx * dx + dy * dy) as f64) <= radius * radius {
                put_pixel(img, cx + dx, cy + dy, colour);
            }
        }
    }
}

fn draw_line(img: &mut RgbImage, from: (f64, f64), to: (f64, f64), width: f64, colour: Rgb<u8>) {
    let length = (to.0 - from.0).hypot(to.1 - from.1);
    let steps = length.ceil().max(1.0) as i64;
    let radius = width / 2.0;

    for step in 0..=steps {
        let t = step as f64 / steps as f64;
        let point = (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
        if radius <= 0.5 {
            put_pixel(img, point.0.round() as i64, point.1.round() as i64, colour);
        } else {
            fill_disc(img, point, radius, colour);
        }
    }
}

fn draw_number(img: &mut RgbImage, centre: (f64, f64), value: u32, size: f64, colour: Rgb<u8>) {
    let digits: Vec<usize> = value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();

    let scale = ((size / 20.0).round() as i64).max(1);
    let advance = (GLYPH_WIDTH + 1) * scale;
    let text_width = digits.len() as i64 * advance - scale;
    let left = centre.0.round() as i64 - text_width / 2;
    let top = centre.1.round() as i64 - GLYPH_HEIGHT * scale / 2;

    for (slot, digit) in digits.iter().enumerate() {
        let Some(glyph) = DIGIT_GLYPHS.get(*digit) else {
            continue;
        };
        let origin_x = left + slot as i64 * advance;
        for (row, bits) in (0..).zip(glyph.iter()) {
            for column in 0..GLYPH_WIDTH {
                if (bits >> (GLYPH_WIDTH - 1 - column)) & 1 == 1 {
                    fill_block(img, origin_x + column * scale, top + row * scale, scale, colour);
                }
            }
        }
    }
}

fn fill_block(img: &mut RgbImage, x: i64, y: i64, scale: i64, colour: Rgb<u8>) {
    for dy in 0..scale {
        for dx in 0..scale {
            put_pixel(img, x + dx, y + dy, colour);
        }
    }
}
