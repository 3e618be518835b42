//! Driver constants and runtime configuration defaults

// Puzzle sizes iterated by the driver
/// Smallest ring size attempted by default
pub const DEFAULT_MIN_TILES: usize = 3;
/// Largest ring size attempted by default
pub const DEFAULT_MAX_TILES: usize = 19;

// Tile-set file format
/// Separator between the id, home colour and edge fields
pub const RECORD_DELIMITER: char = ',';
/// Lines starting with this prefix are ignored
pub const COMMENT_PREFIX: char = '#';
/// Fields in each tile record
pub const RECORD_FIELDS: usize = 3;

// Rendering settings
/// Default hexagon circumradius in pixels
pub const DEFAULT_HEX_SIZE: u32 = 60;
/// Smallest hexagon that still leaves room for edge markers and labels
pub const MIN_HEX_SIZE: u32 = 12;
/// Largest hexagon accepted, keeps image allocation bounded
pub const MAX_HEX_SIZE: u32 = 400;
/// Hexagon outline colour
pub const OUTLINE_COLOUR: [u8; 3] = [255, 255, 255];
/// Image background colour
pub const BACKGROUND_COLOUR: [u8; 3] = [0, 0, 0];
/// Distance of edge markers from the hexagon centre, relative to its size
pub const EDGE_MARKER_DISTANCE: f64 = 0.75;
/// Edge marker radius relative to the hexagon size
pub const EDGE_MARKER_RADIUS: f64 = 0.1;
/// Width of the link strokes relative to the hexagon size
pub const LINK_STROKE_WIDTH: f64 = 1.0 / 12.0;

// Output settings
/// Prefix of rendered ring images, followed by the ring size
pub const OUTPUT_PREFIX: &str = "loop_";
/// Extension of rendered ring images
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
