/// Unplaced tile bookkeeping for the search
pub mod remaining;
/// Depth-first backtracking ring search
pub mod solver;
/// Validation of solved boards
pub mod verify;

pub use solver::{RingSolver, SearchStats, solve};
