//! Everything around the core search
//!
//! This module contains the collaborators of the solver:
//! - Tile-set loading and the error type
//! - PNG rendering of solved boards
//! - The command-line driver and its progress display

/// Command-line parsing and the multi-size driver
pub mod cli;
/// Driver constants and defaults
pub mod configuration;
/// Error types and context helpers
pub mod error;
/// Board rendering to PNG
pub mod image;
/// Tile-set file parsing
pub mod loader;
/// Terminal progress display
pub mod progress;
