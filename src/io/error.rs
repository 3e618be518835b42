//! Error types and context management for puzzle loading, solving and rendering

use std::fmt;
use std::path::PathBuf;

/// Main error type for all ring puzzle operations
#[derive(Debug)]
pub enum RingError {
    /// Colour symbol outside the puzzle's palette
    InvalidColour {
        /// The unrecognised symbol
        symbol: char,
    },

    /// Tile violates the three-colour-pair design
    ///
    /// Every colour that appears on a tile must appear on exactly two of
    /// its six edges, otherwise edge pairing is undefined.
    InvalidTile {
        /// Identifier of the offending tile
        id: u32,
        /// Description of the violation
        reason: String,
    },

    /// Malformed record in a tile-set file
    TileParse {
        /// 1-based line number of the record
        line: usize,
        /// Description of what's wrong with the record
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Operation requires at least one placed tile
    EmptyBoard {
        /// Name of the operation that was attempted
        operation: &'static str,
    },

    /// Failed to save a rendered board to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for RingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidColour { symbol } => {
                write!(f, "Unknown colour symbol '{symbol}'")
            }
            Self::InvalidTile { id, reason } => {
                write!(f, "Invalid tile {id}: {reason}")
            }
            Self::TileParse { line, reason } => {
                write!(f, "Malformed tile record on line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::EmptyBoard { operation } => {
                write!(f, "Cannot {operation} an empty board")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for RingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for ring puzzle results
pub type Result<T> = std::result::Result<T, RingError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// 1-based line of the tile record being processed
    pub line: Option<usize>,
    /// Name of the file the record came from
    pub source_name: Option<String>,
}

/// Enriches error messages with loader state information
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the record line context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the line context applied
    fn with_line(self, line: usize) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<RingError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let error = e.into();
            match (error, context.line) {
                // Record-level failures are reported against the line they came from
                (
                    err @ (RingError::InvalidColour { .. }
                    | RingError::InvalidTile { .. }
                    | RingError::InvalidParameter { .. }),
                    Some(line),
                ) => RingError::TileParse {
                    line,
                    reason: err.to_string(),
                },
                (RingError::TileParse { line, reason }, _) => match context.source_name {
                    Some(name) => RingError::TileParse {
                        line,
                        reason: format!("{reason} (in {name})"),
                    },
                    None => RingError::TileParse { line, reason },
                },
                (err, _) => err,
            }
        })
    }

    fn with_line(self, line: usize) -> Result<T> {
        self.with_context(ErrorContext {
            line: Some(line),
            ..Default::default()
        })
    }
}

impl From<std::io::Error> for RingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RingError {
    RingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a record parse error
pub fn parse_error(line: usize, reason: &impl ToString) -> RingError {
    RingError::TileParse {
        line,
        reason: reason.to_string(),
    }
}
