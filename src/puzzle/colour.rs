//! Edge colours and their text and pixel representations

use crate::io::error::{RingError, Result, invalid_parameter};
use std::fmt;
use std::str::FromStr;

/// One of the four link colours printed on tile edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    /// Symbol `R`
    Red,
    /// Symbol `G`
    Green,
    /// Symbol `Y`
    Yellow,
    /// Symbol `B`
    Blue,
}

impl Colour {
    /// Every colour in palette order
    pub const ALL: [Self; 4] = [Self::Red, Self::Green, Self::Yellow, Self::Blue];

    /// Parse a single-character colour symbol
    ///
    /// # Errors
    ///
    /// Returns `InvalidColour` for symbols outside `R`, `G`, `Y`, `B`, in
    /// either case
    pub const fn from_symbol(symbol: char) -> Result<Self> {
        match symbol.to_ascii_uppercase() {
            'R' => Ok(Self::Red),
            'G' => Ok(Self::Green),
            'Y' => Ok(Self::Yellow),
            'B' => Ok(Self::Blue),
            _ => Err(RingError::InvalidColour { symbol }),
        }
    }

    /// Single-character symbol used in tile-set files
    pub const fn symbol(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Blue => 'B',
        }
    }

    /// Pixel colour used when rendering
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Red => [255, 0, 0],
            Self::Green => [0, 255, 0],
            Self::Yellow => [255, 255, 0],
            Self::Blue => [0, 0, 255],
        }
    }

    /// Position in [`Colour::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Colour {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::from_symbol(symbol),
            _ => Err(invalid_parameter(
                "colour",
                &s,
                &"expected a single colour symbol",
            )),
        }
    }
}
