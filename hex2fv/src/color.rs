//! Color types and methods.

use std::{fmt, str::FromStr};

/// Number of hex digits in an RGB code.
pub const HEX_DIGITS: usize = 6;

/// Alpha literal appended to every [`Triplet`].
const ALPHA_LITERAL: &str = "1.f";

/// Reasons a string is not a 6-digit hex RGB code.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub enum HexError {
    /// Wrong number of characters.
    #[error("found {0} characters")]
    Length(usize),
    /// A character outside `0-9`, `a-f` and `A-F`.
    #[error("{0:?} is not a hex digit")]
    NonHex(char),
}

/// An RGB color with 8-bit channels.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub struct Rgb {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Rgb {
    /// Create a new `Rgb` from separate channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a 6-digit hex code such as `febc68` or `FEBC68`. No `#` or `0x` prefix is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`HexError::Length`] if `hex` isn't exactly 6 characters long, or
    /// [`HexError::NonHex`] for the first character that isn't a hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, HexError> {
        let len = hex.chars().count();
        if len != HEX_DIGITS {
            return Err(HexError::Length(len));
        }

        let mut channels = [0u8; 3];
        for (i, c) in hex.chars().enumerate() {
            let nibble = c.to_digit(16).ok_or(HexError::NonHex(c))?;
            channels[i / 2] = (channels[i / 2] << 4) | nibble as u8;
        }
        Ok(channels.into())
    }

    /// Channels scaled from `0..=255` into `0.0..=1.0`.
    #[inline]
    #[must_use]
    pub fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|channel| f64::from(channel) / 255.0)
    }

    /// The `{r, g, b, 1.f}` literal for this color.
    #[inline]
    pub fn triplet(self) -> Triplet {
        Triplet(self)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Displays an [`Rgb`] as a float initializer literal, e.g. `{0.263f, 0.259f, 0.278f, 1.f}`.
///
/// Each channel is printed with 3 decimal places, rounded to nearest with ties to even.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[must_use]
pub struct Triplet(pub Rgb);

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0.channels();
        write!(f, "{{{r:.3}f, {g:.3}f, {b:.3}f, {ALPHA_LITERAL}}}")
    }
}
