//! Color values for completed and pending steps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An 8-bit-per-channel color with alpha.
///
/// Parsed from `#RRGGBB` or `#AARRGGBB` strings (alpha first), and
/// serialized back as `#AARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    /// Create a color with explicit alpha.
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse a `#RRGGBB` or `#AARRGGBB` color string.
    pub fn parse(value: &str) -> Result<Self> {
        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidColor(format!("'{}' must start with '#'", value)))?;

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidColor(format!("'{}' is not hexadecimal", value)));
        }

        let packed = u32::from_str_radix(hex, 16)
            .map_err(|_| Error::InvalidColor(format!("'{}' is not hexadecimal", value)))?;

        match hex.len() {
            6 => Ok(Self::rgb(
                (packed >> 16) as u8,
                (packed >> 8) as u8,
                packed as u8,
            )),
            8 => Ok(Self::argb(
                (packed >> 24) as u8,
                (packed >> 16) as u8,
                (packed >> 8) as u8,
                packed as u8,
            )),
            _ => Err(Error::InvalidColor(format!(
                "'{}' must have 6 or 8 hex digits",
                value
            ))),
        }
    }

    /// Channels as `[r, g, b, a]` in the 0.0 - 1.0 range.
    pub fn to_f32_array(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rgba {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.a, self.r, self.g, self.b
        )
    }
}
