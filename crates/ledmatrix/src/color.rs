//! Color model for matrix pixels.
//!
//! Every lit pixel carries an [`Rgba`] value. Callers may hand colors in as a
//! ready-made value, a hex string, or a packed numeric code; [`normalize`]
//! turns any of these into a canonical [`Rgba`] or reports why it could not.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from color decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The string is not a recognized hex color.
    #[error("Invalid hex color '{0}': expected #rrggbb or #rgb")]
    InvalidHex(String),

    /// The numeric code does not fit in 24 bits.
    #[error("Color code {0:#x} is out of range (max 0xffffff)")]
    CodeOutOfRange(u32),
}

/// RGBA color with 8-bit channels and a floating point opacity.
///
/// Channels are conventionally 0-255 and opacity 0.0-1.0. Opacity is carried
/// along for downstream consumers and never interpreted by the rasterizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl Rgba {
    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color with explicit opacity.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque black.
    pub const fn black() -> Self {
        Self::rgb(0, 0, 0)
    }

    /// Opaque white.
    pub const fn white() -> Self {
        Self::rgb(255, 255, 255)
    }

    /// Channels as an `[r, g, b]` triple.
    pub fn to_rgb8(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::black()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 1.0 {
            write!(f, " @ {}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize(s)
    }
}

/// Anything a caller may pass where a color is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// An already-built color.
    Rgba(Rgba),
    /// Hex notation such as `#ff0000`.
    Hex(String),
    /// Packed `0xRRGGBB` code.
    Code(u32),
}

impl From<Rgba> for ColorInput {
    fn from(color: Rgba) -> Self {
        ColorInput::Rgba(color)
    }
}

impl From<&Rgba> for ColorInput {
    fn from(color: &Rgba) -> Self {
        ColorInput::Rgba(*color)
    }
}

impl From<&str> for ColorInput {
    fn from(hex: &str) -> Self {
        ColorInput::Hex(hex.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(hex: String) -> Self {
        ColorInput::Hex(hex)
    }
}

impl From<u32> for ColorInput {
    fn from(code: u32) -> Self {
        ColorInput::Code(code)
    }
}

/// Turns textual or numeric color notations into channel triples.
pub trait ChannelDecoder {
    /// Decode a hex string into `(r, g, b)`.
    fn decode_hex(&self, hex: &str) -> Result<(u8, u8, u8), ColorError>;

    /// Decode a packed numeric code into `(r, g, b)`.
    fn decode_code(&self, code: u32) -> Result<(u8, u8, u8), ColorError>;
}

/// Decoder for `#rrggbb` / `#rgb` strings and `0xRRGGBB` codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexDecoder;

impl ChannelDecoder for HexDecoder {
    fn decode_hex(&self, hex: &str) -> Result<(u8, u8, u8), ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());

        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match digits.len() {
            6 => {
                let code = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
                self.decode_code(code)
            }
            3 => {
                // #rgb expands each nibble: #f80 == #ff8800
                let mut channels = [0u8; 3];
                for (slot, c) in channels.iter_mut().zip(digits.chars()) {
                    let nibble = c.to_digit(16).ok_or_else(invalid)? as u8;
                    *slot = nibble * 0x11;
                }
                Ok((channels[0], channels[1], channels[2]))
            }
            _ => Err(invalid()),
        }
    }

    fn decode_code(&self, code: u32) -> Result<(u8, u8, u8), ColorError> {
        if code > 0xFF_FFFF {
            return Err(ColorError::CodeOutOfRange(code));
        }
        Ok((
            ((code >> 16) & 0xFF) as u8,
            ((code >> 8) & 0xFF) as u8,
            (code & 0xFF) as u8,
        ))
    }
}

/// Normalize any color input into an [`Rgba`] using the default decoder.
///
/// An `Rgba` input is returned as a copy; strings and codes are decoded and
/// given full opacity.
pub fn normalize(input: impl Into<ColorInput>) -> Result<Rgba, ColorError> {
    normalize_with(input, &HexDecoder)
}

/// Normalize with a caller-supplied decoder.
pub fn normalize_with<D: ChannelDecoder + ?Sized>(
    input: impl Into<ColorInput>,
    decoder: &D,
) -> Result<Rgba, ColorError> {
    let (r, g, b) = match input.into() {
        ColorInput::Rgba(color) => return Ok(color),
        ColorInput::Hex(hex) => decoder.decode_hex(&hex)?,
        ColorInput::Code(code) => decoder.decode_code(code)?,
    };
    Ok(Rgba::rgb(r, g, b))
}
