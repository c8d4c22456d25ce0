//! Font models for text rendering.
//!
//! Two incompatible shapes are supported:
//!
//! - [`BitmapFont`]: per-glyph metrics over a shared packed bitmap, in the
//!   layout used by Adafruit GFX fonts. Supports scaling and the cp437
//!   extended range.
//! - [`GridFont`]: every glyph is a fixed `W x H` grid of bits stored column
//!   by column, starting at code 32. No metrics, no scaling.
//!
//! [`Font`] tags which one a caller supplies; [`Canvas::write`](crate::Canvas::write)
//! dispatches on it.

mod bitmap;
mod grid;
mod picopixel;

pub use bitmap::{BitmapFont, Glyph};
pub use grid::GridFont;
pub use picopixel::picopixel;

use thiserror::Error;

/// Errors from font construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    /// Grid glyph columns or rows do not match the declared cell size.
    #[error("Glyph {index} is {columns} columns of {rows} bits, expected {width}x{height}")]
    GlyphShape {
        index: usize,
        columns: usize,
        rows: usize,
        width: u32,
        height: u32,
    },

    /// Grid glyph contains something other than '0' or '1'.
    #[error("Glyph {index} contains invalid bit '{found}'")]
    InvalidBit { index: usize, found: char },

    /// Grid cell size of zero.
    #[error("Grid font cell must be non-zero, got {width}x{height}")]
    EmptyCell { width: u32, height: u32 },

    /// Bitmap glyph table does not match the declared code range.
    #[error("Font declares codes {first}..={last} but has {glyphs} glyphs")]
    GlyphCount { first: u32, last: u32, glyphs: usize },
}

/// A font in either supported shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Font {
    Bitmap(BitmapFont),
    Grid(GridFont),
}

impl From<BitmapFont> for Font {
    fn from(font: BitmapFont) -> Self {
        Font::Bitmap(font)
    }
}

impl From<GridFont> for Font {
    fn from(font: GridFont) -> Self {
        Font::Grid(font)
    }
}
