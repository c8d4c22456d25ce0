// Portions ported from the Adafruit GFX Library.
// Copyright (c) 2012 Adafruit Industries. All rights reserved.
// Redistributed under the BSD license; see NOTICE at the crate root.

//! Metric bitmap fonts (Adafruit GFX layout).

use serde::{Deserialize, Serialize};

use super::FontError;

/// Codes above this are remapped when the font covers the cp437 range.
const CP437_THRESHOLD: u32 = 0x7E;
/// Distance the cp437 glyphs are packed down by.
const CP437_SHIFT: u32 = 0x22;

/// Metrics for one glyph of a [`BitmapFont`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    /// Byte offset of the glyph's first row in the shared bitmap.
    pub bitmap_offset: usize,
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
    /// Cursor advance after drawing, in unscaled pixels.
    pub x_advance: i32,
    /// Horizontal offset from the cursor to the bitmap's left edge.
    pub x_offset: i32,
    /// Vertical offset from the cursor (baseline) to the bitmap's top edge.
    pub y_offset: i32,
}

impl Glyph {
    pub const fn new(
        bitmap_offset: usize,
        width: u32,
        height: u32,
        x_advance: i32,
        x_offset: i32,
        y_offset: i32,
    ) -> Self {
        Self {
            bitmap_offset,
            width,
            height,
            x_advance,
            x_offset,
            y_offset,
        }
    }
}

/// A font of per-glyph metrics over one packed bitmap.
///
/// Glyph bitmaps are MSB-first and packed back to back with no row padding:
/// a 3x5 glyph is 15 consecutive bits. Each glyph starts on a byte boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitmapFont {
    /// Concatenated glyph bitmaps.
    pub bitmap: Vec<u8>,
    /// Glyph metrics, indexed by `code - first`.
    pub glyphs: Vec<Glyph>,
    /// First character code covered.
    pub first: u32,
    /// Last character code covered (inclusive).
    pub last: u32,
    /// Line height in unscaled pixels.
    pub y_advance: i32,
    /// Added to every glyph's `y_offset` so that `y` addresses the top of
    /// the line rather than the baseline.
    pub y_offset_correction: i32,
    /// Remap codes above 0x7E down by 0x22 before lookup.
    #[serde(default)]
    pub cp437: bool,
}

impl BitmapFont {
    /// Create a font, checking that the glyph table covers `first..=last`.
    pub fn new(
        bitmap: Vec<u8>,
        glyphs: Vec<Glyph>,
        first: u32,
        last: u32,
        y_advance: i32,
        y_offset_correction: i32,
    ) -> Result<Self, FontError> {
        let expected = if last >= first {
            (last - first) as usize + 1
        } else {
            0
        };
        if glyphs.len() != expected {
            return Err(FontError::GlyphCount {
                first,
                last,
                glyphs: glyphs.len(),
            });
        }

        Ok(Self {
            bitmap,
            glyphs,
            first,
            last,
            y_advance,
            y_offset_correction,
            cp437: false,
        })
    }

    /// Enable or disable the cp437 extended-range remap.
    pub fn with_cp437(mut self, cp437: bool) -> Self {
        self.cp437 = cp437;
        self
    }

    /// Apply the cp437 remap, if enabled.
    pub fn remap(&self, code: u32) -> u32 {
        if self.cp437 && code > CP437_THRESHOLD {
            code - CP437_SHIFT
        } else {
            code
        }
    }

    /// Glyph for a character code, or `None` if outside the font's range.
    pub fn glyph(&self, code: u32) -> Option<&Glyph> {
        let code = self.remap(code);
        if code < self.first || code > self.last {
            return None;
        }
        self.glyphs.get((code - self.first) as usize)
    }

    /// Iterate a glyph's bits row by row as `(col, row, set)`.
    pub(crate) fn glyph_bits<'a>(
        &'a self,
        glyph: &'a Glyph,
    ) -> impl Iterator<Item = (i32, i32, bool)> + 'a {
        let width = glyph.width as i32;
        let height = glyph.height as i32;
        let mut offset = glyph.bitmap_offset;
        let mut bits = 0u8;
        let mut bit = 0u32;

        (0..height).flat_map(move |row| (0..width).map(move |col| (col, row))).map(
            move |(col, row)| {
                if bit & 7 == 0 {
                    bits = self.bitmap.get(offset).copied().unwrap_or(0);
                    offset += 1;
                }
                bit += 1;
                let set = bits & 0x80 != 0;
                bits <<= 1;
                (col, row, set)
            },
        )
    }
}
