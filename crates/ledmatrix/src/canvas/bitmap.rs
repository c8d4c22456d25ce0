// Portions ported from the Adafruit GFX Library.
// Copyright (c) 2012 Adafruit Industries. All rights reserved.
// Redistributed under the BSD license; see NOTICE at the crate root.

//! Monochrome bitmap blits.

use super::Canvas;
use crate::color::Rgba;

/// Whether bit `col` of row `row` is set in a packed, MSB-first bitmap whose
/// rows are padded to `byte_width` bytes. Bytes past the end read as zero.
#[inline]
fn bit_at(bitmap: &[u8], byte_width: usize, col: usize, row: usize) -> bool {
    let byte = bitmap.get(row * byte_width + col / 8).copied().unwrap_or(0);
    byte & (0x80 >> (col & 7)) != 0
}

impl Canvas {
    /// Draw a packed monochrome bitmap with its top-left corner at `(x, y)`.
    ///
    /// Rows are `ceil(w / 8)` bytes wide, most significant bit first. Set
    /// bits light a pixel in `color`; clear bits leave the matrix untouched.
    pub fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &[u8], w: i32, h: i32, color: Rgba) {
        if w <= 0 || h <= 0 {
            return;
        }
        let byte_width = (w as usize).div_ceil(8);
        let (x, y) = (i64::from(x), i64::from(y));

        for row in 0..h {
            for col in 0..w {
                if bit_at(bitmap, byte_width, col as usize, row as usize) {
                    self.plot(x + i64::from(col), y + i64::from(row), color);
                }
            }
        }
    }
}
