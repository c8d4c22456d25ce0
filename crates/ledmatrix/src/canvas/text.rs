// Portions ported from the Adafruit GFX Library.
// Copyright (c) 2012 Adafruit Industries. All rights reserved.
// Redistributed under the BSD license; see NOTICE at the crate root.

//! Text rendering for bitmap and grid fonts.
//!
//! Glyph placement is computed in `i64` with saturating steps, so a cursor
//! pushed far past the grid simply stops lighting pixels.

use log::trace;

use super::Canvas;
use crate::color::Rgba;
use crate::font::{BitmapFont, Font, Glyph, GridFont};

/// Scale factor for bitmap glyphs. Zero draws at natural size.
fn scale(size: u32) -> i64 {
    i64::from(size.max(1))
}

/// Offset `base` by `steps` cells of `step` pixels.
fn advance(base: i64, steps: i64, step: i64) -> i64 {
    base.saturating_add(steps.saturating_mul(step))
}

impl Canvas {
    /// Render `text` with its first line at `(x, y)`.
    ///
    /// Bitmap fonts honor `size` and the font's line height. Grid fonts place
    /// each character in a fixed cell and ignore `size`. Characters the font
    /// does not cover are skipped.
    pub fn write(&mut self, x: i32, y: i32, text: &str, font: &Font, size: u32, color: Rgba) {
        let (x, y) = (i64::from(x), i64::from(y));
        match font {
            Font::Bitmap(font) => self.write_bitmap(x, y, text, font, size, color),
            Font::Grid(font) => self.write_grid(x, y, text, font, color),
        }
    }

    /// Draw one bitmap-font character with its cursor at `(x, y)`.
    ///
    /// At `size > 1` every glyph bit becomes a `size x size` block.
    pub fn draw_char(
        &mut self,
        x: i32,
        y: i32,
        ch: char,
        font: &BitmapFont,
        size: u32,
        color: Rgba,
    ) {
        match font.glyph(ch as u32) {
            Some(glyph) => {
                self.render_glyph(x.into(), y.into(), font, glyph, scale(size), color)
            }
            None => trace!("no glyph for {:?} in {:#x}..={:#x}", ch, font.first, font.last),
        }
    }

    fn render_glyph(
        &mut self,
        x: i64,
        y: i64,
        font: &BitmapFont,
        glyph: &Glyph,
        size: i64,
        color: Rgba,
    ) {
        let xo = i64::from(glyph.x_offset);
        let yo = i64::from(glyph.y_offset) + i64::from(font.y_offset_correction);

        for (col, row, set) in font.glyph_bits(glyph) {
            if !set {
                continue;
            }
            let (col, row) = (xo + i64::from(col), yo + i64::from(row));
            if size == 1 {
                self.plot(x.saturating_add(col), y.saturating_add(row), color);
            } else {
                self.rect_fill(advance(x, col, size), advance(y, row, size), size, size, color);
            }
        }
    }

    fn write_bitmap(
        &mut self,
        x: i64,
        y: i64,
        text: &str,
        font: &BitmapFont,
        size: u32,
        color: Rgba,
    ) {
        let size = scale(size);
        let (mut cursor_x, mut cursor_y) = (x, y);

        for ch in text.chars() {
            if ch == '\n' {
                cursor_x = x;
                cursor_y = advance(cursor_y, size, font.y_advance.into());
                continue;
            }
            let Some(glyph) = font.glyph(ch as u32) else {
                trace!("skipping {:?}: outside {:#x}..={:#x}", ch, font.first, font.last);
                continue;
            };
            self.render_glyph(cursor_x, cursor_y, font, glyph, size, color);
            cursor_x = advance(cursor_x, size, glyph.x_advance.into());
        }
    }

    fn write_grid(&mut self, x: i64, y: i64, text: &str, font: &GridFont, color: Rgba) {
        let cell_w = i64::from(font.width());
        let cell_h = i64::from(font.height());
        let rows = font.height() as usize;

        for (line_index, line) in text.split('\n').enumerate() {
            let top = advance(y, line_index as i64, cell_h);
            for (char_index, ch) in line.chars().enumerate() {
                let Some(bits) = font.glyph(ch as u32) else {
                    trace!("skipping {:?}: grid font has {} glyphs", ch, font.len());
                    continue;
                };
                let left = advance(x, char_index as i64, cell_w);
                for (i, _) in bits.iter().enumerate().filter(|(_, set)| **set) {
                    let col = (i / rows) as i64;
                    let row = (i % rows) as i64;
                    self.plot(left.saturating_add(col), top.saturating_add(row), color);
                }
            }
        }
    }
}
