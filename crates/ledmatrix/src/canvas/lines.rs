// Portions ported from the Adafruit GFX Library.
// Copyright (c) 2012 Adafruit Industries. All rights reserved.
// Redistributed under the BSD license; see NOTICE at the crate root.

//! Straight-edged primitives: lines, rectangles and triangles.
//!
//! The public methods take `i32` coordinates and forward to `i64` forms, so
//! offsets such as `x + w - 1` cannot overflow near the ends of the `i32`
//! range. Fast lines and filled rectangles are clipped to the grid before
//! they are walked; the pixels they light are unchanged.

use std::mem::swap;

use super::Canvas;
use crate::color::Rgba;

/// Inclusive span `a..=b` (in either order) clamped to `0..len`.
fn clip_span(a: i64, b: i64, len: u32) -> Option<(i64, i64)> {
    let (lo, hi) = if a > b { (b, a) } else { (a, b) };
    let (lo, hi) = (lo.max(0), hi.min(i64::from(len) - 1));
    (lo <= hi).then_some((lo, hi))
}

/// Far end of a fast line of `len` pixels starting at `start`.
///
/// A zero length still draws the starting pixel.
fn span_end(start: i64, len: i64) -> i64 {
    if len == 0 {
        start
    } else {
        start.saturating_add(len - 1)
    }
}

impl Canvas {
    /// Draw a line with Bresenham's algorithm.
    ///
    /// Endpoint order does not matter: both directions produce the same set
    /// of pixels.
    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba) {
        self.line(x1.into(), y1.into(), x2.into(), y2.into(), color);
    }

    pub(super) fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, color: Rgba) {
        let (mut x1, mut y1, mut x2, mut y2) = (x1, y1, x2, y2);
        let steep = (y2 - y1).abs() > (x2 - x1).abs();

        if steep {
            swap(&mut x1, &mut y1);
            swap(&mut x2, &mut y2);
        }

        if x1 > x2 {
            swap(&mut x1, &mut x2);
            swap(&mut y1, &mut y2);
        }

        let dx = x2 - x1;
        let dy = (y2 - y1).abs();
        let mut err = dx / 2;
        let ystep = if y1 < y2 { 1 } else { -1 };

        let mut y = y1;
        for x in x1..=x2 {
            if steep {
                self.plot(y, x, color);
            } else {
                self.plot(x, y, color);
            }

            err -= dy;
            if err < 0 {
                y += ystep;
                err += dx;
            }
        }
    }

    /// Vertical segment of `h` pixels starting at `(x, y)`.
    ///
    /// This is a line to `y + h - 1`, so a negative height extends upward.
    /// A zero height draws the single pixel `(x, y)`.
    pub fn draw_fast_vline(&mut self, x: i32, y: i32, h: i32, color: Rgba) {
        self.vline(x.into(), y.into(), h.into(), color);
    }

    /// Horizontal segment of `w` pixels starting at `(x, y)`.
    ///
    /// Mirrors [`Canvas::draw_fast_vline`]: a zero width draws `(x, y)` only.
    pub fn draw_fast_hline(&mut self, x: i32, y: i32, w: i32, color: Rgba) {
        self.hline(x.into(), y.into(), w.into(), color);
    }

    pub(super) fn vline(&mut self, x: i64, y: i64, h: i64, color: Rgba) {
        if x < 0 || x >= i64::from(self.width()) {
            return;
        }
        if let Some((top, bottom)) = clip_span(y, span_end(y, h), self.height()) {
            self.line(x, top, x, bottom, color);
        }
    }

    pub(super) fn hline(&mut self, x: i64, y: i64, w: i64, color: Rgba) {
        if y < 0 || y >= i64::from(self.height()) {
            return;
        }
        if let Some((left, right)) = clip_span(x, span_end(x, w), self.width()) {
            self.line(left, y, right, y, color);
        }
    }

    /// Rectangle outline. Corners are shared by adjacent edges.
    pub fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        let (x, y, w, h) = (i64::from(x), i64::from(y), i64::from(w), i64::from(h));
        self.hline(x, y, w, color);
        self.hline(x, y + h - 1, w, color);
        self.vline(x, y, h, color);
        self.vline(x + w - 1, y, h, color);
    }

    /// Filled rectangle drawn as `w` vertical lines.
    ///
    /// Each column clips independently, so a partially off-screen rectangle
    /// keeps whatever columns remain on the grid.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        self.rect_fill(x.into(), y.into(), w.into(), h.into(), color);
    }

    pub(super) fn rect_fill(&mut self, x: i64, y: i64, w: i64, h: i64, color: Rgba) {
        if w <= 0 {
            return;
        }
        if let Some((left, right)) = clip_span(x, x.saturating_add(w - 1), self.width()) {
            for i in left..=right {
                self.vline(i, y, h, color);
            }
        }
    }

    /// Triangle outline.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_triangle(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        x3: i32,
        y3: i32,
        color: Rgba,
    ) {
        self.draw_line(x1, y1, x2, y2, color);
        self.draw_line(x2, y2, x3, y3, color);
        self.draw_line(x3, y3, x1, y1, color);
    }

    /// Filled triangle by scanline.
    ///
    /// Vertices are sorted by `y`, then the upper part (edges 0-1 and 0-2)
    /// and the lower part (edges 1-2 and 0-2) are walked one row at a time.
    /// Edge crossings are accumulated incrementally and divided with integer
    /// truncation.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Rgba,
    ) {
        let (mut x0, mut y0) = (i64::from(x0), i64::from(y0));
        let (mut x1, mut y1) = (i64::from(x1), i64::from(y1));
        let (mut x2, mut y2) = (i64::from(x2), i64::from(y2));

        // Sort by y so that y0 <= y1 <= y2
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }
        if y1 > y2 {
            swap(&mut y2, &mut y1);
            swap(&mut x2, &mut x1);
        }
        if y0 > y1 {
            swap(&mut y0, &mut y1);
            swap(&mut x0, &mut x1);
        }

        // All three vertices on one scanline
        if y0 == y2 {
            let a = x0.min(x1).min(x2);
            let b = x0.max(x1).max(x2);
            self.hline(a, y0, b - a + 1, color);
            return;
        }

        let dx01 = x1 - x0;
        let dy01 = y1 - y0;
        let dx02 = x2 - x0;
        let dy02 = y2 - y0;
        let dx12 = x2 - x1;
        let dy12 = y2 - y1;
        let mut sa = 0;
        let mut sb = 0;

        // Flat bottom (y1 == y2): the upper pass includes scanline y1 and the
        // lower pass is empty. Otherwise y1 belongs to the lower pass. Either
        // way no pass divides by a zero-height edge.
        let last = if y1 == y2 { y1 } else { y1 - 1 };

        let mut y = y0;
        while y <= last {
            let a = x0 + sa / dy01;
            let b = x0 + sb / dy02;
            sa += dx01;
            sb += dx02;
            self.draw_span(a, b, y, color);
            y += 1;
        }

        sa = dx12 * (y - y1);
        sb = dx02 * (y - y0);
        while y <= y2 {
            let a = x1 + sa / dy12;
            let b = x0 + sb / dy02;
            sa += dx12;
            sb += dx02;
            self.draw_span(a, b, y, color);
            y += 1;
        }
    }

    /// Horizontal span between two x bounds given in either order.
    fn draw_span(&mut self, a: i64, b: i64, y: i64, color: Rgba) {
        let (a, b) = if a > b { (b, a) } else { (a, b) };
        self.hline(a, y, b - a + 1, color);
    }
}
