// Portions ported from the Adafruit GFX Library.
// Copyright (c) 2012 Adafruit Industries. All rights reserved.
// Redistributed under the BSD license; see NOTICE at the crate root.

//! Midpoint circle primitives and rounded rectangles.

use super::Canvas;
use crate::color::Rgba;
use crate::corners::{Corners, Halves};

/// Integer state of the midpoint circle recurrence.
///
/// Starts at `(0, r)` and walks one octant: `x` grows by one per step while
/// `y` shrinks whenever the decision term `f` turns non-negative.
struct MidpointSteps {
    f: i64,
    ddf_x: i64,
    ddf_y: i64,
    x: i64,
    y: i64,
}

impl MidpointSteps {
    fn new(r: i64) -> Self {
        Self {
            f: 1 - r,
            ddf_x: 1,
            ddf_y: -2 * r,
            x: 0,
            y: r,
        }
    }
}

impl Iterator for MidpointSteps {
    type Item = (i64, i64);

    fn next(&mut self) -> Option<(i64, i64)> {
        if self.x >= self.y {
            return None;
        }
        if self.f >= 0 {
            self.y -= 1;
            self.ddf_y += 2;
            self.f += self.ddf_y;
        }
        self.x += 1;
        self.ddf_x += 2;
        self.f += self.ddf_x;
        Some((self.x, self.y))
    }
}

impl Canvas {
    /// Circle outline of radius `r` centered on `(x0, y0)`.
    pub fn draw_circle(&mut self, x0: i32, y0: i32, r: i32, color: Rgba) {
        let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(r));
        self.plot(x0, y0 + r, color);
        self.plot(x0, y0 - r, color);
        self.plot(x0 + r, y0, color);
        self.plot(x0 - r, y0, color);

        for (x, y) in MidpointSteps::new(r) {
            self.plot(x0 + x, y0 + y, color);
            self.plot(x0 - x, y0 + y, color);
            self.plot(x0 + x, y0 - y, color);
            self.plot(x0 - x, y0 - y, color);
            self.plot(x0 + y, y0 + x, color);
            self.plot(x0 - y, y0 + x, color);
            self.plot(x0 + y, y0 - x, color);
            self.plot(x0 - y, y0 - x, color);
        }
    }

    /// Quarter-circle arcs for the selected corners.
    ///
    /// Unlike [`draw_circle`](Self::draw_circle) this never lights the four
    /// axis extrema; rounded rectangles supply those with their straight
    /// edges.
    pub fn draw_circle_helper(&mut self, x0: i32, y0: i32, r: i32, corners: Corners, color: Rgba) {
        self.arcs(x0.into(), y0.into(), r.into(), corners, color);
    }

    fn arcs(&mut self, x0: i64, y0: i64, r: i64, corners: Corners, color: Rgba) {
        for (x, y) in MidpointSteps::new(r) {
            if corners.contains(Corners::BOTTOM_RIGHT) {
                self.plot(x0 + x, y0 + y, color);
                self.plot(x0 + y, y0 + x, color);
            }
            if corners.contains(Corners::TOP_RIGHT) {
                self.plot(x0 + x, y0 - y, color);
                self.plot(x0 + y, y0 - x, color);
            }
            if corners.contains(Corners::BOTTOM_LEFT) {
                self.plot(x0 - y, y0 + x, color);
                self.plot(x0 - x, y0 + y, color);
            }
            if corners.contains(Corners::TOP_LEFT) {
                self.plot(x0 - y, y0 - x, color);
                self.plot(x0 - x, y0 - y, color);
            }
        }
    }

    /// Filled disc of radius `r` centered on `(x0, y0)`.
    pub fn fill_circle(&mut self, x0: i32, y0: i32, r: i32, color: Rgba) {
        let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(r));
        self.vline(x0, y0 - r, 2 * r + 1, color);
        self.half_discs(x0, y0, r, Halves::BOTH, 0, color);
    }

    /// Filled half-discs drawn as vertical spans.
    ///
    /// `delta` stretches each span downward, bridging the straight middle
    /// section of a rounded rectangle. The center column is not drawn.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_circle_helper(
        &mut self,
        x0: i32,
        y0: i32,
        r: i32,
        halves: Halves,
        delta: i32,
        color: Rgba,
    ) {
        self.half_discs(x0.into(), y0.into(), r.into(), halves, delta.into(), color);
    }

    #[allow(clippy::too_many_arguments)]
    fn half_discs(&mut self, x0: i64, y0: i64, r: i64, halves: Halves, delta: i64, color: Rgba) {
        for (x, y) in MidpointSteps::new(r) {
            if halves.contains(Halves::RIGHT) {
                self.vline(x0 + x, y0 - y, 2 * y + 1 + delta, color);
                self.vline(x0 + y, y0 - x, 2 * x + 1 + delta, color);
            }
            if halves.contains(Halves::LEFT) {
                self.vline(x0 - x, y0 - y, 2 * y + 1 + delta, color);
                self.vline(x0 - y, y0 - x, 2 * x + 1 + delta, color);
            }
        }
    }

    /// Rectangle outline with corners rounded to radius `r`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, r: i32, color: Rgba) {
        let (x, y, w, h, r) = (
            i64::from(x),
            i64::from(y),
            i64::from(w),
            i64::from(h),
            i64::from(r),
        );
        self.hline(x + r, y, w - 2 * r, color);
        self.hline(x + r, y + h - 1, w - 2 * r, color);
        self.vline(x, y + r, h - 2 * r, color);
        self.vline(x + w - 1, y + r, h - 2 * r, color);

        self.arcs(x + r, y + r, r, Corners::TOP_LEFT, color);
        self.arcs(x + w - r - 1, y + r, r, Corners::TOP_RIGHT, color);
        self.arcs(x + w - r - 1, y + h - r - 1, r, Corners::BOTTOM_RIGHT, color);
        self.arcs(x + r, y + h - r - 1, r, Corners::BOTTOM_LEFT, color);
    }

    /// Filled rectangle with corners rounded to radius `r`.
    #[allow(clippy::too_many_arguments)]
    pub fn fill_round_rect(&mut self, x: i32, y: i32, w: i32, h: i32, r: i32, color: Rgba) {
        let (x, y, w, h, r) = (
            i64::from(x),
            i64::from(y),
            i64::from(w),
            i64::from(h),
            i64::from(r),
        );
        self.rect_fill(x + r, y, w - 2 * r, h, color);
        self.half_discs(x + w - r - 1, y + r, r, Halves::RIGHT, h - 2 * r - 1, color);
        self.half_discs(x + r, y + r, r, Halves::LEFT, h - 2 * r - 1, color);
    }
}
