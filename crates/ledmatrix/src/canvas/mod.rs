//! The rasterization engine.
//!
//! A [`Canvas`] owns one [`Matrix`] and mutates it through drawing calls.
//! Every primitive bottoms out in the same bounds check as
//! [`Canvas::draw_pixel`], which silently drops coordinates outside the grid,
//! so shapes may be placed partially (or entirely) off-screen without any
//! pre-clipping by the caller.
//!
//! Primitives are split by family:
//! - `lines`: lines, rectangles, triangles and their filled forms
//! - `circles`: midpoint circles, quadrant helpers and rounded rectangles
//! - `bitmap`: packed monochrome bitmap blits
//! - `text`: bitmap-font and grid-font text

mod bitmap;
mod circles;
mod lines;
mod text;

use log::debug;
use thiserror::Error;

use crate::color::Rgba;
use crate::pixel::{Matrix, Pixel};

/// Errors from canvas construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CanvasError {
    /// Width or height was zero.
    #[error("Canvas dimensions must be non-zero, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },
}

/// Framebuffer plus drawing primitives.
#[derive(Debug, Clone)]
pub struct Canvas {
    matrix: Matrix,
}

impl Canvas {
    /// Create an all-off canvas.
    pub fn new(width: u32, height: u32) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroDimension { width, height });
        }
        debug!("creating {}x{} canvas", width, height);
        Ok(Self {
            matrix: Matrix::filled(width, height, Pixel::Off),
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.matrix.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.matrix.height()
    }

    /// Read-only view of the current frame.
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Hand the frame off to a consumer.
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Light the pixel at `(x, y)`. Out-of-range coordinates are ignored.
    #[inline]
    pub fn draw_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        self.plot(x.into(), y.into(), color);
    }

    /// Widened form of [`Canvas::draw_pixel`] used by the primitives, whose
    /// offsets can leave the `i32` range near its ends.
    #[inline]
    pub(crate) fn plot(&mut self, x: i64, y: i64, color: Rgba) {
        if let Some(idx) = self.matrix.index_of(x, y) {
            self.matrix.set(idx, Pixel::On(color));
        }
    }

    /// Light a pixel from raw channels.
    pub fn fill(&mut self, x: i32, y: i32, r: u8, g: u8, b: u8, a: f64) {
        self.draw_pixel(x, y, Rgba::rgba(r, g, b, a));
    }

    /// Set every cell to `color`, or switch every cell off when `None`.
    pub fn fill_screen(&mut self, color: Option<Rgba>) {
        debug!(
            "filling {}x{} canvas with {}",
            self.width(),
            self.height(),
            color.map_or_else(|| "off".to_string(), |c| c.to_string())
        );
        self.matrix.fill(Pixel::from(color));
    }

    /// Switch every cell off.
    pub fn clear(&mut self) {
        self.fill_screen(None);
    }
}
