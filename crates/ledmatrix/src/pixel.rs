//! Pixel values and the row-major matrix that holds them.

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// State of a single matrix cell.
///
/// Pixels are plain values: writing one cell copies the color in, so no two
/// cells can ever share mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "PixelRepr", into = "PixelRepr")]
pub enum Pixel {
    /// Unset / background. Carries no color.
    #[default]
    Off,
    /// Lit with a color.
    On(Rgba),
}

impl Pixel {
    /// Whether the pixel is lit.
    pub fn is_on(&self) -> bool {
        matches!(self, Pixel::On(_))
    }

    /// Color of a lit pixel.
    pub fn color(&self) -> Option<Rgba> {
        match self {
            Pixel::On(color) => Some(*color),
            Pixel::Off => None,
        }
    }
}

impl From<Option<Rgba>> for Pixel {
    fn from(color: Option<Rgba>) -> Self {
        color.map_or(Pixel::Off, Pixel::On)
    }
}

/// Wire shape consumed by output drivers: `{ "on": bool, "color"?: {...} }`.
#[derive(Serialize, Deserialize)]
struct PixelRepr {
    on: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<Rgba>,
}

impl From<Pixel> for PixelRepr {
    fn from(pixel: Pixel) -> Self {
        Self {
            on: pixel.is_on(),
            color: pixel.color(),
        }
    }
}

impl From<PixelRepr> for Pixel {
    fn from(repr: PixelRepr) -> Self {
        match (repr.on, repr.color) {
            // A lit pixel without a color has nothing to show; treat it as off.
            (true, Some(color)) => Pixel::On(color),
            _ => Pixel::Off,
        }
    }
}

/// Fixed-size, row-major grid of pixels (`index = y * width + x`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl Matrix {
    /// Create a matrix with every cell set to `fill`.
    pub(crate) fn filled(width: u32, height: u32, fill: Pixel) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![fill; size],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells (`width * height`).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false for a constructed canvas; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// All cells in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index_of(x.into(), y.into()).map(|idx| self.pixels[idx])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        self.pixels.chunks(self.width as usize)
    }

    /// Number of lit cells.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.is_on()).count()
    }

    /// Row-major index of `(x, y)` if it lies inside the grid.
    #[inline]
    pub(crate) fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline]
    pub(crate) fn set(&mut self, idx: usize, pixel: Pixel) {
        self.pixels[idx] = pixel;
    }

    pub(crate) fn fill(&mut self, pixel: Pixel) {
        self.pixels.fill(pixel);
    }
}
