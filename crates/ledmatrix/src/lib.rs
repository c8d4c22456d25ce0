//! Software framebuffer and 2D rasterizer for addressable LED matrices.
//!
//! A [`Canvas`] holds one row-major [`Matrix`] of [`Pixel`]s and draws into it
//! with the classic Adafruit GFX primitives: Bresenham lines, midpoint
//! circles with quadrant masks, scanline triangle fill, packed bitmap blits
//! and two font models. Drawing is synchronous and never fails; coordinates
//! outside the grid are dropped.
//!
//! # Example
//!
//! ```
//! use ledmatrix::{normalize, picopixel, Canvas, Font};
//!
//! let mut canvas = Canvas::new(16, 8).unwrap();
//! let red = normalize("#ff0000").unwrap();
//!
//! canvas.draw_rect(0, 0, 16, 8, red);
//! canvas.write(2, 1, "Hi", &Font::from(picopixel()), 1, red);
//!
//! // Hand the frame to a display driver, or preview it
//! println!("{}", canvas.to_ascii());
//! assert_eq!(canvas.matrix().len(), 16 * 8);
//! ```
//!
//! # Modules
//!
//! - [`color`]: RGBA values and color normalization
//! - [`pixel`]: pixel values and the matrix
//! - [`canvas`]: the drawing engine
//! - [`corners`]: quadrant masks for circle helpers
//! - [`font`]: bitmap and grid font models, plus the bundled Picopixel font
//! - [`ascii`]: text-art readout
//!
//! # License
//!
//! The drawing primitives and the bitmap font code are ported from the
//! Adafruit GFX Library and keep its BSD notice, reproduced in the `NOTICE`
//! file shipped with this crate.

pub mod ascii;
pub mod canvas;
pub mod color;
pub mod corners;
pub mod font;
pub mod pixel;

pub use canvas::{Canvas, CanvasError};
pub use color::{normalize, normalize_with, ChannelDecoder, ColorError, ColorInput, HexDecoder, Rgba};
pub use corners::{Corners, Halves};
pub use font::{picopixel, BitmapFont, Font, FontError, Glyph, GridFont};
pub use pixel::{Matrix, Pixel};
