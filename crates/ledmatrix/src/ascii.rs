//! Text-art readout of a matrix, one character per cell.

use crate::canvas::Canvas;
use crate::pixel::Matrix;

/// Character for a lit cell in [`Matrix::to_ascii`].
pub const LIT: char = 'X';
/// Character for an unlit cell in [`Matrix::to_ascii`].
pub const UNLIT: char = ' ';

impl Matrix {
    /// Rows as strings, top to bottom.
    pub fn ascii_rows(&self, on: char, off: char) -> impl Iterator<Item = String> + '_ {
        self.rows().map(move |row| {
            row.iter()
                .map(|pixel| if pixel.is_on() { on } else { off })
                .collect::<String>()
        })
    }

    /// Whole frame with custom characters, rows joined by `'\n'`.
    pub fn to_ascii_with(&self, on: char, off: char) -> String {
        self.ascii_rows(on, off).collect::<Vec<_>>().join("\n")
    }

    /// Whole frame as `'X'` / `' '`, no trailing newline.
    pub fn to_ascii(&self) -> String {
        self.to_ascii_with(LIT, UNLIT)
    }
}

impl Canvas {
    /// Shorthand for `self.matrix().to_ascii()`.
    pub fn to_ascii(&self) -> String {
        self.matrix().to_ascii()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn test_blank_frame() {
        let canvas = Canvas::new(3, 2).unwrap();
        assert_eq!(canvas.to_ascii(), "   \n   ");
    }

    #[test]
    fn test_custom_characters() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        canvas.draw_pixel(1, 0, Rgba::white());
        assert_eq!(canvas.matrix().to_ascii_with('#', '.'), ".#\n..");
    }

    #[test]
    fn test_rows_match_height() {
        let canvas = Canvas::new(4, 5).unwrap();
        let rows: Vec<String> = canvas.matrix().ascii_rows(LIT, UNLIT).collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|row| row.len() == 4));
    }
}
