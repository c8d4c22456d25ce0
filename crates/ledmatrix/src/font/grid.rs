//! Fixed-cell grid fonts.

use super::FontError;

/// Code of the first glyph in every grid font.
const FIRST_CODE: u32 = 32;

/// A monospaced font where every glyph is a `width x height` bit grid.
///
/// Glyphs are supplied column-major: one string of `height` bits (`'0'` or
/// `'1'`, top to bottom) per column, `width` columns per glyph. The first
/// glyph is the space character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridFont {
    width: u32,
    height: u32,
    /// Per glyph, bits in column-major order.
    glyphs: Vec<Vec<bool>>,
}

impl GridFont {
    /// Build a grid font from column strings, validating every glyph's shape.
    pub fn new<G, C>(width: u32, height: u32, glyphs: G) -> Result<Self, FontError>
    where
        G: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        if width == 0 || height == 0 {
            return Err(FontError::EmptyCell { width, height });
        }

        let parsed = glyphs
            .into_iter()
            .enumerate()
            .map(|(index, columns)| parse_glyph(index, width, height, columns))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            width,
            height,
            glyphs: parsed,
        })
    }

    /// Cell width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Cell height in pixels; also the line step.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of glyphs, starting at code 32.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Bits of the glyph for `code`, column-major, or `None` if the font has
    /// no such glyph.
    pub(crate) fn glyph(&self, code: u32) -> Option<&[bool]> {
        let index = code.checked_sub(FIRST_CODE)?;
        self.glyphs.get(index as usize).map(Vec::as_slice)
    }
}

fn parse_glyph<C>(index: usize, width: u32, height: u32, columns: C) -> Result<Vec<bool>, FontError>
where
    C: IntoIterator,
    C::Item: AsRef<str>,
{
    let columns: Vec<C::Item> = columns.into_iter().collect();
    let shape_error = |rows: usize| FontError::GlyphShape {
        index,
        columns: columns.len(),
        rows,
        width,
        height,
    };

    if columns.len() != width as usize {
        let rows = columns.first().map_or(0, |c| c.as_ref().chars().count());
        return Err(shape_error(rows));
    }

    let mut bits = Vec::with_capacity(width as usize * height as usize);
    for column in &columns {
        let column = column.as_ref();
        let rows = column.chars().count();
        if rows != height as usize {
            return Err(shape_error(rows));
        }
        for c in column.chars() {
            match c {
                '0' => bits.push(false),
                '1' => bits.push(true),
                found => return Err(FontError::InvalidBit { index, found }),
            }
        }
    }
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_column_major() {
        // One 2x3 glyph: left column "101", right column "011"
        let font = GridFont::new(2, 3, [["101", "011"]]).unwrap();
        assert_eq!(font.len(), 1);
        assert_eq!(
            font.glyph(32).unwrap(),
            &[true, false, true, false, true, true]
        );
    }

    #[test]
    fn test_lookup_starts_at_space() {
        let font = GridFont::new(1, 1, [["0"], ["1"]]).unwrap();
        assert!(font.glyph(31).is_none());
        assert_eq!(font.glyph(33).unwrap(), &[true]);
        assert!(font.glyph(34).is_none());
        assert!(font.glyph(0).is_none());
    }

    #[test]
    fn test_shape_errors() {
        let err = GridFont::new(2, 3, [vec!["101"]]).unwrap_err();
        assert!(matches!(err, FontError::GlyphShape { index: 0, columns: 1, .. }));

        let err = GridFont::new(2, 3, [vec!["101", "01"]]).unwrap_err();
        assert!(matches!(err, FontError::GlyphShape { index: 0, rows: 2, .. }));

        let err = GridFont::new(1, 2, [vec!["10"], vec!["1x"]]).unwrap_err();
        assert_eq!(err, FontError::InvalidBit { index: 1, found: 'x' });

        let err = GridFont::new(0, 2, Vec::<Vec<&str>>::new()).unwrap_err();
        assert_eq!(err, FontError::EmptyCell { width: 0, height: 2 });
    }
}
