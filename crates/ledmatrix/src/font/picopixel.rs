// Portions ported from the Adafruit GFX Library.
// Copyright (c) 2012 Adafruit Industries. All rights reserved.
// Redistributed under the BSD license; see NOTICE at the crate root.

//! Picopixel, a tiny proportional font shipped with the Adafruit GFX library.

use super::{BitmapFont, Glyph};

const FIRST: u32 = 0x20;
const LAST: u32 = 0x7E;
const Y_ADVANCE: i32 = 7;
/// Caps are 5 rows tall with offset -4; shifting by 4 puts their top at `y`.
const Y_OFFSET_CORRECTION: i32 = 4;

const BITMAP: [u8; 180] = [
    0xE8, 0xB4, 0x57, 0xD5, 0xF5, 0x00, 0x4E, 0x3E, 0x80, 0xA5, 0x4A, 0x4A,
    0x5A, 0x50, 0xC0, 0x6A, 0x40, 0x95, 0x80, 0xAA, 0x80, 0x5D, 0x00, 0x60,
    0xE0, 0x80, 0x25, 0x48, 0x56, 0xD4, 0x75, 0x40, 0xC5, 0x4E, 0xC5, 0x1C,
    0x97, 0x92, 0xF3, 0x1C, 0x53, 0x54, 0xE5, 0x48, 0x55, 0x54, 0x55, 0x94,
    0xA0, 0x46, 0x64, 0xE3, 0x80, 0x98, 0xC5, 0x04, 0x56, 0xC6, 0x57, 0xDA,
    0xD7, 0x5C, 0x72, 0x46, 0xD6, 0xDC, 0xF3, 0xCE, 0xF3, 0x48, 0x72, 0xD4,
    0xB7, 0xDA, 0xF8, 0x24, 0xD4, 0xBB, 0x5A, 0x92, 0x4E, 0x8E, 0xEB, 0x58,
    0x80, 0x9D, 0xB9, 0x90, 0x56, 0xD4, 0xD7, 0x48, 0x56, 0xD4, 0x40, 0xD7,
    0x5A, 0x71, 0x1C, 0xE9, 0x24, 0xB6, 0xD4, 0xB6, 0xA4, 0x8C, 0x6B, 0x55,
    0x00, 0xB5, 0x5A, 0xB5, 0x24, 0xE5, 0x4E, 0xEA, 0xC0, 0x91, 0x12, 0xD5,
    0xC0, 0x54, 0xF0, 0x90, 0xC7, 0xF0, 0x93, 0x5E, 0x71, 0x80, 0x25, 0xDE,
    0x5E, 0x30, 0x6E, 0x80, 0x77, 0x9C, 0x93, 0x5A, 0xB8, 0x45, 0x60, 0x92,
    0xEA, 0xAA, 0x40, 0xD5, 0x6A, 0xD6, 0x80, 0x55, 0x00, 0xD7, 0x40, 0x75,
    0x90, 0xE8, 0x71, 0xE0, 0xBA, 0x40, 0xB5, 0x80, 0xB5, 0x00, 0x8D, 0x54,
    0xAA, 0x80, 0xAC, 0xE0, 0xE5, 0x70, 0x6A, 0x26, 0xFC, 0xC8, 0xAC, 0x5A,
];

#[rustfmt::skip]
const GLYPHS: [Glyph; 95] = [
    Glyph::new(0, 0, 0, 2, 0, 1),      // ' '
    Glyph::new(0, 1, 5, 2, 0, -4),     // '!'
    Glyph::new(1, 3, 2, 4, 0, -4),     // '"'
    Glyph::new(2, 5, 5, 6, 0, -4),     // '#'
    Glyph::new(6, 3, 6, 4, 0, -4),     // '$'
    Glyph::new(9, 3, 5, 4, 0, -4),     // '%'
    Glyph::new(11, 4, 5, 5, 0, -4),    // '&'
    Glyph::new(14, 1, 2, 2, 0, -4),    // '\''
    Glyph::new(15, 2, 5, 3, 0, -4),    // '('
    Glyph::new(17, 2, 5, 3, 0, -4),    // ')'
    Glyph::new(19, 3, 3, 4, 0, -3),    // '*'
    Glyph::new(21, 3, 3, 4, 0, -3),    // '+'
    Glyph::new(23, 2, 2, 3, 0, 0),     // ','
    Glyph::new(24, 3, 1, 4, 0, -2),    // '-'
    Glyph::new(25, 1, 1, 2, 0, 0),     // '.'
    Glyph::new(26, 3, 5, 4, 0, -4),    // '/'
    Glyph::new(28, 3, 5, 4, 0, -4),    // '0'
    Glyph::new(30, 2, 5, 3, 0, -4),    // '1'
    Glyph::new(32, 3, 5, 4, 0, -4),    // '2'
    Glyph::new(34, 3, 5, 4, 0, -4),    // '3'
    Glyph::new(36, 3, 5, 4, 0, -4),    // '4'
    Glyph::new(38, 3, 5, 4, 0, -4),    // '5'
    Glyph::new(40, 3, 5, 4, 0, -4),    // '6'
    Glyph::new(42, 3, 5, 4, 0, -4),    // '7'
    Glyph::new(44, 3, 5, 4, 0, -4),    // '8'
    Glyph::new(46, 3, 5, 4, 0, -4),    // '9'
    Glyph::new(48, 1, 3, 2, 0, -3),    // ':'
    Glyph::new(49, 2, 4, 3, 0, -3),    // ';'
    Glyph::new(50, 2, 3, 3, 0, -3),    // '<'
    Glyph::new(51, 3, 3, 4, 0, -3),    // '='
    Glyph::new(53, 2, 3, 3, 0, -3),    // '>'
    Glyph::new(54, 3, 5, 4, 0, -4),    // '?'
    Glyph::new(56, 3, 5, 4, 0, -4),    // '@'
    Glyph::new(58, 3, 5, 4, 0, -4),    // 'A'
    Glyph::new(60, 3, 5, 4, 0, -4),    // 'B'
    Glyph::new(62, 3, 5, 4, 0, -4),    // 'C'
    Glyph::new(64, 3, 5, 4, 0, -4),    // 'D'
    Glyph::new(66, 3, 5, 4, 0, -4),    // 'E'
    Glyph::new(68, 3, 5, 4, 0, -4),    // 'F'
    Glyph::new(70, 3, 5, 4, 0, -4),    // 'G'
    Glyph::new(72, 3, 5, 4, 0, -4),    // 'H'
    Glyph::new(74, 1, 5, 2, 0, -4),    // 'I'
    Glyph::new(75, 3, 5, 4, 0, -4),    // 'J'
    Glyph::new(77, 3, 5, 4, 0, -4),    // 'K'
    Glyph::new(79, 3, 5, 4, 0, -4),    // 'L'
    Glyph::new(81, 5, 5, 6, 0, -4),    // 'M'
    Glyph::new(85, 4, 5, 5, 0, -4),    // 'N'
    Glyph::new(88, 3, 5, 4, 0, -4),    // 'O'
    Glyph::new(90, 3, 5, 4, 0, -4),    // 'P'
    Glyph::new(92, 3, 6, 4, 0, -4),    // 'Q'
    Glyph::new(95, 3, 5, 4, 0, -4),    // 'R'
    Glyph::new(97, 3, 5, 4, 0, -4),    // 'S'
    Glyph::new(99, 3, 5, 4, 0, -4),    // 'T'
    Glyph::new(101, 3, 5, 4, 0, -4),   // 'U'
    Glyph::new(103, 3, 5, 4, 0, -4),   // 'V'
    Glyph::new(105, 5, 5, 6, 0, -4),   // 'W'
    Glyph::new(109, 3, 5, 4, 0, -4),   // 'X'
    Glyph::new(111, 3, 5, 4, 0, -4),   // 'Y'
    Glyph::new(113, 3, 5, 4, 0, -4),   // 'Z'
    Glyph::new(115, 2, 5, 3, 0, -4),   // '['
    Glyph::new(117, 3, 5, 4, 0, -4),   // '\\'
    Glyph::new(119, 2, 5, 3, 0, -4),   // ']'
    Glyph::new(121, 3, 2, 4, 0, -4),   // '^'
    Glyph::new(122, 4, 1, 5, 0, 1),    // '_'
    Glyph::new(123, 2, 2, 3, 0, -4),   // '`'
    Glyph::new(124, 3, 4, 4, 0, -3),   // 'a'
    Glyph::new(126, 3, 5, 4, 0, -4),   // 'b'
    Glyph::new(128, 3, 3, 4, 0, -2),   // 'c'
    Glyph::new(130, 3, 5, 4, 0, -4),   // 'd'
    Glyph::new(132, 3, 4, 4, 0, -3),   // 'e'
    Glyph::new(134, 2, 5, 3, 0, -4),   // 'f'
    Glyph::new(136, 3, 5, 4, 0, -2),   // 'g'
    Glyph::new(138, 3, 5, 4, 0, -4),   // 'h'
    Glyph::new(140, 1, 5, 2, 0, -4),   // 'i'
    Glyph::new(141, 2, 5, 3, 0, -3),   // 'j'
    Glyph::new(143, 3, 5, 4, 0, -4),   // 'k'
    Glyph::new(145, 2, 5, 3, 0, -4),   // 'l'
    Glyph::new(147, 5, 3, 6, 0, -2),   // 'm'
    Glyph::new(149, 3, 3, 4, 0, -2),   // 'n'
    Glyph::new(151, 3, 3, 4, 0, -2),   // 'o'
    Glyph::new(153, 3, 4, 4, 0, -2),   // 'p'
    Glyph::new(155, 3, 4, 4, 0, -2),   // 'q'
    Glyph::new(157, 2, 3, 3, 0, -2),   // 'r'
    Glyph::new(158, 3, 4, 4, 0, -3),   // 's'
    Glyph::new(160, 2, 5, 3, 0, -4),   // 't'
    Glyph::new(162, 3, 3, 4, 0, -2),   // 'u'
    Glyph::new(164, 3, 3, 4, 0, -2),   // 'v'
    Glyph::new(166, 5, 3, 6, 0, -2),   // 'w'
    Glyph::new(168, 3, 3, 4, 0, -2),   // 'x'
    Glyph::new(170, 3, 4, 4, 0, -2),   // 'y'
    Glyph::new(172, 3, 4, 4, 0, -3),   // 'z'
    Glyph::new(174, 3, 5, 4, 0, -4),   // '{'
    Glyph::new(176, 1, 6, 2, 0, -4),   // '|'
    Glyph::new(177, 3, 5, 4, 0, -4),   // '}'
    Glyph::new(179, 4, 2, 5, 0, -3),   // '~'
];

/// The Picopixel font: printable ASCII, 7 px line height.
pub fn picopixel() -> BitmapFont {
    BitmapFont {
        bitmap: BITMAP.to_vec(),
        glyphs: GLYPHS.to_vec(),
        first: FIRST,
        last: LAST,
        y_advance: Y_ADVANCE,
        y_offset_correction: Y_OFFSET_CORRECTION,
        cp437: false,
    }
}
