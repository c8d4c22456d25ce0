//! Shapes command implementation
//!
//! Draws a fixed demo frame that exercises every primitive. The layout is
//! sized for the default 32x16 canvas; other sizes simply clip.

use anyhow::Result;
use colored::Colorize;
use ledmatrix::{Canvas, Rgba};
use std::process::ExitCode;

use super::{parse_color, print_frame, FrameOptions};

/// 7x6 heart, one byte per row.
const HEART: [u8; 6] = [
    0b0110_1100,
    0b1111_1110,
    0b1111_1110,
    0b0111_1100,
    0b0011_1000,
    0b0001_0000,
];

/// Draw the demo frame.
pub fn draw_demo(canvas: &mut Canvas, color: Rgba) {
    let w = canvas.width() as i32;
    let h = canvas.height() as i32;

    canvas.draw_rect(0, 0, w, h, color);

    // Top row: filled square, outlined and filled rounded rects, sprite
    canvas.fill_rect(2, 2, 4, 4, color);
    canvas.draw_round_rect(7, 2, 9, 6, 2, color);
    canvas.fill_round_rect(17, 2, 6, 6, 2, color);
    canvas.draw_bitmap(24, 2, &HEART, 7, 6, color);

    // Bottom row: circles and triangles
    canvas.draw_circle(5, 11, 3, color);
    canvas.fill_circle(13, 11, 3, color);
    canvas.draw_triangle(18, 14, 21, 8, 24, 14, color);
    canvas.fill_triangle(25, 14, 27, 8, 30, 14, color);
}

/// Run the shapes command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(color: &str, options: &FrameOptions) -> Result<ExitCode> {
    let color = parse_color(color)?;
    let mut canvas = options.canvas()?;
    draw_demo(&mut canvas, color);
    print_frame(&canvas, options)?;

    if !options.json {
        eprintln!(
            "{} Drew demo frame ({} pixels lit)",
            "SUCCESS".green().bold(),
            canvas.matrix().lit_count()
        );
    }

    Ok(ExitCode::SUCCESS)
}
