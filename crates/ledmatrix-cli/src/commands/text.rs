//! Text command implementation
//!
//! Renders a string with the bundled Picopixel font.

use anyhow::Result;
use colored::Colorize;
use ledmatrix::{picopixel, Canvas, Font};
use log::debug;
use std::process::ExitCode;

use super::{parse_color, print_frame, FrameOptions};

/// Placement and style of the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextArgs {
    pub text: String,
    pub color: String,
    pub size: u32,
    pub x: i32,
    pub y: i32,
}

/// Draw `args.text` onto a fresh canvas.
pub fn draw(args: &TextArgs, options: &FrameOptions) -> Result<Canvas> {
    let color = parse_color(&args.color)?;
    let mut canvas = options.canvas()?;
    // Shell users type "\n" literally; treat it as a line break
    let text = args.text.replace("\\n", "\n");

    debug!(
        "writing {:?} at ({}, {}) size {} in {}",
        text, args.x, args.y, args.size, color
    );
    canvas.write(args.x, args.y, &text, &Font::from(picopixel()), args.size, color);
    Ok(canvas)
}

/// Run the text command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(args: &TextArgs, options: &FrameOptions) -> Result<ExitCode> {
    let canvas = draw(args, options)?;
    print_frame(&canvas, options)?;

    if !options.json {
        let lit = canvas.matrix().lit_count();
        if lit == 0 {
            eprintln!(
                "{} Nothing visible on a {}x{} canvas",
                "WARNING".yellow().bold(),
                options.width,
                options.height
            );
        } else {
            eprintln!("{} {} pixels lit", "SUCCESS".green().bold(), lit);
        }
    }

    Ok(ExitCode::SUCCESS)
}
