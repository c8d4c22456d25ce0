//! CLI command implementations

pub mod shapes;
pub mod text;

use anyhow::{Context, Result};
use colored::Colorize;
use ledmatrix::{normalize, Canvas, Matrix, Rgba};

/// Canvas and output settings shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOptions {
    pub width: u32,
    pub height: u32,
    /// Print the matrix as JSON instead of text art.
    pub json: bool,
    /// Paint lit cells in their own color (truecolor terminals).
    pub color_output: bool,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            width: 32,
            height: 16,
            json: false,
            color_output: false,
        }
    }
}

impl FrameOptions {
    /// Blank canvas of the configured size.
    pub fn canvas(&self) -> Result<Canvas> {
        Canvas::new(self.width, self.height)
            .with_context(|| format!("Cannot create a {}x{} canvas", self.width, self.height))
    }
}

/// Parse a color argument: hex notation, or a `0x`-prefixed numeric code.
pub fn parse_color(input: &str) -> Result<Rgba> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) => {
            let code = u32::from_str_radix(digits, 16)
                .with_context(|| format!("Invalid color code: {}", input))?;
            normalize(code)
        }
        None => normalize(trimmed),
    };
    parsed.with_context(|| format!("Invalid color: {}", input))
}

/// Render a frame for the terminal.
pub fn render_frame(matrix: &Matrix, options: &FrameOptions) -> Result<String> {
    if options.json {
        return serde_json::to_string_pretty(matrix).context("Failed to serialize matrix");
    }
    if !options.color_output {
        return Ok(matrix.to_ascii());
    }

    let rows: Vec<String> = matrix
        .rows()
        .map(|row| {
            row.iter()
                .map(|pixel| match pixel.color() {
                    Some(color) => {
                        let [r, g, b] = color.to_rgb8();
                        "█".truecolor(r, g, b).to_string()
                    }
                    None => " ".to_string(),
                })
                .collect()
        })
        .collect();
    Ok(rows.join("\n"))
}

/// Print a finished frame to stdout.
pub(crate) fn print_frame(canvas: &Canvas, options: &FrameOptions) -> Result<()> {
    let frame = render_frame(canvas.matrix(), options)?;
    println!("{}", frame);
    Ok(())
}
