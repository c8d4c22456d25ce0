//! ledmatrix CLI - preview LED matrix frames in the terminal
//!
//! Draws text or a demo frame onto a software canvas and prints it as text
//! art, truecolor blocks, or JSON.

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use ledmatrix_cli::commands::{self, text::TextArgs, FrameOptions};
use ledmatrix_cli::logging;

/// ledmatrix - software framebuffer preview
#[derive(Parser)]
#[command(name = "ledmatrix")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render text with the bundled Picopixel font
    Text {
        /// Text to render ("\n" starts a new line)
        text: String,

        /// Text color (#rrggbb, #rgb or 0xRRGGBB)
        #[arg(short, long, default_value = "#ff0000")]
        color: String,

        /// Scale factor (1 = native size)
        #[arg(short, long, default_value_t = 1)]
        size: u32,

        /// Left edge of the first line
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        x: i32,

        /// Top edge of the first line
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        y: i32,

        #[command(flatten)]
        frame: FrameArgs,
    },

    /// Draw a demo frame with every primitive
    Shapes {
        /// Drawing color (#rrggbb, #rgb or 0xRRGGBB)
        #[arg(short, long, default_value = "#00ff00")]
        color: String,

        #[command(flatten)]
        frame: FrameArgs,
    },
}

#[derive(Args)]
struct FrameArgs {
    /// Canvas width in pixels
    #[arg(long, default_value_t = 32)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 16)]
    height: u32,

    /// Output the matrix as JSON
    #[arg(long)]
    json: bool,

    /// Paint lit cells in their color (truecolor terminal)
    #[arg(long)]
    color_output: bool,
}

impl From<FrameArgs> for FrameOptions {
    fn from(args: FrameArgs) -> Self {
        Self {
            width: args.width,
            height: args.height,
            json: args.json,
            color_output: args.color_output,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: {}", "warning".yellow(), e);
    }

    let result = match cli.command {
        Commands::Text {
            text,
            color,
            size,
            x,
            y,
            frame,
        } => commands::text::run(
            &TextArgs {
                text,
                color,
                size,
                x,
                y,
            },
            &frame.into(),
        ),
        Commands::Shapes { color, frame } => commands::shapes::run(&color, &frame.into()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red(), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_text() {
        let cli = Cli::try_parse_from([
            "ledmatrix", "text", "12:34", "--color", "#00f", "--size", "2", "-x", "-3",
            "--width", "64", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Text {
                text,
                color,
                size,
                x,
                y,
                frame,
            } => {
                assert_eq!(text, "12:34");
                assert_eq!(color, "#00f");
                assert_eq!(size, 2);
                assert_eq!(x, -3);
                assert_eq!(y, 0);
                let options = FrameOptions::from(frame);
                assert_eq!(options.width, 64);
                assert_eq!(options.height, 16);
                assert!(options.json);
                assert!(!options.color_output);
            }
            _ => panic!("expected text command"),
        }
    }

    #[test]
    fn test_cli_parses_shapes_defaults() {
        let cli = Cli::try_parse_from(["ledmatrix", "shapes", "--verbose"]).unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Shapes { color, frame } => {
                assert_eq!(color, "#00ff00");
                assert_eq!(
                    FrameOptions::from(frame),
                    FrameOptions {
                        width: 32,
                        height: 16,
                        json: false,
                        color_output: false,
                    }
                );
            }
            _ => panic!("expected shapes command"),
        }
    }

    #[test]
    fn test_cli_requires_text() {
        assert!(Cli::try_parse_from(["ledmatrix", "text"]).is_err());
    }
}
