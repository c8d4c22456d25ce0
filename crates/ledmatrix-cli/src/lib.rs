//! ledmatrix CLI library.
//!
//! Command implementations and the stderr logger used by the `ledmatrix`
//! binary. Each command builds a canvas, draws into it and prints the frame.

pub mod commands;
pub mod logging;
