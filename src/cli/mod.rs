//! CLI command definitions and argument parsing.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

/// Exit code for a load that ended in the error state.
pub const EXIT_LOAD_FAILED: i32 = 2;

/// Exit code for a load interrupted by Ctrl-C.
pub const EXIT_INTERRUPTED: i32 = 130;
