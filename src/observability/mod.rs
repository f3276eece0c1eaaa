//! File-based logging for the dashboard.
//!
//! This module wires the `tracing` macros used throughout the crate to a
//! rotating log file. Because stdout is owned by the ANSI renderer, logs
//! never go to the terminal.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → stackdash.log
//! ```
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `--trace-level` command line flag
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Tracing initialization and subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
