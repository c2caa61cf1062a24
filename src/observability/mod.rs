//! Tracing subscriber setup with optional rotating file output.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Output goes to stderr unless `trace_file` is configured, in which case
//! formatted lines are appended to that file with size-based rotation.
//!
//! # Usage
//!
//! Initialize tracing early, before building the application state:
//!
//! ```
//! use roster::observability::init_tracing;
//! use roster::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("roster initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use file_writer::RotatingFile;
pub use init::{init_tracing, resolve_filter};
