//! fdwkit CLI library.
//!
//! This module exposes internal types for testing purposes.
//! The main entry point is the `fdwkit` binary.

pub mod cli;
pub mod input;
#[cfg(feature = "tracing")]
pub mod logging;
pub mod output;

// Re-export commonly used types
pub use cli::Args;
