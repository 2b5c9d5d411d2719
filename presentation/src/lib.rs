//! Presentation layer for persona-council
//!
//! CLI argument definitions and console output.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::{console::ConsoleSink, formatter::ConsoleFormatter};
