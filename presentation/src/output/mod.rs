//! Console output

pub mod console;
pub mod formatter;

pub use console::ConsoleSink;
pub use formatter::ConsoleFormatter;
