//! Console transcript sink

use colored::Colorize;
use council_application::ports::transcript_sink::TranscriptSink;

/// Writes session output to stdout with colored section headers
///
/// Dialogue always prints; `quiet` only trims the decorative rules
/// around section titles.
pub struct ConsoleSink {
    quiet: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptSink for ConsoleSink {
    fn section(&mut self, title: &str) {
        if self.quiet {
            println!("{}", title.cyan().bold());
        } else {
            println!();
            println!("{}", title.cyan().bold());
            println!("{}", "-".repeat(40).cyan());
        }
    }

    fn line(&mut self, text: &str) {
        println!("{}", text);
    }

    fn warn(&mut self, text: &str) {
        println!("{}", format!("[{}]", text).yellow());
    }
}
