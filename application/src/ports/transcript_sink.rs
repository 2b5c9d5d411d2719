//! Transcript sink port
//!
//! The sink is the human-readable output surface of a session: section
//! headers, dialogue lines, and inline warnings. Implementations live in
//! the presentation layer.

/// Output surface for session text
pub trait TranscriptSink: Send {
    /// Start a named output section
    fn section(&mut self, title: &str);

    /// Write one line of text
    fn line(&mut self, text: &str);

    /// Write an inline, non-fatal warning
    fn warn(&mut self, text: &str);

    /// Write an empty line
    fn blank(&mut self) {
        self.line("");
    }
}

/// Sink that collects output into memory, for tests and quiet callers
#[derive(Debug, Default)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl TranscriptSink for BufferSink {
    fn section(&mut self, title: &str) {
        self.lines.push(format!("== {} ==", title));
    }

    fn line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn warn(&mut self, text: &str) {
        self.lines.push(format!("[{}]", text));
    }
}
