//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording session events
//! (session start, spoken lines, voice failures, session end) to a
//! machine-readable log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures the
//! transcript itself in a structured format (JSONL).

use serde_json::Value;

/// A structured session event for logging.
pub struct SessionEvent {
    /// Event type identifier (e.g., "session_start", "line", "voice_failure").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SessionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging session events to a structured log.
///
/// The `log` method is intentionally synchronous and non-fallible to
/// avoid disrupting the session flow; logging failures are silently
/// ignored by implementations.
pub trait TranscriptLogger: Send + Sync {
    /// Record a session event.
    fn log(&self, event: SessionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: SessionEvent) {}
}
