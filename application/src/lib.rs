//! Application layer for persona-council
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    speech_gateway::{NoSpeech, SpeechError, SpeechGateway},
    transcript_logger::{NoTranscriptLogger, SessionEvent, TranscriptLogger},
    transcript_sink::{BufferSink, TranscriptSink},
};
pub use use_cases::run_session::{RunSessionInput, RunSessionUseCase, DEFAULT_LINE_DELAY};
