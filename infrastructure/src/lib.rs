//! Infrastructure layer for persona-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod speech;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileLogConfig, FileSessionConfig, FileSpeechConfig, SpeechConvention,
};
pub use logging::JsonlTranscriptLogger;
pub use speech::TtsCliGateway;
