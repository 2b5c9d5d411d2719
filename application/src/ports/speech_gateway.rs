//! Speech gateway port
//!
//! Defines the interface for dispatching transcript lines to an external
//! text-to-speech subtool.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during speech dispatch
///
/// Dispatch failure is always non-fatal to a session: the use case
/// surfaces it as an inline warning and continues.
#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("Speech subtool not available: {0}")]
    SubtoolNotAvailable(String),

    #[error("Failed to invoke speech subtool: {0}")]
    SpawnFailed(String),

    #[error("Speech subtool failed: {0}")]
    SubtoolFailed(String),

    #[error("Speech subtool timed out after {0} seconds")]
    Timeout(u64),
}

/// Gateway for speech synthesis
///
/// Calls are sequential and awaited one at a time; implementations never
/// see overlapping requests from a single session.
#[async_trait]
pub trait SpeechGateway: Send + Sync {
    /// Speak one line of text with the given voice name
    async fn speak(&self, text: &str, voice: &str) -> Result<(), SpeechError>;
}

/// No-op gateway for when voice output is disabled and for tests
pub struct NoSpeech;

#[async_trait]
impl SpeechGateway for NoSpeech {
    async fn speak(&self, _text: &str, _voice: &str) -> Result<(), SpeechError> {
        Ok(())
    }
}
