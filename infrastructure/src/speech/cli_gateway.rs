//! Speech gateway backed by an external TTS command
//!
//! Each transcript line becomes one subtool invocation. The subtool's
//! calling convention is configurable: plain flags or a JSON payload on
//! stdin, matching whichever shape the host environment defines.

use crate::config::file_config::{FileSpeechConfig, SpeechConvention};
use async_trait::async_trait;
use council_application::ports::speech_gateway::{SpeechError, SpeechGateway};
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Speech gateway that shells out to a TTS subtool per line
pub struct TtsCliGateway {
    command: String,
    convention: SpeechConvention,
    timeout: Duration,
}

impl TtsCliGateway {
    /// Create a gateway, verifying the subtool binary is on PATH
    pub fn new(config: &FileSpeechConfig) -> Result<Self, SpeechError> {
        which::which(&config.command)
            .map_err(|_| SpeechError::SubtoolNotAvailable(config.command.clone()))?;

        Ok(Self {
            command: config.command.clone(),
            convention: config.convention,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// The configured subtool command
    pub fn command(&self) -> &str {
        &self.command
    }
}

#[async_trait]
impl SpeechGateway for TtsCliGateway {
    async fn speak(&self, text: &str, voice: &str) -> Result<(), SpeechError> {
        debug!("Dispatching line to {} (voice: {})", self.command, voice);

        let mut cmd = Command::new(&self.command);
        cmd.stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        match self.convention {
            SpeechConvention::Flags => {
                cmd.arg("--voice").arg(voice).arg(text);
                cmd.stdin(Stdio::null());
            }
            SpeechConvention::Json => {
                cmd.stdin(Stdio::piped());
            }
        }

        let mut child = cmd
            .spawn()
            .map_err(|e| SpeechError::SpawnFailed(e.to_string()))?;

        if self.convention == SpeechConvention::Json {
            if let Some(mut stdin) = child.stdin.take() {
                let payload = serde_json::json!({
                    "action": "speak",
                    "text": text,
                    "voice": voice,
                });
                stdin
                    .write_all(payload.to_string().as_bytes())
                    .await
                    .map_err(|e| SpeechError::SpawnFailed(e.to_string()))?;
                // Dropping stdin closes the pipe so the subtool sees EOF
            }
        }

        let output = match timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| SpeechError::SpawnFailed(e.to_string()))?,
            Err(_) => return Err(SpeechError::Timeout(self.timeout.as_secs())),
        };

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let detail = if stderr.trim().is_empty() {
                format!("exit code {}", output.status.code().unwrap_or(-1))
            } else {
                stderr.trim().to_string()
            };
            Err(SpeechError::SubtoolFailed(detail))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(command: &str, convention: SpeechConvention) -> FileSpeechConfig {
        FileSpeechConfig {
            command: command.to_string(),
            convention,
            timeout_secs: 5,
            line_delay_ms: 0,
        }
    }

    #[test]
    fn test_new_rejects_missing_binary() {
        let result = TtsCliGateway::new(&config(
            "definitely-not-a-real-tts-tool",
            SpeechConvention::Flags,
        ));
        assert!(matches!(result, Err(SpeechError::SubtoolNotAvailable(_))));
    }

    #[tokio::test]
    async fn test_flags_convention_success() {
        let gateway = TtsCliGateway::new(&config("true", SpeechConvention::Flags)).unwrap();
        gateway.speak("Hello council", "James").await.unwrap();
    }

    #[tokio::test]
    async fn test_nonzero_exit_maps_to_subtool_failed() {
        let gateway = TtsCliGateway::new(&config("false", SpeechConvention::Flags)).unwrap();
        let err = gateway.speak("Hello council", "James").await.unwrap_err();
        assert!(matches!(err, SpeechError::SubtoolFailed(_)));
    }

    #[tokio::test]
    async fn test_json_convention_writes_stdin() {
        // `cat` consumes the JSON payload and exits 0 on EOF
        let gateway = TtsCliGateway::new(&config("cat", SpeechConvention::Json)).unwrap();
        gateway.speak("Hello council", "Emily").await.unwrap();
    }
}
