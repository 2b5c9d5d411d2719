//! Configuration file schema (`council.toml`)
//!
//! Example configuration:
//!
//! ```toml
//! [session]
//! members = 4
//! rounds = 3
//! voice = true
//!
//! [speech]
//! command = "elevenlabs-tts"
//! convention = "flags"       # or "json"
//! timeout_secs = 30
//! line_delay_ms = 500
//!
//! [log]
//! enabled = false
//! dir = "~/council-logs"
//! ```

use council_domain::{DEFAULT_MEMBERS, DEFAULT_ROUNDS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration file structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub session: FileSessionConfig,
    pub speech: FileSpeechConfig,
    pub log: FileLogConfig,
}

/// Session defaults from TOML (`[session]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Default council size (clamped to [2, 6] at session build time)
    pub members: usize,
    /// Default number of discussion rounds
    pub rounds: usize,
    /// Whether voice output is enabled by default
    pub voice: bool,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            members: DEFAULT_MEMBERS,
            rounds: DEFAULT_ROUNDS,
            voice: true,
        }
    }
}

/// How the speech subtool expects its request
///
/// Host environments differ in the call shape they define for the
/// subtool; both carry the same (text, voice) payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechConvention {
    /// `<command> --voice <VOICE> <TEXT>`
    Flags,
    /// JSON payload `{"action":"speak","text":…,"voice":…}` on stdin
    Json,
}

/// Speech subtool configuration from TOML (`[speech]` section)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSpeechConfig {
    /// Subtool binary to invoke per line
    pub command: String,
    /// Calling convention the subtool expects
    pub convention: SpeechConvention,
    /// Per-line dispatch timeout
    pub timeout_secs: u64,
    /// Cosmetic pause between persona lines, in milliseconds
    pub line_delay_ms: u64,
}

impl Default for FileSpeechConfig {
    fn default() -> Self {
        Self {
            command: "elevenlabs-tts".to_string(),
            convention: SpeechConvention::Flags,
            timeout_secs: 30,
            line_delay_ms: 500,
        }
    }
}

/// Transcript logging configuration from TOML (`[log]` section)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Write a JSONL transcript log for each session
    pub enabled: bool,
    /// Directory for transcript logs (current directory if unset)
    pub dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert_eq!(config.session.members, 4);
        assert_eq!(config.session.rounds, 3);
        assert!(config.session.voice);
        assert_eq!(config.speech.command, "elevenlabs-tts");
        assert_eq!(config.speech.convention, SpeechConvention::Flags);
        assert_eq!(config.speech.line_delay_ms, 500);
        assert!(!config.log.enabled);
    }

    #[test]
    fn test_deserialize_partial_file() {
        let toml_str = r#"
[session]
members = 3
voice = false

[speech]
command = "say"
convention = "json"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.members, 3);
        assert!(!config.session.voice);
        // Unspecified fields keep their defaults
        assert_eq!(config.session.rounds, 3);
        assert_eq!(config.speech.command, "say");
        assert_eq!(config.speech.convention, SpeechConvention::Json);
        assert_eq!(config.speech.timeout_secs, 30);
    }

    #[test]
    fn test_log_section() {
        let toml_str = r#"
[log]
enabled = true
dir = "/tmp/council"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.log.enabled);
        assert_eq!(config.log.dir, Some(PathBuf::from("/tmp/council")));
    }
}
