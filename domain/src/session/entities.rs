//! Transcript entities
//!
//! The transcript is the append-only record of everything spoken during
//! a session. It is only ever written by the single session control flow.

use crate::persona::Persona;
use crate::persona::voice::VoiceStyle;
use serde::{Serialize, Serializer};

/// Who delivers a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    /// Non-persona role framing the discussion
    Moderator,
    /// A selected council member
    Member(Persona),
}

impl Speaker {
    /// Display name as it appears in the transcript
    pub fn display_name(&self) -> &'static str {
        match self {
            Speaker::Moderator => "Moderator",
            Speaker::Member(persona) => persona.display_name(),
        }
    }

    /// Voice name used when the line is dispatched to speech synthesis
    ///
    /// The moderator has no persona style and gets the default voice.
    pub fn voice_name(&self) -> &'static str {
        match self {
            Speaker::Moderator => VoiceStyle::DEFAULT_VOICE,
            Speaker::Member(persona) => persona.voice_style().voice_name(),
        }
    }
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Serialize for Speaker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.display_name())
    }
}

/// A single spoken line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub speaker: Speaker,
    pub message: String,
}

/// Append-only record of a session's spoken lines
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a spoken line
    pub fn record(&mut self, speaker: Speaker, message: impl Into<String>) {
        self.entries.push(TranscriptEntry {
            speaker,
            message: message.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moderator_uses_default_voice() {
        assert_eq!(Speaker::Moderator.voice_name(), "Clanker");
    }

    #[test]
    fn test_member_voice_resolution() {
        let speaker = Speaker::Member(Persona::AmbassadorHarmony);
        assert_eq!(speaker.voice_name(), "Emily");
        assert_eq!(speaker.display_name(), "Ambassador Harmony");
    }

    #[test]
    fn test_transcript_records_in_order() {
        let mut transcript = Transcript::new();
        transcript.record(Speaker::Moderator, "Welcome");
        transcript.record(Speaker::Member(Persona::ProfessorWisdom), "Indeed");

        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.entries()[0].speaker, Speaker::Moderator);
        assert_eq!(transcript.entries()[1].message, "Indeed");
    }

    #[test]
    fn test_speaker_serializes_as_display_name() {
        let json = serde_json::to_string(&Speaker::Member(Persona::DrInnovation)).unwrap();
        assert_eq!(json, "\"Dr. Innovation\"");
    }
}
