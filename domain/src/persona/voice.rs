//! Voice style value object
//!
//! Maps each persona's delivery style to a named voice in the external
//! speech subtool. The mapping is closed; anything without a persona
//! (i.e. the moderator) speaks with [`VoiceStyle::DEFAULT_VOICE`].

use serde::{Deserialize, Serialize};

/// Delivery style for speech synthesis (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoiceStyle {
    Mature,
    Confident,
    Energetic,
    Calm,
    Soothing,
    Bold,
}

impl VoiceStyle {
    /// Voice used for speakers without a persona-specific style
    pub const DEFAULT_VOICE: &'static str = "Clanker";

    /// Resolve this style to the subtool's voice name
    pub fn voice_name(&self) -> &'static str {
        match self {
            VoiceStyle::Mature => "James",
            VoiceStyle::Confident => "Josh",
            VoiceStyle::Energetic => "Adam",
            VoiceStyle::Calm => "Daniel",
            VoiceStyle::Soothing => "Emily",
            VoiceStyle::Bold => "Patrick",
        }
    }

    /// The style identifier as it appears in persona descriptions
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceStyle::Mature => "mature",
            VoiceStyle::Confident => "confident",
            VoiceStyle::Energetic => "energetic",
            VoiceStyle::Calm => "calm",
            VoiceStyle::Soothing => "soothing",
            VoiceStyle::Bold => "bold",
        }
    }
}

impl std::fmt::Display for VoiceStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_voice_mapping() {
        assert_eq!(VoiceStyle::Mature.voice_name(), "James");
        assert_eq!(VoiceStyle::Confident.voice_name(), "Josh");
        assert_eq!(VoiceStyle::Energetic.voice_name(), "Adam");
        assert_eq!(VoiceStyle::Calm.voice_name(), "Daniel");
        assert_eq!(VoiceStyle::Soothing.voice_name(), "Emily");
        assert_eq!(VoiceStyle::Bold.voice_name(), "Patrick");
    }

    #[test]
    fn test_default_voice() {
        assert_eq!(VoiceStyle::DEFAULT_VOICE, "Clanker");
    }
}
