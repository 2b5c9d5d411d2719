//! Persona catalog
//!
//! The council draws its speakers from a fixed, ordered catalog of six
//! personas. Personas are a closed enum rather than string-keyed records
//! so that every dialogue lookup is an exhaustive `match` - renaming a
//! display name can never silently fall through to a generic line.

pub mod voice;

pub use voice::VoiceStyle;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A fixed speaking role on the council (Value Object)
///
/// The catalog order is part of the contract: member selection takes a
/// prefix of [`Persona::catalog`], never a rotation or a random sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    ProfessorWisdom,
    CaptainPractical,
    DrInnovation,
    GuardianEthics,
    AmbassadorHarmony,
    MaverickChallenge,
}

impl Persona {
    /// The full ordered catalog. Selection always takes a prefix of this.
    pub const fn catalog() -> [Persona; 6] {
        [
            Persona::ProfessorWisdom,
            Persona::CaptainPractical,
            Persona::DrInnovation,
            Persona::GuardianEthics,
            Persona::AmbassadorHarmony,
            Persona::MaverickChallenge,
        ]
    }

    /// Human-readable name used in transcripts and roster listings
    pub fn display_name(&self) -> &'static str {
        match self {
            Persona::ProfessorWisdom => "Professor Wisdom",
            Persona::CaptainPractical => "Captain Practical",
            Persona::DrInnovation => "Dr. Innovation",
            Persona::GuardianEthics => "Guardian Ethics",
            Persona::AmbassadorHarmony => "Ambassador Harmony",
            Persona::MaverickChallenge => "Maverick Challenge",
        }
    }

    /// Short personality blurb for the roster listing
    pub fn personality(&self) -> &'static str {
        match self {
            Persona::ProfessorWisdom => "wise and thoughtful",
            Persona::CaptainPractical => "pragmatic and direct",
            Persona::DrInnovation => "creative and enthusiastic",
            Persona::GuardianEthics => "cautious and principled",
            Persona::AmbassadorHarmony => "diplomatic and empathetic",
            Persona::MaverickChallenge => "contrarian and provocative",
        }
    }

    /// The viewpoint this persona brings to a discussion
    pub fn perspective(&self) -> &'static str {
        match self {
            Persona::ProfessorWisdom => "analytical and academic",
            Persona::CaptainPractical => "results-oriented and efficient",
            Persona::DrInnovation => "innovative and forward-thinking",
            Persona::GuardianEthics => "ethical and risk-aware",
            Persona::AmbassadorHarmony => "balanced and consensus-seeking",
            Persona::MaverickChallenge => "challenging assumptions and status quo",
        }
    }

    /// The voice style used when lines are dispatched to speech synthesis
    pub fn voice_style(&self) -> VoiceStyle {
        match self {
            Persona::ProfessorWisdom => VoiceStyle::Mature,
            Persona::CaptainPractical => VoiceStyle::Confident,
            Persona::DrInnovation => VoiceStyle::Energetic,
            Persona::GuardianEthics => VoiceStyle::Calm,
            Persona::AmbassadorHarmony => VoiceStyle::Soothing,
            Persona::MaverickChallenge => VoiceStyle::Bold,
        }
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl Serialize for Persona {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for Persona {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Persona::catalog()
            .into_iter()
            .find(|p| p.display_name() == s)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown persona: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_is_fixed() {
        let catalog = Persona::catalog();
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog[0], Persona::ProfessorWisdom);
        assert_eq!(catalog[5], Persona::MaverickChallenge);
    }

    #[test]
    fn test_display_names_are_unique() {
        let names: std::collections::HashSet<_> = Persona::catalog()
            .into_iter()
            .map(|p| p.display_name())
            .collect();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_voice_styles_are_distinct() {
        let styles: std::collections::HashSet<_> =
            Persona::catalog().into_iter().map(|p| p.voice_style()).collect();
        assert_eq!(styles.len(), 6);
    }

    #[test]
    fn test_serde_roundtrip() {
        for persona in Persona::catalog() {
            let json = serde_json::to_string(&persona).unwrap();
            let back: Persona = serde_json::from_str(&json).unwrap();
            assert_eq!(persona, back);
        }
    }

    #[test]
    fn test_deserialize_unknown_name_fails() {
        let result: Result<Persona, _> = serde_json::from_str("\"Professor Chaos\"");
        assert!(result.is_err());
    }
}
