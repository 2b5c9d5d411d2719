//! Session parameters and result values

use crate::core::topic::Topic;
use crate::persona::Persona;
use serde::Serialize;

/// Smallest council the session will run with
pub const MIN_MEMBERS: usize = 2;
/// Size of the persona catalog, and thus the largest council
pub const MAX_MEMBERS: usize = 6;

/// Default council size when the caller does not specify one
pub const DEFAULT_MEMBERS: usize = 4;
/// Default number of discussion rounds
pub const DEFAULT_ROUNDS: usize = 3;

/// Immutable parameters for a single council session
///
/// All inputs are defensively normalized rather than rejected: member
/// counts clamp into `[MIN_MEMBERS, MAX_MEMBERS]` and round counts are
/// raised to at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionParams {
    topic: Topic,
    members: usize,
    rounds: usize,
    voice_enabled: bool,
}

impl SessionParams {
    pub fn new(topic: Topic) -> Self {
        Self {
            topic,
            members: DEFAULT_MEMBERS,
            rounds: DEFAULT_ROUNDS,
            voice_enabled: true,
        }
    }

    /// Set the requested member count, clamped into `[2, 6]`
    pub fn with_members(mut self, requested: usize) -> Self {
        self.members = requested.clamp(MIN_MEMBERS, MAX_MEMBERS);
        self
    }

    /// Set the round count, raised to at least 1
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds.max(1);
        self
    }

    pub fn with_voice(mut self, enabled: bool) -> Self {
        self.voice_enabled = enabled;
        self
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn members(&self) -> usize {
        self.members
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn voice_enabled(&self) -> bool {
        self.voice_enabled
    }

    /// The personas seated for this session: a prefix of the catalog
    pub fn selected_personas(&self) -> Vec<Persona> {
        Persona::catalog()[..self.members].to_vec()
    }
}

/// Aggregate success data returned by a completed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionReport {
    pub topic: String,
    pub members: usize,
    pub rounds: usize,
    pub transcript_len: usize,
}

impl SessionReport {
    pub fn new(params: &SessionParams, transcript_len: usize) -> Self {
        Self {
            topic: params.topic().content().to_string(),
            members: params.members(),
            rounds: params.rounds(),
            transcript_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic() -> Topic {
        Topic::try_new("AI ethics").unwrap()
    }

    #[test]
    fn test_defaults() {
        let params = SessionParams::new(topic());
        assert_eq!(params.members(), 4);
        assert_eq!(params.rounds(), 3);
        assert!(params.voice_enabled());
    }

    #[test]
    fn test_member_clamping() {
        assert_eq!(SessionParams::new(topic()).with_members(0).members(), 2);
        assert_eq!(SessionParams::new(topic()).with_members(1).members(), 2);
        assert_eq!(SessionParams::new(topic()).with_members(3).members(), 3);
        assert_eq!(SessionParams::new(topic()).with_members(6).members(), 6);
        assert_eq!(SessionParams::new(topic()).with_members(99).members(), 6);
    }

    #[test]
    fn test_rounds_floor_at_one() {
        assert_eq!(SessionParams::new(topic()).with_rounds(0).rounds(), 1);
        assert_eq!(SessionParams::new(topic()).with_rounds(5).rounds(), 5);
    }

    #[test]
    fn test_selected_personas_are_catalog_prefix() {
        let params = SessionParams::new(topic()).with_members(3);
        let selected = params.selected_personas();
        assert_eq!(selected, Persona::catalog()[..3].to_vec());
    }

    #[test]
    fn test_report_carries_resolved_values() {
        let params = SessionParams::new(topic()).with_members(1).with_rounds(2);
        let report = SessionReport::new(&params, 6);
        assert_eq!(report.members, 2);
        assert_eq!(report.rounds, 2);
        assert_eq!(report.transcript_len, 6);
        assert_eq!(report.topic, "AI ethics");
    }
}
