//! Dialogue script tables
//!
//! All council dialogue is canned: per-persona opening statements,
//! cyclic discussion points, closing statements, and the moderator's
//! framing lines. Content selection is fully deterministic - the same
//! `(persona, round)` pair always yields the same line.

use crate::core::topic::Topic;
use crate::persona::Persona;

/// Static dialogue templates for a council session
pub struct Script;

impl Script {
    /// Moderator line that opens the discussion
    pub fn moderator_welcome(topic: &Topic) -> String {
        format!(
            "Welcome council members. Today we're discussing: \"{}\". Let's begin with opening statements.",
            topic
        )
    }

    /// Round-one statement, interpolating the topic verbatim
    pub fn opening_statement(persona: Persona, topic: &Topic) -> String {
        match persona {
            Persona::ProfessorWisdom => format!(
                "From an academic perspective, \"{}\" presents fascinating implications that we must examine through multiple theoretical lenses.",
                topic
            ),
            Persona::CaptainPractical => format!(
                "Let's cut to the chase. \"{}\" needs concrete action steps and measurable outcomes, not just theory.",
                topic
            ),
            Persona::DrInnovation => format!(
                "How exciting! \"{}\" opens up incredible possibilities for creative solutions and breakthrough thinking!",
                topic
            ),
            Persona::GuardianEthics => format!(
                "We must carefully consider the ethical ramifications and potential risks associated with \"{}\" before proceeding.",
                topic
            ),
            Persona::AmbassadorHarmony => format!(
                "I believe we can find common ground on \"{}\" by understanding each perspective and building consensus together.",
                topic
            ),
            Persona::MaverickChallenge => format!(
                "I'm going to challenge our assumptions here. What if everything we think we know about \"{}\" is wrong?",
                topic
            ),
        }
    }

    /// Middle-round line, cycling through the persona's fixed list
    ///
    /// `round` is the 1-based round number; the first middle round is 2,
    /// so the cycle index is `(round - 2) mod len`. The topic plays no
    /// part in middle rounds.
    pub fn discussion_point(persona: Persona, round: usize) -> &'static str {
        debug_assert!(round >= 2, "discussion points start at round 2");
        let points = Self::discussion_points(persona);
        points[(round - 2) % points.len()]
    }

    fn discussion_points(persona: Persona) -> &'static [&'static str] {
        match persona {
            Persona::ProfessorWisdom => &[
                "Research suggests we should consider the long-term implications...",
                "The data indicates multiple factors at play here...",
                "Historical precedent teaches us that...",
            ],
            Persona::CaptainPractical => &[
                "We need to focus on what actually works...",
                "The bottom line is implementation and results...",
                "Let me propose a concrete action plan...",
            ],
            Persona::DrInnovation => &[
                "What if we approached this completely differently?",
                "I see an opportunity for breakthrough innovation here...",
                "Let's think outside the box and explore new possibilities...",
            ],
            Persona::GuardianEthics => &[
                "We must not overlook the potential consequences...",
                "The ethical considerations here are paramount...",
                "I urge caution and thorough risk assessment...",
            ],
            Persona::AmbassadorHarmony => &[
                "I appreciate everyone's perspectives so far...",
                "Perhaps we can synthesize these viewpoints...",
                "Finding balance between these approaches is key...",
            ],
            Persona::MaverickChallenge => &[
                "I disagree with the prevailing assumption that...",
                "Let me play devil's advocate here...",
                "Why are we accepting this premise without question?",
            ],
        }
    }

    /// Final-round statement; independent of topic and round count
    pub fn closing_statement(persona: Persona) -> &'static str {
        match persona {
            Persona::ProfessorWisdom => {
                "In conclusion, our discussion has revealed the complexity of this issue, requiring thoughtful analysis and measured response."
            }
            Persona::CaptainPractical => {
                "To summarize: we need clear actions, defined timelines, and accountability measures to move forward effectively."
            }
            Persona::DrInnovation => {
                "This has been inspiring! I see tremendous potential for creative solutions that can transform our approach."
            }
            Persona::GuardianEthics => {
                "My final thought: proceed with caution, maintain ethical standards, and carefully monitor outcomes."
            }
            Persona::AmbassadorHarmony => {
                "I believe we've found valuable common ground that can guide us toward a balanced solution."
            }
            Persona::MaverickChallenge => {
                "While consensus is forming, I maintain we should remain skeptical and continue questioning our assumptions."
            }
        }
    }

    /// Moderator consensus line that closes the session
    ///
    /// Names the full catalog even when fewer members were selected;
    /// only the perspective count reflects the actual selection.
    pub fn consensus(topic: &Topic, members: &[Persona]) -> String {
        format!(
            "After thorough discussion, the council has explored \"{}\" from {} distinct perspectives. \
             While complete agreement wasn't reached, key themes emerged: the need for careful analysis (Professor Wisdom), \
             practical implementation (Captain Practical), innovative thinking (Dr. Innovation), \
             ethical consideration (Guardian Ethics), balanced approach (Ambassador Harmony), \
             and critical questioning (Maverick Challenge). The council recommends a multi-faceted approach \
             that incorporates these diverse viewpoints for a comprehensive solution.",
            topic,
            members.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic() -> Topic {
        Topic::try_new("Remote work").unwrap()
    }

    #[test]
    fn test_opening_interpolates_topic() {
        for persona in Persona::catalog() {
            let line = Script::opening_statement(persona, &topic());
            assert!(line.contains("\"Remote work\""), "{}: {}", persona, line);
        }
    }

    #[test]
    fn test_discussion_point_is_deterministic() {
        for persona in Persona::catalog() {
            assert_eq!(
                Script::discussion_point(persona, 3),
                Script::discussion_point(persona, 3)
            );
        }
    }

    #[test]
    fn test_discussion_point_cycles() {
        // Three lines per persona, so rounds 2 and 5 land on the same line
        let p = Persona::ProfessorWisdom;
        assert_eq!(Script::discussion_point(p, 2), Script::discussion_point(p, 5));
        assert_ne!(Script::discussion_point(p, 2), Script::discussion_point(p, 3));
    }

    #[test]
    fn test_closing_is_topic_independent() {
        let line = Script::closing_statement(Persona::GuardianEthics);
        assert!(line.contains("proceed with caution"));
    }

    #[test]
    fn test_consensus_counts_selected_but_names_all_six() {
        let catalog = Persona::catalog();
        let line = Script::consensus(&topic(), &catalog[..3]);
        assert!(line.contains("3 distinct perspectives"));
        for persona in Persona::catalog() {
            assert!(line.contains(persona.display_name()));
        }
    }

    #[test]
    fn test_moderator_welcome_quotes_topic() {
        let line = Script::moderator_welcome(&topic());
        assert!(line.starts_with("Welcome council members."));
        assert!(line.contains("\"Remote work\""));
    }
}
