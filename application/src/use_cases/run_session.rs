//! Run Session use case
//!
//! Orchestrates a full council session: roster, moderated discussion
//! rounds, and the closing consensus, with optional speech dispatch.

use crate::ports::speech_gateway::SpeechGateway;
use crate::ports::transcript_logger::{NoTranscriptLogger, SessionEvent, TranscriptLogger};
use crate::ports::transcript_sink::TranscriptSink;
use council_domain::{Script, SessionParams, SessionReport, Speaker, Transcript};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// Cosmetic pause between persona lines
pub const DEFAULT_LINE_DELAY: Duration = Duration::from_millis(500);

/// Input for the RunSession use case
#[derive(Debug, Clone)]
pub struct RunSessionInput {
    /// Normalized session parameters
    pub params: SessionParams,
    /// Pause after each persona line; pacing only, zero disables it
    pub line_delay: Duration,
}

impl RunSessionInput {
    pub fn new(params: SessionParams) -> Self {
        Self {
            params,
            line_delay: DEFAULT_LINE_DELAY,
        }
    }

    pub fn with_line_delay(mut self, delay: Duration) -> Self {
        self.line_delay = delay;
        self
    }
}

/// Use case for running a council session
///
/// The session itself cannot fail: inputs are normalized up front and
/// speech dispatch failures surface as inline warnings without touching
/// the transcript.
pub struct RunSessionUseCase<G: SpeechGateway + 'static> {
    gateway: Arc<G>,
    logger: Arc<dyn TranscriptLogger>,
}

impl<G: SpeechGateway + 'static> RunSessionUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            logger: Arc::new(NoTranscriptLogger),
        }
    }

    /// Attach a structured transcript logger
    pub fn with_logger(mut self, logger: Arc<dyn TranscriptLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the session, streaming output to `sink`
    pub async fn execute(
        &self,
        input: RunSessionInput,
        sink: &mut dyn TranscriptSink,
    ) -> SessionReport {
        let params = &input.params;
        let members = params.selected_personas();

        info!(
            "Starting council session: {} members, {} rounds",
            members.len(),
            params.rounds()
        );
        self.logger.log(SessionEvent::new(
            "session_start",
            json!({
                "topic": params.topic().content(),
                "members": members.len(),
                "rounds": params.rounds(),
                "voice": params.voice_enabled(),
            }),
        ));

        sink.section("Council Session");
        sink.line(&format!("Topic: \"{}\"", params.topic()));
        sink.line(&format!("Council Members: {}", members.len()));
        sink.line(&format!("Discussion Rounds: {}", params.rounds()));
        sink.line(&format!(
            "Voice Output: {}",
            if params.voice_enabled() {
                "Enabled"
            } else {
                "Disabled"
            }
        ));
        sink.blank();

        sink.section("Council Members");
        for persona in &members {
            sink.line(&format!(
                "  * {} - {} ({})",
                persona.display_name(),
                persona.personality(),
                persona.perspective()
            ));
        }
        sink.blank();

        let mut transcript = Transcript::new();

        sink.section("Council Discussion");
        self.speak(
            params,
            &mut transcript,
            sink,
            Speaker::Moderator,
            Script::moderator_welcome(params.topic()),
        )
        .await;

        for round in 1..=params.rounds() {
            debug!("Round {} of {}", round, params.rounds());
            sink.line(&format!("--- Round {} ---", round));

            for &persona in &members {
                // Round 1 always opens, even when it is also the last
                // round; closing statements need at least two rounds.
                let message = if round == 1 {
                    Script::opening_statement(persona, params.topic())
                } else if round == params.rounds() {
                    Script::closing_statement(persona).to_string()
                } else {
                    Script::discussion_point(persona, round).to_string()
                };

                self.speak(params, &mut transcript, sink, Speaker::Member(persona), message)
                    .await;

                if !input.line_delay.is_zero() {
                    sleep(input.line_delay).await;
                }
            }
        }

        sink.section("Council Consensus");
        let consensus = Script::consensus(params.topic(), &members);
        self.speak(params, &mut transcript, sink, Speaker::Moderator, consensus)
            .await;

        let report = SessionReport::new(params, transcript.len());
        self.logger.log(SessionEvent::new(
            "session_end",
            json!({ "transcript_len": report.transcript_len }),
        ));
        report
    }

    /// Record a line, write it to the sink, and optionally dispatch it
    /// to speech synthesis. Dispatch failure is non-fatal.
    async fn speak(
        &self,
        params: &SessionParams,
        transcript: &mut Transcript,
        sink: &mut dyn TranscriptSink,
        speaker: Speaker,
        message: String,
    ) {
        transcript.record(speaker, message.clone());
        sink.line(&format!("{}: {}", speaker, message));
        sink.blank();
        self.logger.log(SessionEvent::new(
            "line",
            json!({
                "speaker": speaker.display_name(),
                "message": message,
            }),
        ));

        if params.voice_enabled() {
            let voice = speaker.voice_name();
            if let Err(e) = self.gateway.speak(&message, voice).await {
                warn!("Voice dispatch failed for {}: {}", speaker, e);
                sink.warn(&format!("Voice output failed: {}", e));
                self.logger.log(SessionEvent::new(
                    "voice_failure",
                    json!({
                        "speaker": speaker.display_name(),
                        "error": e.to_string(),
                    }),
                ));
            }
        }
    }
}
