//! CLI entrypoint for persona-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{bail, Result};
use clap::Parser;
use council_application::{
    NoSpeech, NoTranscriptLogger, RunSessionInput, RunSessionUseCase, SpeechGateway,
    TranscriptLogger, TranscriptSink,
};
use council_domain::{SessionParams, SessionReport, Topic};
use council_infrastructure::{
    ConfigLoader, FileConfig, FileSpeechConfig, JsonlTranscriptLogger, TtsCliGateway,
};
use council_presentation::{Cli, ConsoleFormatter, ConsoleSink, OutputFormat};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting persona-council");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        match ConfigLoader::load(cli.config.as_ref()) {
            Ok(c) => c,
            Err(e) => bail!("Failed to load configuration: {}", e),
        }
    };

    // Build session parameters: CLI overrides config, config overrides defaults
    let Some(topic) = Topic::try_new(cli.topic.clone()) else {
        bail!("Topic cannot be empty");
    };

    let voice_requested = !cli.no_voice && config.session.voice;
    let params = SessionParams::new(topic)
        .with_members(cli.members.unwrap_or(config.session.members))
        .with_rounds(cli.rounds.unwrap_or(config.session.rounds))
        .with_voice(voice_requested);

    let input = RunSessionInput::new(params)
        .with_line_delay(Duration::from_millis(config.speech.line_delay_ms));

    // Structured transcript log (optional)
    let logger: Arc<dyn TranscriptLogger> = if cli.log || config.log.enabled {
        match JsonlTranscriptLogger::new(transcript_log_path(&config)) {
            Some(l) => {
                info!("Writing transcript log to {}", l.path().display());
                Arc::new(l)
            }
            None => Arc::new(NoTranscriptLogger),
        }
    } else {
        Arc::new(NoTranscriptLogger)
    };

    let mut sink = ConsoleSink::new().with_quiet(cli.quiet);

    // === Dependency Injection ===
    let report = run_session(&config.speech, input, logger, &mut sink).await;

    // Output the final report
    let output = match cli.output {
        OutputFormat::Summary => ConsoleFormatter::format_summary(&report),
        OutputFormat::Json => ConsoleFormatter::format_json(&report),
    };

    println!("{}", output);

    Ok(())
}

/// Wire up the speech gateway and run the session.
///
/// The gateway is only constructed when voice output is on; a missing
/// subtool downgrades to a silent session instead of failing, with an
/// inline warning so the absence of audio is visible in the output.
async fn run_session(
    speech: &FileSpeechConfig,
    input: RunSessionInput,
    logger: Arc<dyn TranscriptLogger>,
    sink: &mut dyn TranscriptSink,
) -> SessionReport {
    if input.params.voice_enabled() {
        match TtsCliGateway::new(speech) {
            Ok(gateway) => run(Arc::new(gateway), input, logger, sink).await,
            Err(e) => {
                warn!("Voice output disabled: {}", e);
                sink.warn(&format!("Voice output disabled: {}", e));
                let input = RunSessionInput {
                    params: input.params.clone().with_voice(false),
                    line_delay: input.line_delay,
                };
                run(Arc::new(NoSpeech), input, logger, sink).await
            }
        }
    } else {
        run(Arc::new(NoSpeech), input, logger, sink).await
    }
}

async fn run<G: SpeechGateway + 'static>(
    gateway: Arc<G>,
    input: RunSessionInput,
    logger: Arc<dyn TranscriptLogger>,
    sink: &mut dyn TranscriptSink,
) -> SessionReport {
    let use_case = RunSessionUseCase::new(gateway).with_logger(logger);
    use_case.execute(input, sink).await
}

/// Timestamped log file in the configured directory
fn transcript_log_path(config: &FileConfig) -> PathBuf {
    let filename = format!(
        "council-session-{}.jsonl",
        chrono::Local::now().format("%Y%m%d-%H%M%S")
    );
    match &config.log.dir {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}
