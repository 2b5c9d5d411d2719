//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the final session report
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Short human-readable summary
    Summary,
    /// JSON report
    Json,
}

/// CLI arguments for persona-council
#[derive(Parser, Debug)]
#[command(name = "persona-council")]
#[command(author, version, about = "Summon a council of personas to discuss a topic aloud")]
#[command(long_about = r#"
persona-council runs a scripted council discussion on a topic of your choice.

Six fixed personas are available; the first N are seated in catalog order.
The session is a moderator introduction, N rounds of per-persona lines, and
a closing consensus. With voice enabled, every line is dispatched to an
external text-to-speech subtool.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./council.toml      Project-level config
3. ~/.config/persona-council/config.toml   Global config

Example:
  persona-council "Should AI have emotions?"
  persona-council -m 3 -r 2 --no-voice "Remote work vs office work"
"#)]
pub struct Cli {
    /// The topic for the council to discuss
    pub topic: String,

    /// Number of council members (clamped to 2-6)
    #[arg(short, long, value_name = "COUNT")]
    pub members: Option<usize>,

    /// Number of discussion rounds
    #[arg(short, long, value_name = "COUNT")]
    pub rounds: Option<usize>,

    /// Disable voice output
    #[arg(long)]
    pub no_voice: bool,

    /// Write a JSONL transcript log for this session
    #[arg(long)]
    pub log: bool,

    /// Output format for the final report
    #[arg(short, long, value_enum, default_value = "summary")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress colored decorations
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
