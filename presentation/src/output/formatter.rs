//! Session report formatting

use colored::Colorize;
use council_domain::SessionReport;

/// Formats the final session report for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Short human-readable summary
    pub fn format_summary(report: &SessionReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{}\n",
            "=== Council session completed successfully! ===".green().bold()
        ));
        output.push_str(&format!("{} {}\n", "Topic:".cyan().bold(), report.topic));
        output.push_str(&format!(
            "{} {} members, {} rounds, {} transcript lines\n",
            "Session:".cyan().bold(),
            report.members,
            report.rounds,
            report.transcript_len
        ));

        output
    }

    /// JSON report
    pub fn format_json(report: &SessionReport) -> String {
        serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string())
    }
}
