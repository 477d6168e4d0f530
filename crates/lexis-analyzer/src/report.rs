//! Plain-text log reports of an analysis run.
//!
//! Rendering is pure: the caller supplies the timestamp and decides where the
//! text goes.

use chrono::{DateTime, Local};
use lexis_syntax::diagnostic::Severity;

use crate::Analysis;

const RULE_WIDTH: usize = 60;

fn section(out: &mut String, title: &str) {
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"-".repeat(title.len()));
    out.push('\n');
}

/// Renders the full log report for `analysis`.
///
/// Tokens are listed in scan order; diagnostics are listed by position so a
/// reader can follow the file top to bottom.
pub fn render_log(analysis: &Analysis, source_name: &str, timestamp: &DateTime<Local>) -> String {
    let mut out = String::new();
    let status = if analysis.has_errors() { "ERRORS FOUND" } else { "OK" };

    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&format!("LEXIS ANALYSIS LOG - {}\n", timestamp.format("%Y-%m-%d %H:%M:%S")));
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');

    section(&mut out, "SUMMARY");
    out.push_str(&format!("Source:      {}\n", source_name));
    out.push_str(&format!("Tokens:      {}\n", analysis.tokens.len()));
    out.push_str(&format!("Diagnostics: {}\n", analysis.diagnostics.len()));
    out.push_str(&format!("Status:      {}\n", status));

    section(&mut out, "TOKENS");
    for (i, token) in analysis.tokens.iter().enumerate() {
        out.push_str(&format!(
            "{:3}. L{}:C{:<3} | {:<24} | {}\n",
            i + 1,
            token.line,
            token.col,
            token.kind.label(),
            token.text
        ));
    }

    section(&mut out, "DIAGNOSTICS");
    if analysis.diagnostics.is_empty() {
        out.push_str("none\n");
    }
    let mut ordered: Vec<_> = analysis.diagnostics.iter().collect();
    ordered.sort_by_key(|d| d.position());
    for (i, diag) in ordered.iter().enumerate() {
        out.push_str(&format!(
            "{:3}. [{:<9}] L{}:C{} - {}\n",
            i + 1,
            diag.severity.label().to_uppercase(),
            diag.line,
            diag.col,
            diag.message
        ));
        if let Some(suggestion) = &diag.suggestion {
            out.push_str(&format!("       help: {}\n", suggestion));
        }
    }

    section(&mut out, "BY TIER");
    for severity in Severity::ALL {
        out.push_str(&format!("{:<10} {}\n", format!("{}:", severity), analysis.count(severity)));
    }
    out
}

/// File name for a log written at `timestamp`, e.g. `log_20260301_093005.txt`.
pub fn log_file_name(timestamp: &DateTime<Local>) -> String {
    timestamp.format("log_%Y%m%d_%H%M%S.txt").to_string()
}
