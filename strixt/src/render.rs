//! Output rendering for check results.

use std::fmt::Write as _;
use std::path::Path;

use console::Style;
use serde::Serialize;
use strixtlib::{CheckResult, EntryReport, Outcome, Peeve, Verbosity};

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => OutputMode::Json,
            _ => OutputMode::Text,
        }
    }
}

/// Render paths the way the user typed them, minus a leading `./`.
fn display_path(path: &Path) -> String {
    match path.strip_prefix(".") {
        Ok(rest) if !rest.as_os_str().is_empty() => rest.to_string_lossy().to_string(),
        _ => path.to_string_lossy().to_string(),
    }
}

fn error_style() -> Style {
    Style::new().red().bold()
}

fn write_peeves(out: &mut String, path: &str, peeves: &[Peeve], max_shown: usize) {
    let error = error_style().apply_to("error");
    for peeve in peeves.iter().take(max_shown) {
        let _ = writeln!(
            out,
            "{}:{}:{}: {}: {}",
            path,
            peeve.line,
            peeve.column,
            error,
            peeve.message()
        );
    }
    if peeves.len() > max_shown {
        let _ = writeln!(
            out,
            "{}: {} more peeves not shown",
            path,
            peeves.len() - max_shown
        );
    }
}

/// Render the text report.
///
/// Each peeve is one `path:line:column: error: message` line, at most
/// `max_shown` per file.
pub fn render_text(result: &CheckResult, verbosity: Verbosity, max_shown: usize) -> String {
    let mut out = String::new();

    for entry in result.entries.iter().filter(|e| e.is_reported(verbosity)) {
        let path = display_path(&entry.path);
        match &entry.outcome {
            Outcome::Skipped { reason } => {
                let _ = writeln!(out, "{}: skipping {}", path, reason);
            }
            Outcome::Checked { peeves } if peeves.is_empty() => {
                let _ = writeln!(out, "{}: ok", path);
            }
            Outcome::Checked { peeves } => write_peeves(&mut out, &path, peeves, max_shown),
        }
    }

    out
}

#[derive(Debug, Serialize)]
struct JsonPeeve {
    line: usize,
    column: usize,
    kind: strixtlib::PeeveKind,
    message: &'static str,
}

#[derive(Debug, Serialize)]
struct JsonEntry {
    path: String,
    #[serde(flatten)]
    outcome: JsonOutcome,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum JsonOutcome {
    Skipped { reason: String },
    Checked { peeves: Vec<JsonPeeve> },
}

fn to_json_entry(entry: &EntryReport) -> JsonEntry {
    let outcome = match &entry.outcome {
        Outcome::Skipped { reason } => JsonOutcome::Skipped {
            reason: reason.to_string(),
        },
        Outcome::Checked { peeves } => JsonOutcome::Checked {
            peeves: peeves
                .iter()
                .map(|p| JsonPeeve {
                    line: p.line,
                    column: p.column,
                    kind: p.kind,
                    message: p.message(),
                })
                .collect(),
        },
    };
    JsonEntry {
        path: display_path(&entry.path),
        outcome,
    }
}

/// Render the JSON report: an array of reported entries with every peeve.
pub fn render_json(result: &CheckResult, verbosity: Verbosity) -> serde_json::Result<String> {
    let entries: Vec<JsonEntry> = result
        .entries
        .iter()
        .filter(|e| e.is_reported(verbosity))
        .map(to_json_entry)
        .collect();
    serde_json::to_string_pretty(&entries)
}
