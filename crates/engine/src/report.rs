//! Sorting, rendering and writing the final report.

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::{Mode, OutputFormat};
use crate::stats::{FileResult, RunResult, RunSummary};
use crate::writer::atomic_write;
use log::info;
use serde::Serialize;
use std::borrow::Borrow;
use std::path::PathBuf;

pub const SUMMARY_MARKER: &str = "--- Summary ---";

/// Sort descending by metric. The sort is stable, so equal metrics keep the
/// walker's path order.
pub fn sort_results<T: Borrow<FileResult>>(results: &mut [T]) {
    results.sort_by(|a, b| {
        let (a, b): (&FileResult, &FileResult) = (a.borrow(), b.borrow());
        b.metric.cmp(&a.metric)
    });
}

/// Files that appear in the listing, in report order.
#[must_use]
pub fn listed<'a>(result: &'a RunResult, config: &Config) -> Vec<&'a FileResult> {
    let mut files: Vec<&FileResult> = result
        .results
        .iter()
        .filter(|f| config.include_empty || f.has_content())
        .collect();
    sort_results(&mut files);
    if let Some(n) = config.top_n {
        files.truncate(n);
    }
    files
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    mode: Mode,
    files: Vec<&'a FileResult>,
    summary: RunSummary,
}

/// Render the report in the configured format.
///
/// # Errors
/// Returns an error if JSON or YAML serialization fails.
pub fn render(result: &RunResult, config: &Config) -> Result<String> {
    let files = listed(result, config);
    match config.format {
        OutputFormat::Text => Ok(render_text(&files, result.mode, result.summary)),
        OutputFormat::Json => {
            let doc = ReportDocument {
                mode: result.mode,
                files,
                summary: result.summary,
            };
            Ok(serde_json::to_string_pretty(&doc)?)
        }
        OutputFormat::Yaml => {
            let doc = ReportDocument {
                mode: result.mode,
                files,
                summary: result.summary,
            };
            Ok(serde_yaml::to_string(&doc)?)
        }
    }
}

fn render_text(files: &[&FileResult], mode: Mode, summary: RunSummary) -> String {
    let mut lines: Vec<String> = Vec::new();

    for file in files {
        lines.push(format!(
            "{} => {} {}",
            file.path.display(),
            file.metric,
            mode.unit()
        ));
        for pair in file.annotated_pairs(mode) {
            lines.push(format!("  {pair}"));
        }
        lines.push(String::new());
    }
    if files.is_empty() {
        lines.push(String::new());
    }

    lines.push(SUMMARY_MARKER.to_string());
    lines.push(format!(
        "Files with key-value pairs: {}",
        summary.files_with_content
    ));
    match mode {
        Mode::PairCount => lines.push(format!("Total key-value pairs: {}", summary.total)),
        Mode::ValueWordCount => lines.push(format!("Total words in values: {}", summary.total)),
    }

    lines.join("\n")
}

/// Render and write the report, replacing any existing file.
///
/// # Errors
/// Returns an error if rendering fails or the file cannot be written. Nothing
/// is left at the destination on failure.
pub fn write_report(result: &RunResult, config: &Config) -> Result<PathBuf> {
    let text = render(result, config)?;
    let path = config.report_path();
    atomic_write(&path, text.as_bytes()).map_err(|source| EngineError::ReportWrite {
        path: path.clone(),
        source,
    })?;
    info!("wrote report to {}", path.display());
    Ok(path)
}
