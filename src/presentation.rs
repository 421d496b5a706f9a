// src/presentation.rs
use kvscan_engine::error::EngineError;
use kvscan_engine::options::Mode;
use kvscan_engine::stats::RunResult;
use std::path::Path;

const WARN: &str = "⚠️";

/// Per-file failures the run recovered from. The error text names the file.
pub fn print_file_errors(result: &RunResult) {
    for (_, err) in &result.errors {
        eprintln!("{}", file_error_line(err));
    }
}

fn file_error_line(err: &EngineError) -> String {
    format!("{WARN}  {err}")
}

pub fn print_fatal(err: &anyhow::Error) {
    eprintln!("{WARN}  Application Error: {err:#}");
}

pub fn print_completion(report: &Path, result: &RunResult) {
    println!("{}", completion_message(report, result));
}

fn completion_message(report: &Path, result: &RunResult) -> String {
    let what = match result.mode {
        Mode::PairCount => "key-value pairs",
        Mode::ValueWordCount => "value words",
    };
    format!(
        "[kvscan] Report written to {} ({} files, {} {what}).",
        report.display(),
        result.summary.files_with_content,
        result.summary.total
    )
}
