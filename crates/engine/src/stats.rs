use crate::error::EngineError;
use crate::extract::ExtractedPair;
use crate::options::Mode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-file extraction result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileResult {
    pub path: PathBuf,
    pub pairs: Vec<ExtractedPair>,
    /// Pair count or total value words, depending on [`Mode`].
    pub metric: usize,
}

impl FileResult {
    #[must_use]
    pub fn new(path: PathBuf, pairs: Vec<ExtractedPair>, mode: Mode) -> Self {
        let metric = metric(&pairs, mode);
        Self {
            path,
            pairs,
            metric,
        }
    }

    /// Result recorded for a file that could not be read.
    #[must_use]
    pub const fn empty(path: PathBuf) -> Self {
        Self {
            path,
            pairs: Vec::new(),
            metric: 0,
        }
    }

    #[must_use]
    pub const fn has_content(&self) -> bool {
        self.metric > 0
    }

    /// Display strings for each pair; word counts are appended in
    /// value-word-count mode.
    #[must_use]
    pub fn annotated_pairs(&self, mode: Mode) -> Vec<String> {
        self.pairs
            .iter()
            .map(|pair| match mode {
                Mode::PairCount => pair.to_string(),
                Mode::ValueWordCount => format!("{pair} ({} words)", pair.word_count()),
            })
            .collect()
    }
}

#[must_use]
pub fn metric(pairs: &[ExtractedPair], mode: Mode) -> usize {
    match mode {
        Mode::PairCount => pairs.len(),
        Mode::ValueWordCount => pairs.iter().map(ExtractedPair::word_count).sum(),
    }
}

/// Totals over files whose metric is non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub files_with_content: usize,
    pub total: usize,
}

impl RunSummary {
    pub fn record(&mut self, file: &FileResult) {
        if file.has_content() {
            self.files_with_content += 1;
            self.total += file.metric;
        }
    }

    #[must_use]
    pub fn from_results(results: &[FileResult]) -> Self {
        let mut summary = Self::default();
        for file in results {
            summary.record(file);
        }
        summary
    }
}

/// Outcome of one run: every scanned file plus the per-file failures that
/// were recovered from.
#[derive(Debug)]
pub struct RunResult {
    pub mode: Mode,
    pub results: Vec<FileResult>,
    pub errors: Vec<(PathBuf, EngineError)>,
    pub summary: RunSummary,
}

impl RunResult {
    #[must_use]
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            results: Vec::new(),
            errors: Vec::new(),
            summary: RunSummary {
                files_with_content: 0,
                total: 0,
            },
        }
    }

    pub fn push(&mut self, file: FileResult) {
        self.summary.record(&file);
        self.results.push(file);
    }
}
