// crates/engine/src/lib.rs
use log::{debug, info};

pub mod config;
pub mod error;
pub mod extract;
pub mod filesystem;
pub mod options;
pub mod processor;
pub mod report;
pub mod stats;
pub mod writer;

use crate::config::Config;
use crate::error::Result;
use crate::extract::Extractor;
use crate::stats::{FileResult, RunResult};

/// Run the scan: walk, extract and aggregate.
///
/// Files are processed one at a time in path order. The returned results are
/// sorted descending by metric; rendering and writing are left to
/// [`report::write_report`].
///
/// # Errors
///
/// Returns an error for run-level failures: the walk could not complete, or a
/// file could not be read while `config.strict` is set. Otherwise read
/// failures are collected in `RunResult::errors` and the file counts as empty.
pub fn run(config: &Config) -> Result<RunResult> {
    let extractor = Extractor::new()?;
    let files = filesystem::walk(&config.walk, &config.filter)?;
    info!(
        "scanning {} files under {}",
        files.len(),
        config.walk.root.display()
    );

    let mut result = RunResult::new(config.mode);
    for path in files {
        match processor::process_file(&path, &extractor, config.mode) {
            Ok(file) => {
                debug!("{} => {}", path.display(), file.metric);
                result.push(file);
            }
            Err(e) if config.strict => return Err(e),
            Err(e) => {
                debug!("recovering from: {e}");
                result.push(FileResult::empty(path.clone()));
                result.errors.push((path, e));
            }
        }
    }

    report::sort_results(&mut result.results);
    Ok(result)
}
