use crate::error::{EngineError, Result};
use crate::extract::Extractor;
use crate::options::Mode;
use crate::stats::FileResult;
use std::path::Path;

/// Read a single file and extract its pairs.
///
/// # Errors
/// Returns [`EngineError::FileRead`] if the file cannot be opened or is not
/// valid UTF-8.
pub fn process_file(path: &Path, extractor: &Extractor, mode: Mode) -> Result<FileResult> {
    let text = std::fs::read_to_string(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let pairs = extractor.extract(&text);
    Ok(FileResult::new(path.to_path_buf(), pairs, mode))
}
