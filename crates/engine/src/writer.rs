use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write `data` to `path` via a temp file in the same directory.
///
/// An existing file at `path` is replaced. Readers never observe a partially
/// written report, and the temp file is removed if anything fails.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(parent)?;
    let mut w = BufWriter::new(tmp);
    w.write_all(data)?;
    let tmp = w.into_inner().map_err(std::io::IntoInnerError::into_error)?;
    let _ = tmp.as_file().sync_all();
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
