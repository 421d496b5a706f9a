use crate::config::{FilterConfig, WalkOptions};
use crate::error::Result;
use ignore::WalkBuilder;
use log::debug;
use std::path::PathBuf;

/// Recursive directory walk.
///
/// Every regular file below `options.root` whose extension passes `filters` is
/// returned, sorted by path so repeated runs see the same order regardless of
/// what the OS directory listing yields. Ignore files (`.gitignore` and
/// friends) are not consulted. A symlink to a regular file counts as that file
/// even when links are not followed; symlinked directories are only descended
/// into with `follow_links`.
///
/// # Errors
/// Returns an error if the root or any directory below it cannot be read.
/// The walk is not resumed after the first such failure.
pub fn walk(options: &WalkOptions, filters: &FilterConfig) -> Result<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(&options.root);
    builder
        .standard_filters(false)
        .hidden(!options.hidden)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if !is_regular_file(&entry) {
            continue;
        }
        if filters.allows(entry.path()) {
            files.push(entry.into_path());
        } else {
            debug!("skipping {} (extension filter)", entry.path().display());
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

fn is_regular_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        // Dangling links stat as missing and are left out.
        Some(ft) if ft.is_symlink() => std::fs::metadata(entry.path()).is_ok_and(|m| m.is_file()),
        _ => false,
    }
}
