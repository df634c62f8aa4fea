use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::discovery::config::{EXCLUDED_DIRS, FILE_EXTENSIONS};
use crate::discovery::filter::is_test_file;
use crate::error::IoError;

/// Test files below `root`, sorted, skipping build output and dependencies.
pub fn find_test_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| {
        if e.depth() > 0 && e.file_type().is_dir() {
            let name = e.file_name().to_string_lossy();
            !EXCLUDED_DIRS.contains(&name.as_ref())
        } else {
            true
        }
    }) {
        let entry = entry.map_err(|e| IoError::directory_scan_error(root, e))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let has_source_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| FILE_EXTENSIONS.contains(&ext));

        if has_source_extension && is_test_file(path) {
            trace!(path = %path.display(), "found test file");
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    debug!(root = %root.display(), count = files.len(), "test file discovery complete");
    Ok(files)
}
