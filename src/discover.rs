use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// First entry of `dir` whose file name contains `needle` (case-sensitive).
///
/// Entries are compared in name order so the pick does not depend on the
/// platform's directory order.
///
/// # Errors
///
/// Returns [`ScanError::ListDir`] when `dir` cannot be read.
pub fn find_first_containing(dir: &Path, needle: &str) -> Result<Option<PathBuf>, ScanError> {
    let list_error = |source| ScanError::ListDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        names.push(entry.file_name());
    }
    names.sort();

    // Names that are not valid UTF-8 cannot contain the needle as text.
    Ok(names
        .into_iter()
        .find(|name| name.to_str().is_some_and(|name| name.contains(needle)))
        .map(|name| dir.join(name)))
}
