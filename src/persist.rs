use std::fs;
use std::path::Path;

use crate::error::ScanError;

/// Writes `text` as UTF-8, replacing any existing file. Not atomic.
///
/// # Errors
///
/// Returns [`ScanError::OutputWrite`] when the file cannot be written.
pub fn save_text(path: &Path, text: &str) -> Result<(), ScanError> {
    fs::write(path, text).map_err(|source| ScanError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "saved extracted text");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::save_text;
    use crate::error::ScanError;

    #[test]
    fn read_back_is_byte_identical() {
        let dir = tempdir().expect("tempdir should be created");
        let path = dir.path().join("out.txt");
        let text = "--- PAGE 1 ---\n\nMise à la terre — 230 V\r\n\u{1F50C}\n";

        save_text(&path, text).expect("save should succeed");
        let bytes = std::fs::read(&path).expect("file should be readable");
        assert_eq!(bytes, text.as_bytes());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().expect("tempdir should be created");
        let path = dir.path().join("out.txt");
        std::fs::write(&path, "old content that is longer").expect("seed file");

        save_text(&path, "new").expect("save should succeed");
        assert_eq!(std::fs::read_to_string(&path).expect("readable"), "new");
    }

    #[test]
    fn missing_parent_directory_is_reported() {
        let dir = tempdir().expect("tempdir should be created");
        let path = dir.path().join("missing").join("out.txt");

        let error = save_text(&path, "x").expect_err("write should fail");
        assert!(matches!(error, ScanError::OutputWrite { .. }), "{error:?}");
    }
}
