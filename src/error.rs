use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Fichier PDF non trouvé: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to load PDF: {0}")]
    PdfLoad(#[from] lopdf::Error),

    #[error("failed to extract PDF text: {0}")]
    PdfExtract(String),

    #[error("no file name containing '{needle}' in '{}'", dir.display())]
    NoMatchingFile { dir: PathBuf, needle: String },

    #[error("failed to list directory '{}': {source}", path.display())]
    ListDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write '{}': {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ScanError {
    /// Failures raised while opening or parsing the document itself.
    #[must_use]
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, Self::PdfLoad(_) | Self::PdfExtract(_))
    }
}
