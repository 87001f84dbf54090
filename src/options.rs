use std::path::PathBuf;

pub const DEFAULT_PERMIT_PDF: &str = "doc/Permis electrique_.pdf";
pub const DEFAULT_PERMIT_OUTPUT: &str = "electrical_permit_content_extracted.txt";
pub const DEFAULT_DOC_DIR: &str = "doc";
pub const DEFAULT_SGI_NEEDLE: &str = "SGI";
pub const DEFAULT_SGI_OUTPUT: &str = "pdf_content_extracted.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLayout {
    /// Each page wrapped in a `--- PAGE n ---` marker and a dash separator.
    Marked,
    /// Page texts concatenated as-is.
    Raw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermitOptions {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for PermitOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_PERMIT_PDF),
            output: PathBuf::from(DEFAULT_PERMIT_OUTPUT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SgiOptions {
    /// Explicit document path; when unset the document is discovered in `doc_dir`.
    pub input: Option<PathBuf>,
    pub doc_dir: PathBuf,
    pub name_contains: String,
    pub output: PathBuf,
}

impl Default for SgiOptions {
    fn default() -> Self {
        Self {
            input: None,
            doc_dir: PathBuf::from(DEFAULT_DOC_DIR),
            name_contains: DEFAULT_SGI_NEEDLE.to_string(),
            output: PathBuf::from(DEFAULT_SGI_OUTPUT),
        }
    }
}
