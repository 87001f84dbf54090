mod classify;
mod discover;
mod error;
mod extract;
mod keywords;
mod model;
mod options;
mod pdf_reader;
mod persist;
mod pipeline;
mod report;
mod warning;

pub use classify::{KeywordCategory, LinePolicy, LineTest, classify, split_lines};
pub use discover::find_first_containing;
pub use error::ScanError;
pub use extract::{PAGE_SEPARATOR, echo_pages, join_pages, page_marker};
pub use keywords::{
    ELECTRICAL_KEYWORDS, HABILITATION_KEYWORDS, PERMIT_BANNER, PERMIT_CATEGORIES,
    PERMIT_REQUIRED_KEYWORDS, SGI_BANNER, SGI_CATEGORIES, SGI_REQUIRED_KEYWORDS, VOLTAGE_KEYWORDS,
};
pub use model::{Extraction, LineMatch, MatchReport, PageText};
pub use options::{
    DEFAULT_DOC_DIR, DEFAULT_PERMIT_OUTPUT, DEFAULT_PERMIT_PDF, DEFAULT_SGI_NEEDLE,
    DEFAULT_SGI_OUTPUT, PageLayout, PermitOptions, SgiOptions,
};
pub use pdf_reader::{PageSource, PdfPageReader, StaticPages, read_pdf_pages_from_bytes};
pub use persist::save_text;
pub use pipeline::{
    Outcome, PipelineRun, resolve_sgi_input, run_electrical_permit, run_sgi_document,
};
pub use report::{write_banner, write_reports};
pub use warning::{ScanWarning, WarningCode as ScanWarningCode};
