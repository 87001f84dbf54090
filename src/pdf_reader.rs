use std::collections::BTreeMap;
use std::fs;
use std::panic;
use std::path::Path;

use encoding_rs::{UTF_16BE, WINDOWS_1252};
use lopdf::Document;
use lopdf::Object;
use lopdf::content::Content;

use crate::error::ScanError;
use crate::model::{Extraction, PageText};
use crate::warning::{ScanWarning, WarningCode};

/// Produces the ordered page texts of a document.
pub trait PageSource {
    /// # Errors
    ///
    /// Returns an error when the document cannot be read or parsed.
    fn read_pages(&self, input: &Path) -> Result<Extraction, ScanError>;
}

/// Reads PDF files with `lopdf`, cross-checked against `pdf-extract`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfPageReader;

impl PageSource for PdfPageReader {
    fn read_pages(&self, input: &Path) -> Result<Extraction, ScanError> {
        let bytes = fs::read(input).map_err(|error| {
            ScanError::PdfExtract(format!("failed to read '{}': {error}", input.display()))
        })?;
        read_pdf_pages_from_bytes(&bytes)
    }
}

/// Fixed in-memory pages, numbered from 1. The input path is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticPages {
    pages: Vec<String>,
}

impl StaticPages {
    pub fn new<I, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pages: pages.into_iter().map(Into::into).collect(),
        }
    }
}

impl PageSource for StaticPages {
    fn read_pages(&self, _input: &Path) -> Result<Extraction, ScanError> {
        let pages = (1_u32..)
            .zip(&self.pages)
            .map(|(page_number, text)| PageText {
                page_number,
                text: text.clone(),
            })
            .collect();
        Ok(Extraction {
            pages,
            warnings: Vec::new(),
        })
    }
}

fn looks_decoding_broken(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    if text.contains("?Identity-H Unimplemented?") || text.contains('\u{FFFD}') {
        return true;
    }

    let total = text.chars().count();
    let control = text
        .chars()
        .filter(|ch| ch.is_control() && !matches!(ch, '\n' | '\r' | '\t'))
        .count();

    control * 5 > total
}

fn decode_pdf_bytes(encoding: Option<&str>, bytes: &[u8]) -> String {
    let lower = encoding.map(str::to_ascii_lowercase);

    // WinAnsi maps onto Windows-1252.
    if lower
        .as_deref()
        .is_some_and(|name| name.contains("winansi") || name.contains("1252"))
    {
        let (text, _, _) = WINDOWS_1252.decode(bytes);
        return text.into_owned();
    }

    let decoded = Document::decode_text(encoding, bytes);
    if !looks_decoding_broken(&decoded) {
        return decoded;
    }

    if bytes.starts_with(&[0xFE, 0xFF]) || bytes.starts_with(&[0xFF, 0xFE]) {
        let bytes = if bytes.len() > 2 { &bytes[2..] } else { bytes };
        let (utf16, had_errors) = UTF_16BE.decode_without_bom_handling(bytes);
        if !had_errors && !utf16.is_empty() {
            return utf16.into_owned();
        }
    }

    if let Some(name) = lower.as_deref()
        && (name.contains("utf16")
            || name.contains("ucs2")
            || name.contains("identity-h")
            || name.contains("unicode"))
    {
        let (utf16, had_errors) = UTF_16BE.decode_without_bom_handling(bytes);
        if !had_errors && !utf16.is_empty() {
            return utf16.into_owned();
        }
    }

    // Last resort: read the bytes as Windows-1252.
    let (latin, _, _) = WINDOWS_1252.decode(bytes);
    latin.into_owned()
}

fn extraction_quality_score(text: &str) -> i64 {
    if text.trim().is_empty() {
        return i64::MIN / 4;
    }

    let non_empty_lines = text.lines().filter(|line| !line.trim().is_empty()).count();
    let words = text.split_whitespace().count();
    let raw = i64::try_from(non_empty_lines * 10 + words).unwrap_or(i64::MAX / 4);

    let broken_penalty = if looks_decoding_broken(text) { 800 } else { 0 };
    raw - broken_penalty
}

fn choose_best_text(candidates: &[String]) -> String {
    candidates
        .iter()
        .max_by_key(|text| extraction_quality_score(text))
        .cloned()
        .unwrap_or_default()
}

fn extract_text_from_page_content(document: &Document, page_id: lopdf::ObjectId) -> Option<String> {
    fn collect_text(text: &mut String, encoding: Option<&str>, operands: &[Object]) {
        for operand in operands {
            match operand {
                Object::String(bytes, _) => {
                    text.push_str(&decode_pdf_bytes(encoding, bytes));
                }
                Object::Array(items) => {
                    collect_text(text, encoding, items);
                    text.push(' ');
                }
                Object::Integer(value) => {
                    if *value < -100 {
                        text.push(' ');
                    }
                }
                _ => {}
            }
        }
    }

    let raw_content = document.get_page_content(page_id).ok()?;
    let content = Content::decode(&raw_content).ok()?;
    let encodings = document
        .get_page_fonts(page_id)
        .into_iter()
        .map(|(name, font)| (name, font.get_font_encoding()))
        .collect::<BTreeMap<Vec<u8>, &str>>();

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_encoding = None;
    for operation in content.operations {
        match operation.operator.as_str() {
            "Tf" => {
                if let Some(font_name) = operation
                    .operands
                    .first()
                    .and_then(|operand| operand.as_name().ok())
                {
                    current_encoding = encodings.get(font_name).copied();
                }
            }
            "Tj" | "TJ" | "'" | "\"" => {
                collect_text(&mut current, current_encoding, &operation.operands);
            }
            "T*" | "Td" | "TD" | "ET" => {
                if !current.trim().is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
            }
            _ => {}
        }
    }

    if !current.trim().is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Runs `work`, turning a panic into `None` without the default hook's report.
fn catch_quietly<T>(work: impl FnOnce() -> T + panic::UnwindSafe) -> Option<T> {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(work);
    panic::set_hook(previous);
    result.ok()
}

/// Per-page text from `pdf-extract`, with its panics turned into errors.
fn extract_pages_with_pdf_extract(input_pdf: &[u8]) -> Result<Vec<String>, String> {
    match catch_quietly(|| pdf_extract::extract_text_from_mem_by_pages(input_pdf)) {
        Some(Ok(pages)) => Ok(pages),
        Some(Err(error)) => Err(format!("pdf-extract failed: {error}")),
        None => Err("pdf-extract panicked while decoding the document".to_string()),
    }
}

/// # Errors
///
/// Returns [`ScanError::PdfLoad`] when `lopdf` cannot parse the document.
pub fn read_pdf_pages_from_bytes(input_pdf: &[u8]) -> Result<Extraction, ScanError> {
    let document = Document::load_mem(input_pdf)?;
    let pages_map = document.get_pages();
    let mut warnings = Vec::new();

    let extracted_pages = match extract_pages_with_pdf_extract(input_pdf) {
        Ok(pages) if pages.len() == pages_map.len() => Some(pages),
        Ok(pages) => {
            warnings.push(ScanWarning::new(
                WarningCode::PageSplitMismatch,
                format!(
                    "pdf-extract returned {} page(s) for a {}-page document; ignoring its output",
                    pages.len(),
                    pages_map.len()
                ),
            ));
            None
        }
        Err(message) => {
            warnings.push(ScanWarning::new(WarningCode::ExtractorFailed, message));
            None
        }
    };

    let mut pages = Vec::with_capacity(pages_map.len());
    for (index, (page_no, page_id)) in pages_map.iter().enumerate() {
        let mut candidates = Vec::new();
        if let Some(text) = extracted_pages
            .as_ref()
            .and_then(|extracted| extracted.get(index).cloned())
            .filter(|text| !text.trim().is_empty())
        {
            candidates.push(text);
        }
        if let Some(text) = extract_text_from_page_content(&document, *page_id) {
            candidates.push(text);
        }
        if let Some(text) = document
            .extract_text(&[*page_no])
            .ok()
            .filter(|text| !text.trim().is_empty())
        {
            candidates.push(text);
        }

        tracing::debug!(page = *page_no, candidates = candidates.len(), "page text candidates");

        let text = choose_best_text(&candidates);
        if text.trim().is_empty() {
            warnings.push(
                ScanWarning::new(WarningCode::EmptyPage, "page produced no text")
                    .with_page(*page_no),
            );
        } else if looks_decoding_broken(&text) {
            warnings.push(
                ScanWarning::new(
                    WarningCode::SuspectDecoding,
                    "page text still looks mis-decoded after fallbacks",
                )
                .with_page(*page_no),
            );
        }

        pages.push(PageText {
            page_number: *page_no,
            text,
        });
    }

    Ok(Extraction { pages, warnings })
}
