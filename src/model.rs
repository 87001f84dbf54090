use crate::warning::ScanWarning;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub page_number: u32,
    pub text: String,
}

/// Pages read from one document, in page-tree order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Extraction {
    pub pages: Vec<PageText>,
    pub warnings: Vec<ScanWarning>,
}

impl Extraction {
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    pub title: &'static str,
    pub matches: Vec<LineMatch>,
}

impl MatchReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
