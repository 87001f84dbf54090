#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    EmptyPage,
    PageSplitMismatch,
    ExtractorFailed,
    SuspectDecoding,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub code: WarningCode,
    pub message: String,
    pub page: Option<u32>,
}

impl ScanWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            page: None,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}
