use crate::model::{LineMatch, MatchReport};

/// Which form of a line is tested and reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinePolicy {
    /// Surrounding whitespace removed before testing and printing.
    Trimmed,
    /// Line tested and printed exactly as split.
    Verbatim,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTest {
    /// Lowercased line contains any of the (lowercase) keywords.
    AnyKeyword(&'static [&'static str]),
    /// Non-empty line that is all-caps or carries a numbering/section marker.
    SectionHeading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordCategory {
    pub title: &'static str,
    pub test: LineTest,
    pub policy: LinePolicy,
}

impl KeywordCategory {
    #[must_use]
    pub const fn new(title: &'static str, test: LineTest, policy: LinePolicy) -> Self {
        Self {
            title,
            test,
            policy,
        }
    }

    /// The text to report for `line`, or `None` when the line does not match.
    #[must_use]
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        let candidate = match self.policy {
            LinePolicy::Trimmed => line.trim(),
            LinePolicy::Verbatim => line,
        };
        self.test.matches(candidate).then_some(candidate)
    }
}

impl LineTest {
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Self::AnyKeyword(keywords) => {
                let lower = line.to_lowercase();
                keywords.iter().any(|keyword| lower.contains(keyword))
            }
            Self::SectionHeading => {
                let line = line.trim();
                !line.is_empty()
                    && (is_all_caps(line)
                        || line.contains("Section")
                        || line.contains("1.")
                        || line.contains("2."))
            }
        }
    }
}

/// At least one cased letter, and no lowercase ones.
fn is_all_caps(line: &str) -> bool {
    let mut has_cased = false;
    for ch in line.chars() {
        if ch.is_lowercase() {
            return false;
        }
        if ch.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}

/// Splits on `\n`, keeping empty lines. Empty text has no lines.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').collect()
}

#[must_use]
pub fn classify(text: &str, categories: &[KeywordCategory]) -> Vec<MatchReport> {
    let lines = split_lines(text);
    categories
        .iter()
        .map(|category| MatchReport {
            title: category.title,
            matches: lines
                .iter()
                .enumerate()
                .filter_map(|(index, line)| {
                    category.match_line(line).map(|text| LineMatch {
                        index,
                        text: text.to_string(),
                    })
                })
                .collect(),
        })
        .collect()
}
