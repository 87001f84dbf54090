use std::io::Write;

use crate::error::ScanError;
use crate::model::PageText;
use crate::options::PageLayout;

pub const PAGE_SEPARATOR: &str = "----------------------------------------";

#[must_use]
pub fn page_marker(page_number: u32) -> String {
    format!("--- PAGE {page_number} ---")
}

/// Concatenates page texts in order; line indices later refer to this string.
#[must_use]
pub fn join_pages(pages: &[PageText], layout: PageLayout) -> String {
    match layout {
        PageLayout::Raw => pages.iter().map(|page| page.text.as_str()).collect(),
        PageLayout::Marked => {
            let mut text = String::new();
            for page in pages {
                text.push_str(&page_marker(page.page_number));
                text.push_str("\n\n");
                text.push_str(&page.text);
                text.push('\n');
                text.push_str(PAGE_SEPARATOR);
                text.push_str("\n\n");
            }
            text
        }
    }
}

/// Console echo of every page, as printed while an SGI document is read.
///
/// # Errors
///
/// Fails only when writing to `out` fails.
pub fn echo_pages(out: &mut impl Write, pages: &[PageText]) -> Result<(), ScanError> {
    writeln!(out, "Nombre de pages: {}", pages.len())?;
    writeln!(out, "{}", "=".repeat(80))?;
    for page in pages {
        writeln!(out)?;
        writeln!(out, "{}", page_marker(page.page_number))?;
        writeln!(out, "{}", page.text)?;
        writeln!(out, "{PAGE_SEPARATOR}")?;
    }
    Ok(())
}
