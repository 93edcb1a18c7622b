pub mod pdftotext;
pub mod plain;
pub mod xlsx;

use crate::error::StrideError;

/// Text extracted from a single page (or sheet) of a document.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub page_number: usize,
    pub lines: Vec<String>,
}

/// Trait for document text extraction backends.
pub trait TextExtractor: Send + Sync {
    /// Extract text content from document bytes, returning one PageContent per page.
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>, StrideError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Join extracted pages into the single text string the search consumes.
pub fn pages_to_text(pages: &[PageContent]) -> String {
    pages
        .iter()
        .flat_map(|p| p.lines.iter().map(|s| s.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Split text on form feeds (the page separator pdftotext emits).
pub(crate) fn split_pages(text: &str) -> Vec<PageContent> {
    text.split('\x0c')
        .enumerate()
        .map(|(i, page_text)| PageContent {
            page_number: i + 1,
            lines: page_text.lines().map(|l| l.to_string()).collect(),
        })
        .filter(|p| !p.lines.is_empty() || p.page_number == 1)
        .collect()
}
