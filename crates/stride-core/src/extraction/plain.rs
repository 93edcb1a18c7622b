use crate::error::StrideError;
use crate::extraction::{split_pages, PageContent, TextExtractor};

/// Plain text files. Invalid UTF-8 is replaced rather than rejected.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>, StrideError> {
        let text = String::from_utf8_lossy(bytes);
        Ok(split_pages(text.trim_start_matches('\u{feff}')))
    }

    fn backend_name(&self) -> &str {
        "plain"
    }
}
