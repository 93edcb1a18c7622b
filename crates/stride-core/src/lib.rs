pub mod config;
pub mod context;
pub mod error;
pub mod extraction;
pub mod observer;
pub mod phrases;
pub mod report;
pub mod search;
pub mod text;

use config::SearchParams;
use error::StrideError;
use extraction::{pages_to_text, TextExtractor};
use observer::{NoopObserver, SearchObserver};
use report::SearchReport;
use search::cancel::CancelFlag;

/// Main API entry point: search `text` for equidistant letter sequences
/// spelling any of `phrases`.
///
/// Returns `EmptyInput` when the text is blank. A report with no matches is
/// a successful search that found nothing.
pub fn search<S: AsRef<str>>(
    text: &str,
    phrases: &[S],
    params: &SearchParams,
) -> Result<SearchReport, StrideError> {
    search::run(text, phrases, params, &mut NoopObserver, None)
}

/// Like [`search`], reporting progress to `observer` and stopping with
/// `Cancelled` once `cancel` is tripped.
pub fn search_with<S: AsRef<str>>(
    text: &str,
    phrases: &[S],
    params: &SearchParams,
    observer: &mut dyn SearchObserver,
    cancel: Option<&CancelFlag>,
) -> Result<SearchReport, StrideError> {
    search::run(text, phrases, params, observer, cancel)
}

/// Extract text from a document and search it.
///
/// A document whose extracted text is blank yields `EmptyInput`.
pub fn scan_document<S: AsRef<str>>(
    bytes: &[u8],
    extractor: &dyn TextExtractor,
    phrases: &[S],
    params: &SearchParams,
    observer: &mut dyn SearchObserver,
    cancel: Option<&CancelFlag>,
) -> Result<SearchReport, StrideError> {
    let text = extract_text(bytes, extractor)?;
    search::run(&text, phrases, params, observer, cancel)
}

/// Extract the full text of a document as one string.
pub fn extract_text(bytes: &[u8], extractor: &dyn TextExtractor) -> Result<String, StrideError> {
    let pages = extractor.extract_pages(bytes)?;
    tracing::debug!(
        backend = extractor.backend_name(),
        pages = pages.len(),
        "extracted document text"
    );
    Ok(pages_to_text(&pages))
}
