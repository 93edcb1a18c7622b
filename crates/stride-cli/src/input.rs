use std::path::Path;
use stride_core::extraction::pdftotext::PdftotextExtractor;
use stride_core::extraction::plain::PlainTextExtractor;
use stride_core::extraction::xlsx::XlsxExtractor;
use stride_core::extraction::TextExtractor;

/// Pick an extraction backend from the file extension.
pub fn extractor_for(path: &Path, layout: bool) -> Box<dyn TextExtractor> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => Box::new(PdftotextExtractor::with_layout(layout)),
        "xlsx" | "xlsm" => Box::new(XlsxExtractor),
        _ => Box::new(PlainTextExtractor),
    }
}
