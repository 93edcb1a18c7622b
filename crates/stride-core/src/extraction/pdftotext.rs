use crate::error::StrideError;
use crate::extraction::{split_pages, PageContent, TextExtractor};
use std::io::Write;
use std::process::{Command, Output};

/// PDF extraction backend using pdftotext (from poppler-utils).
///
/// Reading order is used by default; `layout` mode keeps the physical column
/// alignment instead.
pub struct PdftotextExtractor {
    layout: bool,
}

impl PdftotextExtractor {
    pub fn new() -> Self {
        PdftotextExtractor { layout: false }
    }

    pub fn with_layout(layout: bool) -> Self {
        PdftotextExtractor { layout }
    }

    /// Check if pdftotext is available on the system.
    pub fn is_available() -> bool {
        Command::new("pdftotext")
            .arg("-v")
            .output()
            .map(|o| o.status.success() || !o.stderr.is_empty())
            .unwrap_or(false)
    }

    fn run(&self, pdf_path: &std::path::Path) -> Result<Output, StrideError> {
        let mut cmd = Command::new("pdftotext");
        if self.layout {
            cmd.arg("-layout");
        }
        cmd.arg("-enc").arg("UTF-8").arg(pdf_path).arg("-"); // output to stdout

        tracing::debug!(layout = self.layout, path = %pdf_path.display(), "running pdftotext");
        cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StrideError::PdftotextNotFound
            } else {
                StrideError::Extraction(format!("pdftotext failed: {}", e))
            }
        })
    }
}

impl Default for PdftotextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdftotextExtractor {
    fn extract_pages(&self, pdf_bytes: &[u8]) -> Result<Vec<PageContent>, StrideError> {
        // Write PDF bytes to a temp file
        let mut tmpfile =
            tempfile::NamedTempFile::new().map_err(|e| StrideError::Extraction(e.to_string()))?;
        tmpfile
            .write_all(pdf_bytes)
            .map_err(|e| StrideError::Extraction(e.to_string()))?;

        let output = self.run(tmpfile.path())?;

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr).to_string();
            return Err(StrideError::PdftotextFailed { code, stderr });
        }

        let text = String::from_utf8_lossy(&output.stdout);
        let pages = split_pages(&text);
        tracing::debug!(pages = pages.len(), bytes = output.stdout.len(), "pdftotext finished");
        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "pdftotext"
    }
}
