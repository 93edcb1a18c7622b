use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::StrideError;
use crate::extraction::{PageContent, TextExtractor};

/// Spreadsheet workbooks: one page per worksheet, one line per non-empty
/// row with its cells joined by a space.
#[derive(Debug, Default, Clone, Copy)]
pub struct XlsxExtractor;

impl TextExtractor for XlsxExtractor {
    fn extract_pages(&self, bytes: &[u8]) -> Result<Vec<PageContent>, StrideError> {
        let cursor = Cursor::new(bytes);
        let mut workbook: Xlsx<_> = calamine::open_workbook_from_rs(cursor)
            .map_err(|e| StrideError::Extraction(format!("failed to open xlsx: {e}")))?;

        let mut pages = Vec::new();
        for (i, name) in workbook.sheet_names().into_iter().enumerate() {
            let range = workbook.worksheet_range(&name).map_err(|e| {
                StrideError::Extraction(format!("failed to read sheet '{name}': {e}"))
            })?;

            let lines: Vec<String> = range
                .rows()
                .map(row_text)
                .filter(|line| !line.is_empty())
                .collect();
            tracing::debug!(sheet = %name, lines = lines.len(), "read worksheet");

            pages.push(PageContent {
                page_number: i + 1,
                lines,
            });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "xlsx"
    }
}

fn row_text(row: &[Data]) -> String {
    row.iter()
        .filter_map(cell_text)
        .collect::<Vec<_>>()
        .join(" ")
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        _ => Some(format!("{cell}")),
    }
}
