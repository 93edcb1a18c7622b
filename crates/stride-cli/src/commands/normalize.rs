use std::path::PathBuf;

use stride_core::error::StrideError;
use stride_core::text::grid::Grid;
use stride_core::text::normalize::normalize_text;

use crate::input::extractor_for;

pub fn run(input_file: PathBuf, show_grid: bool, layout: bool) -> Result<(), StrideError> {
    let bytes = std::fs::read(&input_file)?;
    let extractor = extractor_for(&input_file, layout);
    let text = stride_core::extract_text(&bytes, &*extractor)?;

    let normalized = normalize_text(&text);
    if normalized.is_empty() {
        return Err(StrideError::EmptyInput);
    }

    if !show_grid {
        println!("{normalized}");
        return Ok(());
    }

    let grid = Grid::square(&normalized);
    println!(
        "{} letters, {} x {} grid (last row {} letters)\n",
        grid.len(),
        grid.width(),
        grid.row_count(),
        grid.rows().last().map(str::len).unwrap_or(0)
    );
    let label_width = grid.row_count().saturating_sub(1).to_string().len();
    for (y, row) in grid.rows().enumerate() {
        println!("  {:>width$}  {}", y, row, width = label_width);
    }

    Ok(())
}
