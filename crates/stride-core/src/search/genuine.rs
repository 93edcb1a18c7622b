use crate::search::direction::Direction;
use crate::search::locate::{walk, CandidateMatch};
use crate::text::grid::{Cell, Grid};

/// Read up to `window_factor * phrase.len()` letters from `start` along
/// `direction` at stride 1 and report whether `phrase` occurs in them
/// contiguously.
pub fn reads_as_plain_text(
    grid: &Grid,
    start: Cell,
    direction: Direction,
    phrase: &str,
    window_factor: usize,
) -> bool {
    let scratch: String = walk(grid, start, direction, 1, false)
        .take(window_factor * phrase.len())
        .map(|cell| grid.letter(cell) as char)
        .collect();
    scratch.contains(phrase)
}

/// Only stride-1 candidates are checked; longer strides are always genuine.
pub fn is_genuine(grid: &Grid, candidate: &CandidateMatch<'_>, window_factor: usize) -> bool {
    candidate.stride != 1
        || !reads_as_plain_text(
            grid,
            candidate.start,
            candidate.direction,
            candidate.phrase,
            window_factor,
        )
}
