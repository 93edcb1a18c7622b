use crate::search::direction::Direction;
use crate::text::grid::{Cell, Grid};

/// A raw hit before filtering: the phrase letters found at a fixed stride
/// and direction from `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch<'a> {
    pub phrase: &'a str,
    pub start: Cell,
    pub stride: usize,
    pub direction: Direction,
    /// One cell per phrase letter, in phrase order.
    pub positions: Vec<Cell>,
}

/// Cells visited from `start` at `stride` steps along `direction`, starting
/// with `start` itself and ending at the first step outside the grid.
///
/// `stride` must be at least 1.
pub fn walk(
    grid: &Grid,
    start: Cell,
    direction: Direction,
    stride: usize,
    backward: bool,
) -> impl Iterator<Item = Cell> + '_ {
    let (dx, dy) = direction.step();
    let sign = if backward { -1 } else { 1 };
    // A stride past i64::MAX cannot land inside any grid.
    let step = i64::try_from(stride).ok().map(|s| s * sign);
    let (x0, y0) = (start.x as i64, start.y as i64);
    (0i64..).map_while(move |k| {
        let offset = if k == 0 { 0 } else { step?.checked_mul(k)? };
        let x = x0.checked_add(dx.checked_mul(offset)?)?;
        let y = y0.checked_add(dy.checked_mul(offset)?)?;
        grid.resolve(x, y)
    })
}

/// Test whether `phrase` is spelled from `start` at `stride` along
/// `direction`. Returns the matched cells on success.
pub fn probe(
    grid: &Grid,
    phrase: &[u8],
    start: Cell,
    stride: usize,
    direction: Direction,
) -> Option<Vec<Cell>> {
    let mut cells = walk(grid, start, direction, stride, false);
    for &expected in phrase {
        match cells.next() {
            Some(cell) if grid.letter(cell) == expected => {}
            _ => return None,
        }
    }
    Some(
        walk(grid, start, direction, stride, false)
            .take(phrase.len())
            .collect(),
    )
}

/// Largest stride at which a phrase of `phrase_len` letters still fits in
/// the grid along some direction. `None` for single letters, which fit at
/// any stride.
pub fn max_fitting_stride(grid: &Grid, phrase_len: usize) -> Option<usize> {
    if phrase_len < 2 {
        return None;
    }
    let span = grid.width().max(grid.row_count());
    Some(span.saturating_sub(1) / (phrase_len - 1))
}

/// Every candidate for `phrase` starting at `start` across the stride range.
pub fn candidates_at<'a>(
    grid: &Grid,
    phrase: &'a str,
    start: Cell,
    min_distance: usize,
    max_distance: usize,
) -> Vec<CandidateMatch<'a>> {
    let bytes = phrase.as_bytes();
    let upper = match max_fitting_stride(grid, bytes.len()) {
        Some(limit) => max_distance.min(limit),
        None => max_distance,
    };

    let mut found = Vec::new();
    for stride in min_distance..=upper {
        for direction in Direction::scanned_at(stride) {
            if let Some(positions) = probe(grid, bytes, start, stride, direction) {
                found.push(CandidateMatch {
                    phrase,
                    start,
                    stride,
                    direction,
                    positions,
                });
            }
        }
    }
    found
}
