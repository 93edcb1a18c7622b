//! Surrounding context for a confirmed match.
//!
//! Two views are produced: the *hidden paragraph*, sampled from the grid at
//! the match's own stride and direction, and the *literal context*, windows
//! of the original document text around each matched letter.
//!
//! Known limitation: literal windows are located by the letter's offset in
//! the normalized text. Normalization drops spaces, punctuation and marks,
//! so that offset only approximates the position in the original text and
//! drifts further the deeper into the document the letter sits.

use crate::search::direction::Direction;
use crate::search::locate::walk;
use crate::text::grid::{Cell, Grid};

/// Sample up to `length` letters around `start` at `stride` along
/// `direction`: `length / 2` before the start cell, the start cell, and the
/// rest after it. Sampling stops early at the grid edge.
pub fn hidden_paragraph(
    grid: &Grid,
    start: Cell,
    stride: usize,
    direction: Direction,
    length: usize,
) -> String {
    if length == 0 {
        return String::new();
    }
    let before = length / 2;
    let from_start = length - before;

    let mut backward: Vec<u8> = walk(grid, start, direction, stride, true)
        .skip(1)
        .take(before)
        .map(|cell| grid.letter(cell))
        .collect();
    backward.reverse();

    let forward = walk(grid, start, direction, stride, false)
        .take(from_start)
        .map(|cell| grid.letter(cell));

    backward
        .into_iter()
        .chain(forward)
        .map(char::from)
        .collect()
}

/// Byte range of the paragraph replaced by the bracketed match:
/// `[L/2 - floor(p/2), L/2 + ceil(p/2))`, clamped to the paragraph.
pub fn splice_range(paragraph_len: usize, length: usize, phrase_len: usize) -> (usize, usize) {
    let mid = length / 2;
    let lo = mid.saturating_sub(phrase_len / 2).min(paragraph_len);
    let hi = (mid + phrase_len.div_ceil(2)).min(paragraph_len).max(lo);
    (lo, hi)
}

/// Replace the middle of the paragraph with `[letters]`.
pub fn highlight(paragraph: &str, letters: &str, length: usize) -> String {
    let (lo, hi) = splice_range(paragraph.len(), length, letters.len());
    format!(
        "{}[{}]{}",
        &paragraph[..lo],
        letters,
        &paragraph[hi..]
    )
}

/// Up to `radius` characters either side of `index` plus the character at
/// `index`, clipped to the text. Empty when `index` is past the end.
pub fn literal_window(original: &[char], index: usize, radius: usize) -> String {
    if index >= original.len() {
        return String::new();
    }
    let lo = index.saturating_sub(radius);
    let hi = index.saturating_add(radius).saturating_add(1).min(original.len());
    original[lo..hi].iter().collect()
}

/// One `[...window...]` per matched letter offset, space separated.
pub fn literal_context(original: &[char], offsets: &[usize], radius: usize) -> String {
    offsets
        .iter()
        .map(|&offset| format!("[...{}...]", literal_window(original, offset, radius)))
        .collect::<Vec<_>>()
        .join(" ")
}
