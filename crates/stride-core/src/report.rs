use crate::config::SearchParams;
use crate::context::{hidden_paragraph, highlight, literal_context};
use crate::search::direction::Direction;
use crate::search::locate::CandidateMatch;
use crate::text::grid::{Cell, Grid};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One letter of a reported match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedLetter {
    pub x: usize,
    pub y: usize,
    /// Offset of the letter in the normalized text.
    pub offset: usize,
    pub letter: char,
}

/// A confirmed, deduplicated equidistant letter sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Normalized phrase that was found.
    pub phrase: String,
    pub start: Cell,
    /// Offset of the first letter in the normalized text.
    pub start_offset: usize,
    pub stride: usize,
    pub direction: Direction,
    /// Letters read back from the grid, in phrase order.
    pub letters: String,
    pub positions: Vec<MatchedLetter>,
    /// Normalized-text offset between the first two letters (0 for single letters).
    pub linear_distance: i64,
    /// Letters sampled at the match's stride and direction around the start cell.
    pub hidden_paragraph: String,
    /// `hidden_paragraph` with the middle replaced by `[letters]`.
    pub highlighted_paragraph: String,
    /// `[...window...]` snippets of the original text, one per letter.
    pub literal_context: String,
}

/// Grid dimensions for a run, reported to observers and callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSummary {
    pub normalized_length: usize,
    pub width: usize,
    pub rows: usize,
}

impl GridSummary {
    pub fn of(grid: &Grid) -> Self {
        Self {
            normalized_length: grid.len(),
            width: grid.width(),
            rows: grid.row_count(),
        }
    }
}

/// Result of a completed search.
///
/// An empty `matches` list with phrases searched means nothing was found;
/// an empty `phrases_searched` means no usable phrase was supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub grid: GridSummary,
    pub params: SearchParams,
    /// Normalized phrases that were scanned, in input order.
    pub phrases_searched: Vec<String>,
    /// Raw phrases dropped because they normalize to nothing.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phrases_skipped: Vec<String>,
    pub matches: Vec<MatchRecord>,
}

impl SearchReport {
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Searched phrases with repeats removed, first occurrence first.
    pub fn distinct_phrases(&self) -> impl Iterator<Item = &str> {
        let mut seen = HashSet::new();
        self.phrases_searched
            .iter()
            .map(String::as_str)
            .filter(move |p| seen.insert(*p))
    }

    /// Matches for one normalized phrase.
    pub fn matches_for<'a>(&'a self, phrase: &'a str) -> impl Iterator<Item = &'a MatchRecord> {
        self.matches.iter().filter(move |m| m.phrase == phrase)
    }
}

/// Assemble the reported record for a genuine, first-seen candidate.
pub fn build_record(
    grid: &Grid,
    original: &[char],
    candidate: &CandidateMatch<'_>,
    params: &SearchParams,
) -> MatchRecord {
    let positions: Vec<MatchedLetter> = candidate
        .positions
        .iter()
        .map(|&cell| MatchedLetter {
            x: cell.x,
            y: cell.y,
            offset: grid.linear_index(cell),
            letter: char::from(grid.letter(cell)),
        })
        .collect();

    let letters: String = positions.iter().map(|p| p.letter).collect();
    let offsets: Vec<usize> = positions.iter().map(|p| p.offset).collect();

    let linear_distance = match offsets.as_slice() {
        [first, second, ..] => *second as i64 - *first as i64,
        _ => 0,
    };

    let paragraph = hidden_paragraph(
        grid,
        candidate.start,
        candidate.stride,
        candidate.direction,
        params.paragraph_length,
    );
    let highlighted = highlight(&paragraph, &letters, params.paragraph_length);

    MatchRecord {
        phrase: candidate.phrase.to_string(),
        start: candidate.start,
        start_offset: grid.linear_index(candidate.start),
        stride: candidate.stride,
        direction: candidate.direction,
        letters,
        literal_context: literal_context(original, &offsets, params.context_radius),
        positions,
        linear_distance,
        hidden_paragraph: paragraph,
        highlighted_paragraph: highlighted,
    }
}
