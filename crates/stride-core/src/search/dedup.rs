use crate::search::direction::Direction;
use crate::search::locate::CandidateMatch;
use crate::text::grid::Cell;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct MatchKey {
    phrase: String,
    start: Cell,
    stride: usize,
    direction: Direction,
}

/// Remembers which `(phrase, start, stride, direction)` combinations were
/// already reported during one search run.
#[derive(Debug, Default)]
pub struct Deduplicator {
    seen: HashSet<MatchKey>,
}

impl Deduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time a key is offered, false on every repeat.
    pub fn first_sighting(&mut self, candidate: &CandidateMatch<'_>) -> bool {
        self.seen.insert(MatchKey {
            phrase: candidate.phrase.to_string(),
            start: candidate.start,
            stride: candidate.stride,
            direction: candidate.direction,
        })
    }
}
