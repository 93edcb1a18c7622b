use crate::report::{GridSummary, MatchRecord};

/// Progress hooks invoked at coarse milestones of a search run.
///
/// Hooks only observe; they never influence which matches are found.
pub trait SearchObserver {
    fn grid_built(&mut self, _grid: &GridSummary) {}

    fn phrase_skipped(&mut self, _raw: &str) {}

    /// `index` is zero-based among the phrases actually searched.
    fn phrase_started(&mut self, _phrase: &str, _index: usize, _total: usize) {}

    fn match_found(&mut self, _record: &MatchRecord) {}

    fn phrase_finished(&mut self, _phrase: &str, _matches: usize) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
