use stride_core::observer::SearchObserver;
use stride_core::report::{GridSummary, MatchRecord};

/// Forwards search milestones to `tracing`.
#[derive(Default)]
pub struct LogObserver;

impl SearchObserver for LogObserver {
    fn grid_built(&mut self, grid: &GridSummary) {
        tracing::info!(
            letters = grid.normalized_length,
            width = grid.width,
            rows = grid.rows,
            "grid built"
        );
    }

    fn phrase_skipped(&mut self, raw: &str) {
        tracing::warn!(phrase = raw, "phrase has no letters, skipping");
    }

    fn phrase_started(&mut self, phrase: &str, index: usize, total: usize) {
        tracing::info!("searching '{}' ({}/{})", phrase, index + 1, total);
    }

    fn match_found(&mut self, record: &MatchRecord) {
        tracing::debug!(
            phrase = %record.phrase,
            x = record.start.x,
            y = record.start.y,
            stride = record.stride,
            direction = %record.direction,
            "match found"
        );
    }

    fn phrase_finished(&mut self, phrase: &str, matches: usize) {
        tracing::info!(phrase, matches, "phrase done");
    }
}
