pub mod cancel;
pub mod dedup;
pub mod direction;
pub mod genuine;
pub mod locate;

use crate::config::SearchParams;
use crate::error::StrideError;
use crate::observer::SearchObserver;
use crate::report::{build_record, GridSummary, MatchRecord, SearchReport};
use crate::text::grid::Grid;
use crate::text::normalize::normalize_text;
use cancel::CancelFlag;
use dedup::Deduplicator;
use genuine::is_genuine;
use locate::candidates_at;

/// Run a full search over `text` for every phrase.
///
/// Parameters are validated first, then blank input is rejected with
/// `EmptyInput`. Phrases that normalize to nothing are skipped and listed
/// in the report.
pub fn run<S: AsRef<str>>(
    text: &str,
    phrases: &[S],
    params: &SearchParams,
    observer: &mut dyn SearchObserver,
    cancel: Option<&CancelFlag>,
) -> Result<SearchReport, StrideError> {
    params.validate()?;

    if text.trim().is_empty() {
        return Err(StrideError::EmptyInput);
    }
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return Err(StrideError::EmptyInput);
    }

    let grid = Grid::square(&normalized);
    let summary = GridSummary::of(&grid);
    observer.grid_built(&summary);

    let mut phrases_searched = Vec::new();
    let mut phrases_skipped = Vec::new();
    for raw in phrases {
        let raw = raw.as_ref();
        let phrase = normalize_text(raw);
        if phrase.is_empty() {
            observer.phrase_skipped(raw);
            phrases_skipped.push(raw.to_string());
        } else {
            phrases_searched.push(phrase);
        }
    }

    let original: Vec<char> = text.chars().collect();
    let mut dedup = Deduplicator::new();
    let mut matches = Vec::new();

    for (index, phrase) in phrases_searched.iter().enumerate() {
        check_cancelled(cancel)?;
        observer.phrase_started(phrase, index, phrases_searched.len());

        let found = scan_phrase(
            &grid,
            &original,
            phrase,
            params,
            &mut dedup,
            observer,
            cancel,
        )?;
        observer.phrase_finished(phrase, found.len());
        matches.extend(found);
    }

    Ok(SearchReport {
        grid: summary,
        params: params.clone(),
        phrases_searched,
        phrases_skipped,
        matches,
    })
}

fn scan_phrase(
    grid: &Grid,
    original: &[char],
    phrase: &str,
    params: &SearchParams,
    dedup: &mut Deduplicator,
    observer: &mut dyn SearchObserver,
    cancel: Option<&CancelFlag>,
) -> Result<Vec<MatchRecord>, StrideError> {
    let first = phrase.as_bytes()[0];
    let mut found = Vec::new();

    for (cell, letter) in grid.cells() {
        if letter != first {
            continue;
        }
        check_cancelled(cancel)?;

        let candidates = candidates_at(
            grid,
            phrase,
            cell,
            params.min_distance,
            params.max_distance,
        );
        for candidate in candidates {
            if !is_genuine(grid, &candidate, params.plain_text_window) {
                continue;
            }
            if !dedup.first_sighting(&candidate) {
                continue;
            }
            let record = build_record(grid, original, &candidate, params);
            observer.match_found(&record);
            found.push(record);
        }
    }

    Ok(found)
}

fn check_cancelled(cancel: Option<&CancelFlag>) -> Result<(), StrideError> {
    match cancel {
        Some(flag) if flag.is_cancelled() => Err(StrideError::Cancelled),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::NoopObserver;
    use super::direction::Direction;

    fn search<S: AsRef<str>>(
        text: &str,
        phrases: &[S],
        params: &SearchParams,
    ) -> Result<SearchReport, StrideError> {
        run(text, phrases, params, &mut NoopObserver, None)
    }

    #[derive(Default)]
    struct Recorder {
        grids: Vec<GridSummary>,
        skipped: Vec<String>,
        started: Vec<(String, usize, usize)>,
        found: usize,
        finished: Vec<(String, usize)>,
    }

    impl SearchObserver for Recorder {
        fn grid_built(&mut self, grid: &GridSummary) {
            self.grids.push(*grid);
        }
        fn phrase_skipped(&mut self, raw: &str) {
            self.skipped.push(raw.to_string());
        }
        fn phrase_started(&mut self, phrase: &str, index: usize, total: usize) {
            self.started.push((phrase.to_string(), index, total));
        }
        fn match_found(&mut self, _record: &MatchRecord) {
            self.found += 1;
        }
        fn phrase_finished(&mut self, phrase: &str, matches: usize) {
            self.finished.push((phrase.to_string(), matches));
        }
    }

    #[test]
    fn test_empty_text_is_an_error() {
        let err = search("", &["TEST"], &SearchParams::default()).unwrap_err();
        assert!(matches!(err, StrideError::EmptyInput));
        let err = search("  \n\t ", &["TEST"], &SearchParams::default()).unwrap_err();
        assert!(matches!(err, StrideError::EmptyInput));
    }

    #[test]
    fn test_text_without_letters_is_empty_input() {
        let err = search("12 34 -- 56!", &["TEST"], &SearchParams::default()).unwrap_err();
        assert!(matches!(err, StrideError::EmptyInput));
    }

    #[test]
    fn test_empty_phrase_is_skipped_not_error() {
        let report = search("ABCABC", &[""], &SearchParams::default()).unwrap();
        assert!(report.matches.is_empty());
        assert!(report.phrases_searched.is_empty());
        assert_eq!(report.phrases_skipped, vec![String::new()]);
    }

    #[test]
    fn test_invalid_range_rejected_before_search() {
        let err = search("ABCABC", &["AB"], &SearchParams::with_distances(5, 2)).unwrap_err();
        assert!(matches!(err, StrideError::InvalidParameters(_)));
    }

    #[test]
    fn test_single_stride_three_hit() {
        // A X X B
        // X X X X
        // X X X X
        // X X X X
        let text = "a x x b, x x x x. x x x x x x x x";
        let report = search(text, &["AB"], &SearchParams::with_distances(2, 5)).unwrap();
        assert_eq!(report.grid.width, 4);
        assert_eq!(report.matches.len(), 1);
        let m = &report.matches[0];
        assert_eq!(m.stride, 3);
        assert_eq!(m.direction, Direction::Right);
        assert_eq!(m.letters, "AB");
        assert_eq!(m.linear_distance, 3);
    }

    #[test]
    fn test_phrase_normalized_before_search() {
        let text = "a x x b, x x x x. x x x x x x x x";
        let report = search(text, &["a-b"], &SearchParams::with_distances(2, 5)).unwrap();
        assert_eq!(report.phrases_searched, vec!["AB".to_string()]);
        assert_eq!(report.matches.len(), 1);
    }

    #[test]
    fn test_duplicate_phrases_reported_once() {
        let text = "a x x b, x x x x. x x x x x x x x";
        let params = SearchParams::with_distances(2, 5);
        let report = search(text, &["AB", "ab", "A.B.", "XB", "ab"], &params).unwrap();
        assert_eq!(report.phrases_searched.len(), 5);
        assert_eq!(report.matches_for("AB").count(), 1);
        let distinct: Vec<&str> = report.distinct_phrases().collect();
        assert_eq!(distinct, vec!["AB", "XB"]);
    }

    #[test]
    fn test_stride_one_plain_reading_rejected() {
        // A X X X
        // B X X X
        // ...
        let text = "AXXXBXXXXXXXXXXX";
        let report = search(text, &["AB"], &SearchParams::with_distances(1, 3)).unwrap();
        assert!(report.matches.is_empty());
    }

    #[test]
    fn test_no_match_is_success() {
        let report = search("ABCDEFGHIJKLMNOP", &["ZZ"], &SearchParams::default()).unwrap();
        assert_eq!(report.phrases_searched, vec!["ZZ".to_string()]);
        assert!(!report.has_matches());
    }

    #[test]
    fn test_centered_highlight_position() {
        // 50 x 50 grid of repeating ABCDE: ACE sits at stride 2 along every row
        let text = "ABCDE".repeat(500);
        let params = SearchParams {
            min_distance: 2,
            max_distance: 3,
            paragraph_length: 20,
            ..Default::default()
        };
        let report = search(&text, &["ACE"], &params).unwrap();
        let centered = report
            .matches
            .iter()
            .find(|m| m.hidden_paragraph.len() == 20)
            .expect("some match away from the edges");
        // start cell sits at L/2, splice covers [L/2 - 1, L/2 + 2)
        assert_eq!(&centered.hidden_paragraph[10..13], "ACE");
        assert_eq!(&centered.highlighted_paragraph[9..14], "[ACE]");
        assert_eq!(centered.highlighted_paragraph.len(), 22);
    }

    #[test]
    fn test_cancelled_search_returns_error() {
        let flag = CancelFlag::new();
        flag.cancel();
        let err = run(
            "ABCDEFGHIJKLMNOP",
            &["AF"],
            &SearchParams::default(),
            &mut NoopObserver,
            Some(&flag),
        )
        .unwrap_err();
        assert!(matches!(err, StrideError::Cancelled));
    }

    /// Trips the shared flag as soon as the given phrase starts.
    struct CancelOnStart {
        flag: CancelFlag,
        phrase: &'static str,
        matches_seen: usize,
    }

    impl SearchObserver for CancelOnStart {
        fn phrase_started(&mut self, phrase: &str, _index: usize, _total: usize) {
            if phrase == self.phrase {
                self.flag.cancel();
            }
        }
        fn match_found(&mut self, _record: &MatchRecord) {
            self.matches_seen += 1;
        }
    }

    #[test]
    fn test_cancel_during_phrase_scan_stops_the_run() {
        let text = "a x x b, x x x x. x x x x x x x x";
        let flag = CancelFlag::new();
        let mut observer = CancelOnStart {
            flag: flag.clone(),
            phrase: "XB",
            matches_seen: 0,
        };
        let result = run(
            text,
            &["AB", "XB", "XX"],
            &SearchParams::with_distances(2, 5),
            &mut observer,
            Some(&flag),
        );
        // the first phrase completed, then the start-cell check fired
        assert_eq!(observer.matches_seen, 1);
        assert!(matches!(result, Err(StrideError::Cancelled)));
    }

    #[test]
    fn test_single_letter_at_huge_stride() {
        let stride = usize::MAX / 4;
        let params = SearchParams::with_distances(stride, stride);
        let report = search("ABCDEFGHIJKLMNOP", &["F"], &params).unwrap();
        // every direction is scanned at stride > 1; only the start cell fits
        assert_eq!(report.matches.len(), 8);
        for m in &report.matches {
            assert_eq!(m.stride, stride);
            assert_eq!(m.hidden_paragraph, "F");
            assert_eq!(m.linear_distance, 0);
        }
    }

    #[test]
    fn test_observer_sees_milestones() {
        let text = "a x x b, x x x x. x x x x x x x x";
        let mut recorder = Recorder::default();
        let report = run(
            text,
            &["AB", "!!", "XB"],
            &SearchParams::with_distances(2, 5),
            &mut recorder,
            None,
        )
        .unwrap();

        assert_eq!(recorder.grids.len(), 1);
        assert_eq!(recorder.grids[0].rows, 4);
        assert_eq!(recorder.skipped, vec!["!!".to_string()]);
        assert_eq!(recorder.started.len(), 2);
        assert_eq!(recorder.started[1], ("XB".to_string(), 1, 2));
        assert_eq!(recorder.found, report.matches.len());
        assert_eq!(recorder.finished[0], ("AB".to_string(), 1));
    }
}
