use stride_core::report::{MatchRecord, SearchReport};

pub fn print(report: &SearchReport, details: bool) {
    println!(
        "Grid: {} letters, {} x {} (strides {}..={})\n",
        report.grid.normalized_length,
        report.grid.width,
        report.grid.rows,
        report.params.min_distance,
        report.params.max_distance
    );

    if !report.phrases_skipped.is_empty() {
        println!(
            "  Skipped (no letters): {}\n",
            report
                .phrases_skipped
                .iter()
                .map(|p| format!("'{p}'"))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    if report.phrases_searched.is_empty() {
        println!("  No searchable phrases supplied.");
        return;
    }

    for phrase in report.distinct_phrases() {
        let hits: Vec<&MatchRecord> = report.matches_for(phrase).collect();
        println!("=== {} ===\n", phrase);

        if hits.is_empty() {
            println!("  No hidden occurrences.\n");
            continue;
        }

        println!(
            "  {:>6}  {:<10}  {:>6}  {:>6}  {:>8}  {:>9}",
            "Stride", "Direction", "X", "Y", "Offset", "Distance"
        );
        for m in &hits {
            println!(
                "  {:>6}  {:<10}  {:>6}  {:>6}  {:>8}  {:>9}",
                m.stride,
                m.direction.label(),
                m.start.x,
                m.start.y,
                m.start_offset,
                m.linear_distance
            );
            if details {
                print_details(m);
            }
        }
        println!();
    }

    if report.has_matches() {
        println!(
            "{} match(es) across {} phrase(s).",
            report.matches.len(),
            report.distinct_phrases().count()
        );
    } else {
        println!("No hidden occurrences of any phrase.");
    }
}

fn print_details(m: &MatchRecord) {
    println!("      Hidden:  {}", m.highlighted_paragraph);
    println!("      Literal: {}", single_line(&m.literal_context));
    println!();
}

/// Literal windows may span line breaks; keep each record on one line.
fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect()
}
