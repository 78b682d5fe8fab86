//! Relevant-hunk selection for a line span.

use super::helpers::{LineKind, classify, parse_hunk_header, split_lines};

/// Lines of trailing context emitted past `end_line` before selection stops.
pub const TRAILING_CONTEXT_LINES: usize = 5;

/// Return the hunk(s) of `diff_text` that overlap the **one-based**,
/// inclusive new-file span `start_line..=end_line`.
///
/// Emission starts at an overlapping hunk's header and copies its body
/// verbatim. Once the new-file cursor passes
/// `end_line + TRAILING_CONTEXT_LINES`, the whole scan stops, so later hunks
/// are never considered even when they overlap too.
///
/// Returns an empty string for an empty diff or when no hunk overlaps.
///
/// Callers holding a zero-based [`LineRange`](super::LineRange) must add one
/// to both bounds.
pub fn relevant_hunk(diff_text: &str, start_line: usize, end_line: usize) -> String {
    if diff_text.is_empty() {
        return String::new();
    }

    let lines = split_lines(diff_text);
    let stop_after = end_line.saturating_add(TRAILING_CONTEXT_LINES);
    let mut selected: Vec<&str> = Vec::new();
    let mut in_relevant_hunk = false;
    let mut current_line = 0usize;

    for (idx, &line) in lines.iter().enumerate() {
        let kind = classify(line);

        if kind == LineKind::HunkHeader {
            // Unparsable headers neither change state nor get emitted.
            if let Some(header) = parse_hunk_header(line) {
                current_line = header.new_start;
                let hunk_end = hunk_end_line(&lines[idx + 1..], header.new_start);

                in_relevant_hunk = hunk_overlaps(current_line, hunk_end, start_line, end_line);
                if in_relevant_hunk {
                    selected.push(line);
                }
            }
            continue;
        }

        if !in_relevant_hunk {
            continue;
        }

        selected.push(line);
        if kind.advances_new_line() {
            current_line = current_line.saturating_add(1);
        }
        if current_line > stop_after {
            break;
        }
    }

    selected.join("\n")
}

/// New-file cursor value after walking a hunk body: `new_start` plus one
/// for every line up to the next header that is not a removal.
///
/// This is one past the hunk's last new-file line.
fn hunk_end_line(body: &[&str], new_start: usize) -> usize {
    let kept = body
        .iter()
        .take_while(|line| classify(line) != LineKind::HunkHeader)
        .filter(|line| classify(line) != LineKind::Removed)
        .count();
    new_start.saturating_add(kept)
}

/// Overlap rule between a hunk's new-file span and the requested span.
///
/// The second disjunct is implied by the first whenever
/// `start_line <= end_line`; it only matters for inverted requests, where
/// it still selects a hunk containing `start_line`.
fn hunk_overlaps(hunk_start: usize, hunk_end: usize, start_line: usize, end_line: usize) -> bool {
    (hunk_start <= end_line && hunk_end >= start_line)
        || (hunk_start <= start_line && hunk_end >= start_line)
}
