//! Added-line range extraction.

use serde::Serialize;

use super::helpers::{LineKind, classify, parse_hunk_header, split_lines};

/// A closed interval of **zero-based** new-file line numbers covering a run
/// of consecutively added lines.
///
/// Zero-based to match editor document coordinates. Note that
/// [`relevant_hunk`](super::relevant_hunk) takes one-based line numbers;
/// convert with `start + 1` / `end + 1` when feeding a range back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineRange {
    /// First line of the range (zero-based, inclusive).
    pub start: usize,
    /// Last line of the range (zero-based, inclusive). Always `>= start`.
    pub end: usize,
}

impl LineRange {
    /// Create a range. Swaps the bounds if given in reverse order.
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// A range covering a single line.
    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// Whether the zero-based `line` falls inside this range.
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }
}

/// An added-line run being tracked, in one-based new-file numbering.
#[derive(Debug, Clone, Copy)]
struct OpenRun {
    first: usize,
    last: usize,
}

impl OpenRun {
    fn close(self) -> LineRange {
        // Hunk headers with `+0` only appear on deletions, which carry no
        // added lines; saturate rather than underflow on corrupt input.
        LineRange {
            start: self.first.saturating_sub(1),
            end: self.last.saturating_sub(1),
        }
    }
}

/// Extract the ranges of added lines from a single file's unified diff.
///
/// Ranges are zero-based, inclusive, in order of appearance. Each range is a
/// maximal run of `+` lines: any context or removed line ends it, and so does
/// the end of the hunk.
///
/// Only `@@` headers and line prefixes are interpreted. File headers are
/// tolerated, and a header that fails to parse is skipped together with the
/// body lines that follow it.
///
/// ```
/// use diffcue::diff::{LineRange, ranges_from_diff};
///
/// let diff = "@@ -1,3 +1,3 @@\n a\n-b\n+c\n+d\n e";
/// assert_eq!(ranges_from_diff(diff), vec![LineRange::new(1, 2)]);
/// ```
pub fn ranges_from_diff(diff_text: &str) -> Vec<LineRange> {
    let mut ranges = Vec::new();
    // New-file cursor of the hunk being scanned; None outside a valid hunk.
    let mut cursor: Option<usize> = None;
    let mut run: Option<OpenRun> = None;

    for line in split_lines(diff_text) {
        match classify(line) {
            LineKind::HunkHeader => {
                if let Some(open) = run.take() {
                    ranges.push(open.close());
                }
                cursor = parse_hunk_header(line).map(|header| header.new_start);
            }
            kind => {
                let Some(current) = cursor.as_mut() else {
                    continue;
                };

                if kind == LineKind::Added {
                    match run.as_mut() {
                        Some(open) => open.last = *current,
                        None => {
                            run = Some(OpenRun {
                                first: *current,
                                last: *current,
                            })
                        }
                    }
                } else if let Some(open) = run.take() {
                    ranges.push(open.close());
                }

                if kind.advances_new_line() {
                    *current = current.saturating_add(1);
                }
            }
        }
    }

    if let Some(open) = run {
        ranges.push(open.close());
    }

    ranges
}
