//! Hunk header parsing and line classification shared by the range
//! extractor and the relevant-hunk selector.

use regex::Regex;
use std::sync::LazyLock;

/// Hunk header pattern. Unanchored, so a header followed by a
/// function-context suffix (`@@ -1 +1 @@ fn main()`) still matches.
static HUNK_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@@ -(\d+)(?:,(\d+))? \+(\d+)(?:,(\d+))? @@").expect("Invalid hunk header regex")
});

/// A parsed `@@ -old_start[,old_count] +new_start[,new_count] @@` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HunkHeader {
    /// First line of the hunk in the old file (1-based).
    pub old_start: usize,
    /// Number of old-file lines in the hunk (1 when omitted).
    pub old_count: usize,
    /// First line of the hunk in the new file (1-based).
    pub new_start: usize,
    /// Number of new-file lines in the hunk (1 when omitted).
    pub new_count: usize,
}

/// Classification of a single diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Starts with `@@`, whether or not the header parses.
    HunkHeader,
    /// Starts with `+` but not `+++`.
    Added,
    /// Starts with `-`, including `---` file markers.
    Removed,
    /// Anything else: ` `-prefixed lines, blank lines, `\ No newline ...`.
    Context,
}

impl LineKind {
    /// Whether a line of this kind exists in the new file.
    pub fn advances_new_line(self) -> bool {
        matches!(self, LineKind::Added | LineKind::Context)
    }
}

/// Classify a diff line. Rules are ordered; the first match wins.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with("@@") {
        LineKind::HunkHeader
    } else if line.starts_with('+') && !line.starts_with("+++") {
        LineKind::Added
    } else if line.starts_with('-') {
        LineKind::Removed
    } else {
        LineKind::Context
    }
}

/// Parse a hunk header line.
///
/// Returns `None` when the line does not contain a well-formed header or
/// `new_start` does not fit in `usize`. Callers treat `None` as noise and
/// keep scanning. The other three numbers are informational and saturate at
/// `usize::MAX` instead.
pub fn parse_hunk_header(line: &str) -> Option<HunkHeader> {
    let caps = HUNK_HEADER_REGEX.captures(line)?;

    // Captures are all digits, so parsing only fails on overflow.
    let lenient = |idx: usize, default: usize| {
        caps.get(idx)
            .map_or(default, |m| m.as_str().parse().unwrap_or(usize::MAX))
    };

    Some(HunkHeader {
        old_start: lenient(1, 1),
        old_count: lenient(2, 1),
        new_start: caps.get(3)?.as_str().parse().ok()?,
        new_count: lenient(4, 1),
    })
}

/// Split diff text into lines on `\n` only.
///
/// A trailing newline yields a final empty line, which classifies as
/// context. Both algorithms count it, so it must not be dropped here.
pub(super) fn split_lines(diff_text: &str) -> Vec<&str> {
    diff_text.split('\n').collect()
}
