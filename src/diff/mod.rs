//! Unified diff parsing for diffcue.
//!
//! Two pure functions form the core, both operating on a single file's diff
//! text in new-file line numbering:
//! - [`ranges_from_diff`]: zero-based ranges of added lines, used to place
//!   annotation anchors
//! - [`relevant_hunk`]: the hunk slice overlapping a one-based line span,
//!   used to build feedback payloads
//!
//! Neither function fails. Malformed hunk headers are skipped and empty input
//! produces empty output, so partial or truncated diffs are still usable.
//!
//! The [`file_diff`] and [`changed_ranges`] helpers fetch the diff text from
//! git first.

mod api;
mod helpers;
mod ranges;
mod relevant;


// Re-export public API
pub use api::{changed_ranges, file_diff};
pub use helpers::{HunkHeader, LineKind, classify, parse_hunk_header};
pub use ranges::{LineRange, ranges_from_diff};
pub use relevant::{TRAILING_CONTEXT_LINES, relevant_hunk};
