//! Feedback context: what a reviewer selected, and the diff around it.
//!
//! This is where the two numbering conventions meet. Document ranges are
//! zero-based [`LineRange`]s; [`DiffContext`] and [`relevant_hunk`] are
//! one-based.

use crate::config::Config;
use crate::diff::{LineRange, file_diff, relevant_hunk};
use crate::error::{DiffcueError, Result};
use crate::git::{get_repo_root, relative_to_repo};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A file's current text.
#[derive(Debug, Clone)]
pub struct Document {
    /// Path the document was loaded from.
    pub path: PathBuf,
    /// Full text content.
    pub text: String,
}

impl Document {
    /// Read a document from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            DiffcueError::UserError(format!("failed to read '{}': {}", path.display(), e))
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Build a document from in-memory text.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Number of lines, counting a final unterminated line.
    pub fn line_count(&self) -> usize {
        self.text.lines().count()
    }

    /// Text of the zero-based inclusive line range, lines joined by `\n`.
    ///
    /// Lines past the end of the document are ignored.
    pub fn text_in(&self, range: LineRange) -> String {
        self.text
            .lines()
            .skip(range.start)
            .take(range.end.saturating_sub(range.start) + 1)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Everything needed to phrase a change request about a line span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffContext {
    /// Path of the file as given by the caller.
    pub file_path: String,
    /// Path relative to the repository root (falls back to `file_path`).
    pub relative_path: String,
    /// First selected line (one-based).
    pub start_line: usize,
    /// Last selected line (one-based).
    pub end_line: usize,
    /// Text of the selected lines.
    pub selected_code: String,
    /// Hunk slice overlapping the selection, or empty.
    pub relevant_diff_hunk: String,
}

/// Build a [`DiffContext`] from an already fetched diff.
///
/// `range` is zero-based; it is shifted by one for both the context line
/// numbers and the [`relevant_hunk`] lookup.
pub fn extract_diff_context(
    document: &Document,
    range: LineRange,
    relative_path: &str,
    diff_text: &str,
) -> DiffContext {
    let start_line = range.start + 1;
    let end_line = range.end + 1;

    DiffContext {
        file_path: document.path.display().to_string(),
        relative_path: relative_path.to_string(),
        start_line,
        end_line,
        selected_code: document.text_in(range),
        relevant_diff_hunk: relevant_hunk(diff_text, start_line, end_line),
    }
}

/// Load `path`, fetch its diff from git, and build a [`DiffContext`].
///
/// Only an unreadable file is an error. When the file is outside a
/// repository or the diff cannot be fetched, a warning is printed and the
/// context is built without a hunk.
pub fn resolve_diff_context<P: AsRef<Path>>(
    path: P,
    range: LineRange,
    config: &Config,
) -> Result<DiffContext> {
    let path = path.as_ref();
    let document = Document::load(path)?;

    match locate_and_diff(path, config) {
        Ok((relative_path, diff)) => Ok(extract_diff_context(
            &document,
            range,
            &relative_path,
            &diff,
        )),
        Err(e) => {
            eprintln!("Warning: continuing without diff context: {}", e);
            let fallback = path.display().to_string();
            Ok(extract_diff_context(&document, range, &fallback, ""))
        }
    }
}

/// Repo-relative path and diff text for `path`.
pub(crate) fn locate_and_diff(path: &Path, config: &Config) -> Result<(String, String)> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let repo_root = get_repo_root(parent)?;
    let relative_path = relative_to_repo(&repo_root, path)?;
    let diff = file_diff(&repo_root, &relative_path, config.diff_mode)?;
    Ok((relative_path, diff))
}
