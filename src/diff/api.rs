//! Git-backed entry points: fetch a file's diff, then run the core on it.

use crate::config::DiffMode;
use crate::error::Result;
use crate::git::run_git_raw;
use std::path::Path;

use super::ranges::{LineRange, ranges_from_diff};

/// Fetch the unified diff of a single file.
///
/// Runs `git diff` in `repo_root` restricted to `relative_path`, comparing
/// according to `mode`. Color and external diff drivers are disabled so the
/// output is always plain unified format. An unchanged file yields `""`.
///
/// # Arguments
///
/// * `repo_root` - Repository root (or any directory inside it)
/// * `relative_path` - Repo-relative path of the file
/// * `mode` - Which two versions of the file to compare
///
/// # Returns
///
/// * `Ok(String)` - Raw diff text, untrimmed
/// * `Err(DiffcueError::GitError)` - Git command failed
pub fn file_diff<P: AsRef<Path>>(repo_root: P, relative_path: &str, mode: DiffMode) -> Result<String> {
    let mut args = vec!["diff", "--no-color", "--no-ext-diff"];
    args.extend_from_slice(mode.git_args());
    args.push("--");
    args.push(relative_path);

    let output = run_git_raw(&repo_root, &args)?;
    Ok(output.stdout)
}

/// Zero-based ranges of lines added to `relative_path`.
///
/// Convenience wrapper over [`file_diff`] and [`ranges_from_diff`].
pub fn changed_ranges<P: AsRef<Path>>(
    repo_root: P,
    relative_path: &str,
    mode: DiffMode,
) -> Result<Vec<LineRange>> {
    let diff = file_diff(repo_root, relative_path, mode)?;
    Ok(ranges_from_diff(&diff))
}
