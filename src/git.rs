//! Git command runner for diffcue.
//!
//! Wraps git invocations with captured stdout/stderr and structured errors.
//! Git is the external collaborator that produces diff text; all calls to it
//! go through this module.

use crate::error::{DiffcueError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command.
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output, trim_stdout: bool) -> Self {
        let stdout = String::from_utf8_lossy(&output.stdout);
        Self {
            stdout: if trim_stdout {
                stdout.trim().to_string()
            } else {
                stdout.into_owned()
            },
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command with the specified working directory.
///
/// Stdout is trimmed. Use [`run_git_raw`] when whitespace is significant.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On exit code 0
/// * `Err(DiffcueError::GitError)` - On spawn failure or non-zero exit
///
/// # Examples
///
/// ```no_run
/// use diffcue::git::run_git;
/// use std::path::Path;
///
/// let output = run_git(Path::new("."), &["status", "--porcelain"])?;
/// println!("Changes: {}", output.stdout);
/// # Ok::<(), diffcue::error::DiffcueError>(())
/// ```
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    execute(cwd.as_ref(), args, true)
}

/// Run a git command and keep stdout byte-for-byte.
///
/// Diff output needs this: a trailing context line made only of a space
/// would be lost to trimming.
pub fn run_git_raw<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    execute(cwd.as_ref(), args, false)
}

fn execute(cwd: &Path, args: &[&str], trim_stdout: bool) -> Result<GitOutput> {
    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            DiffcueError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output, trim_stdout);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.trim().to_string()
        } else {
            git_output.stderr.clone()
        };

        Err(DiffcueError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// Get the repository root directory using `git rev-parse --show-toplevel`.
///
/// Works from any directory inside the repository, including subdirectories.
///
/// # Returns
///
/// * `Ok(PathBuf)` - The absolute path to the repository root
/// * `Err(DiffcueError::UserError)` - If not inside a git repository
pub fn get_repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(|e| {
            DiffcueError::UserError(format!("failed to execute git: {} (is git installed?)", e))
        })?;

    let git_output = GitOutput::from_output(&output, true);

    if output.status.success() {
        return Ok(PathBuf::from(&git_output.stdout));
    }

    // "Not a repository" is a user mistake, not a git failure.
    let stderr = &git_output.stderr;
    if stderr.contains("not a git repository") || stderr.contains("fatal:") {
        Err(DiffcueError::UserError(format!(
            "'{}' is not inside a git repository.",
            cwd.display()
        )))
    } else {
        Err(DiffcueError::UserError(format!(
            "git command failed: {}",
            if stderr.is_empty() {
                &git_output.stdout
            } else {
                stderr
            }
        )))
    }
}

/// Express `path` relative to `repo_root`, with forward slashes.
///
/// Both paths are canonicalized first so symlinked temp dirs and `..`
/// segments compare correctly.
pub fn relative_to_repo<R: AsRef<Path>, P: AsRef<Path>>(repo_root: R, path: P) -> Result<String> {
    let canonical = |p: &Path| {
        p.canonicalize().map_err(|e| {
            DiffcueError::UserError(format!("failed to resolve path '{}': {}", p.display(), e))
        })
    };

    let root = canonical(repo_root.as_ref())?;
    let file = canonical(path.as_ref())?;

    let relative = file.strip_prefix(&root).map_err(|_| {
        DiffcueError::UserError(format!(
            "'{}' is outside the repository at '{}'",
            file.display(),
            root.display()
        ))
    })?;

    Ok(relative.to_string_lossy().replace('\\', "/"))
}
