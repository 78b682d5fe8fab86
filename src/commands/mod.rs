//! Command implementations for diffcue.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the small pieces they share: locating the file in
//! its repository, reading the diff, and checking line arguments.

mod context_cmd;
mod hunk;
mod log;
mod ranges;
mod send;
mod terminals;

use crate::cli::{Command, DiffSourceArgs, SpanArgs};
use crate::config::Config;
use crate::context::locate_and_diff;
use crate::error::{DiffcueError, Result};
use crate::git::{get_repo_root, relative_to_repo};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Ranges(args) => ranges::cmd_ranges(args),
        Command::Hunk(args) => hunk::cmd_hunk(args),
        Command::Context(args) => context_cmd::cmd_context(args),
        Command::Send(args) => send::cmd_send(args),
        Command::Terminals => terminals::cmd_terminals(),
        Command::Log(args) => log::cmd_log(args),
    }
}

/// Where a file sits in its repository, if it is in one.
#[derive(Debug, Clone)]
pub(crate) struct FileLocation {
    pub repo_root: Option<PathBuf>,
    /// Repo-relative path, or the path as given outside a repository.
    pub relative_path: String,
}

impl FileLocation {
    /// Locate `path`. Never fails: outside a repository the path is kept.
    pub fn find(path: &Path) -> Self {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let located = get_repo_root(parent).and_then(|root| {
            let relative = relative_to_repo(&root, path)?;
            Ok((root, relative))
        });

        match located {
            Ok((root, relative_path)) => Self {
                repo_root: Some(root),
                relative_path,
            },
            Err(_) => Self {
                repo_root: None,
                relative_path: path.display().to_string(),
            },
        }
    }

    /// The repository's config, or defaults outside a repository.
    pub fn config(&self) -> Result<Config> {
        match &self.repo_root {
            Some(root) => Config::load_for_repo(root),
            None => Ok(Config::default()),
        }
    }
}

/// Config of the repository containing the working directory, or defaults.
pub(crate) fn cwd_config() -> Result<Config> {
    match get_repo_root(".") {
        Ok(root) => Config::load_for_repo(root),
        Err(_) => Ok(Config::default()),
    }
}

/// Read diff text from `--diff`, or fetch it from git for `file`.
pub(crate) fn read_diff(source: &DiffSourceArgs, file: &Path, config: &Config) -> Result<String> {
    match source.diff.as_deref() {
        Some("-") => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).map_err(|e| {
                DiffcueError::UserError(format!("failed to read diff from stdin: {}", e))
            })?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            DiffcueError::UserError(format!("failed to read diff file '{}': {}", path, e))
        }),
        None => {
            let (_, diff) = locate_and_diff(file, config)?;
            Ok(diff)
        }
    }
}

/// Validate a one-based span and return `(start, end)`.
///
/// `end` defaults to `start`. The order is left as given.
pub(crate) fn one_based_span(span: &SpanArgs) -> Result<(usize, usize)> {
    let end = span.end.unwrap_or(span.start);
    if span.start == 0 || end == 0 {
        return Err(DiffcueError::UserError(
            "line numbers are one-based; 0 is not a valid line.".to_string(),
        ));
    }
    Ok((span.start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{commit_file, create_test_repo};
    use tempfile::TempDir;

    #[test]
    fn test_one_based_span() {
        let span = SpanArgs {
            start: 3,
            end: None,
        };
        assert_eq!(one_based_span(&span).unwrap(), (3, 3));

        let span = SpanArgs {
            start: 7,
            end: Some(2),
        };
        assert_eq!(one_based_span(&span).unwrap(), (7, 2));

        let span = SpanArgs {
            start: 0,
            end: Some(2),
        };
        assert!(matches!(
            one_based_span(&span).unwrap_err(),
            DiffcueError::UserError(_)
        ));
    }

    #[test]
    fn test_file_location_in_repo() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "src/a.rs", "a\n");

        let location = FileLocation::find(&temp_dir.path().join("src/a.rs"));

        assert!(location.repo_root.is_some());
        assert_eq!(location.relative_path, "src/a.rs");
        assert!(location.config().unwrap().event_log);
    }

    #[test]
    fn test_file_location_outside_repo() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("loose.rs");
        std::fs::write(&file, "x\n").unwrap();

        let location = FileLocation::find(&file);

        assert!(location.repo_root.is_none());
        assert_eq!(location.relative_path, file.display().to_string());
    }

    #[test]
    fn test_read_diff_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let diff_path = temp_dir.path().join("change.diff");
        std::fs::write(&diff_path, "@@ -1 +1 @@\n-a\n+b\n").unwrap();

        let source = DiffSourceArgs {
            diff: Some(diff_path.display().to_string()),
        };
        let diff = read_diff(&source, Path::new("ignored.rs"), &Config::default()).unwrap();
        assert_eq!(diff, "@@ -1 +1 @@\n-a\n+b\n");
    }

    #[test]
    fn test_read_diff_missing_file() {
        let source = DiffSourceArgs {
            diff: Some("/nonexistent/diffcue/change.diff".to_string()),
        };
        let err = read_diff(&source, Path::new("a.rs"), &Config::default()).unwrap_err();
        assert!(matches!(err, DiffcueError::UserError(_)));
    }
}
