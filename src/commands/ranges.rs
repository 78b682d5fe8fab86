//! Implementation of the `diffcue ranges` command.
//!
//! Prints the zero-based, inclusive ranges of lines the diff adds to a file.

use super::{FileLocation, read_diff};
use crate::cli::RangesArgs;
use crate::diff::{LineRange, ranges_from_diff};
use crate::error::{DiffcueError, Result};

/// Execute the `diffcue ranges` command.
pub fn cmd_ranges(args: RangesArgs) -> Result<()> {
    let location = FileLocation::find(&args.file);
    let config = location.config()?;
    let diff = read_diff(&args.source, &args.file, &config)?;

    let ranges = ranges_from_diff(&diff);
    if args.json {
        let json = serde_json::to_string_pretty(&ranges).map_err(|e| {
            DiffcueError::UserError(format!("failed to serialize ranges: {}", e))
        })?;
        println!("{}", json);
    } else {
        for range in &ranges {
            println!("{}", format_range(range));
        }
    }

    Ok(())
}

/// `start-end`, or just `start` for a single line.
fn format_range(range: &LineRange) -> String {
    if range.start == range.end {
        range.start.to_string()
    } else {
        format!("{}-{}", range.start, range.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::DiffSourceArgs;
    use crate::test_support::{commit_file, create_test_repo};
    use tempfile::TempDir;

    #[test]
    fn test_format_range() {
        assert_eq!(format_range(&LineRange::single(4)), "4");
        assert_eq!(format_range(&LineRange::new(2, 6)), "2-6");
    }

    #[test]
    fn test_ranges_from_repo() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "a.txt", "one\ntwo\n");
        let file = temp_dir.path().join("a.txt");
        std::fs::write(&file, "one\nnew\ntwo\n").unwrap();

        let args = RangesArgs {
            file,
            source: DiffSourceArgs::default(),
            json: true,
        };
        assert!(cmd_ranges(args).is_ok());
    }

    #[test]
    fn test_ranges_outside_repo_without_diff_fails() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("loose.txt");
        std::fs::write(&file, "x\n").unwrap();

        let args = RangesArgs {
            file,
            source: DiffSourceArgs::default(),
            json: false,
        };
        let err = cmd_ranges(args).unwrap_err();
        assert!(matches!(err, DiffcueError::UserError(_)));
    }
}
