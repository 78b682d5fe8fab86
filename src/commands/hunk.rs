//! Implementation of the `diffcue hunk` command.

use super::{FileLocation, one_based_span, read_diff};
use crate::cli::HunkArgs;
use crate::diff::relevant_hunk;
use crate::error::Result;

/// Execute the `diffcue hunk` command.
///
/// Prints the hunks overlapping the one-based span, or nothing.
pub fn cmd_hunk(args: HunkArgs) -> Result<()> {
    let hunk = select_hunk(&args)?;
    if !hunk.is_empty() {
        println!("{}", hunk);
    }

    Ok(())
}

fn select_hunk(args: &HunkArgs) -> Result<String> {
    let (start, end) = one_based_span(&args.span)?;
    let config = FileLocation::find(&args.file).config()?;
    let diff = read_diff(&args.source, &args.file, &config)?;
    Ok(relevant_hunk(&diff, start, end))
}
