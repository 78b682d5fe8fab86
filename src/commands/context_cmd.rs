//! Implementation of the `diffcue context` command.
//!
//! Shows what `send` would attach for a line span: the selected code and
//! the relevant hunk.

use super::{FileLocation, one_based_span, read_diff};
use crate::cli::ContextArgs;
use crate::context::{DiffContext, Document, extract_diff_context, resolve_diff_context};
use crate::diff::LineRange;
use crate::error::{DiffcueError, Result};

/// Execute the `diffcue context` command.
pub fn cmd_context(args: ContextArgs) -> Result<()> {
    let (start, end) = one_based_span(&args.span)?;
    let range = LineRange::new(start - 1, end - 1);
    let location = FileLocation::find(&args.file);
    let config = location.config()?;

    let ctx = if args.source.diff.is_some() {
        let document = Document::load(&args.file)?;
        let diff = read_diff(&args.source, &args.file, &config)?;
        extract_diff_context(&document, range, &location.relative_path, &diff)
    } else {
        resolve_diff_context(&args.file, range, &config)?
    };

    if args.json {
        let json = serde_json::to_string_pretty(&ctx).map_err(|e| {
            DiffcueError::UserError(format!("failed to serialize context: {}", e))
        })?;
        println!("{}", json);
    } else {
        print_context(&ctx);
    }

    Ok(())
}

fn print_context(ctx: &DiffContext) {
    println!("File:   {}", ctx.relative_path);
    if ctx.start_line == ctx.end_line {
        println!("Line:   {}", ctx.start_line);
    } else {
        println!("Lines:  {}-{}", ctx.start_line, ctx.end_line);
    }
    println!();
    println!("Selected code:");
    for line in ctx.selected_code.lines() {
        println!("  {}", line);
    }
    println!();
    if ctx.relevant_diff_hunk.is_empty() {
        println!("No diff hunk overlaps this selection.");
    } else {
        println!("Relevant hunk:");
        println!("{}", ctx.relevant_diff_hunk);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{DiffSourceArgs, SpanArgs};
    use crate::test_support::{commit_file, create_test_repo};

    #[test]
    fn test_context_from_repo() {
        let temp_dir = create_test_repo();
        commit_file(temp_dir.path(), "src/a.rs", "fn a() {}\n");
        let file = temp_dir.path().join("src/a.rs");
        std::fs::write(&file, "fn a() {}\nfn b() {}\n").unwrap();

        let args = ContextArgs {
            file,
            span: SpanArgs {
                start: 2,
                end: Some(2),
            },
            source: DiffSourceArgs::default(),
            json: true,
        };
        assert!(cmd_context(args).is_ok());
    }

    #[test]
    fn test_context_with_explicit_diff_needs_readable_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let args = ContextArgs {
            file: temp_dir.path().join("missing.rs"),
            span: SpanArgs {
                start: 1,
                end: None,
            },
            source: DiffSourceArgs {
                diff: Some("-".to_string()),
            },
            json: false,
        };
        assert!(matches!(
            cmd_context(args).unwrap_err(),
            DiffcueError::UserError(_)
        ));
    }
}
