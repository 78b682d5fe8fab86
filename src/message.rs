//! Feedback message formatting.
//!
//! The default message points the agent at the file with `@path:line`
//! syntax, states the request, and attaches the relevant hunk as a fenced
//! `diff` block when there is one.

use crate::config::types::DEFAULT_MESSAGE_TEMPLATE;
use crate::context::DiffContext;
use crate::error::{DiffcueError, Result};
use crate::template::{TemplateError, render_template, vars};

/// `relative_path:start`, or `relative_path:start-end` for multi-line spans.
pub fn file_reference(ctx: &DiffContext) -> String {
    if ctx.end_line != ctx.start_line {
        format!("{}:{}-{}", ctx.relative_path, ctx.start_line, ctx.end_line)
    } else {
        format!("{}:{}", ctx.relative_path, ctx.start_line)
    }
}

/// Fenced diff block preceded by a blank line, or empty without a hunk.
fn diff_block(ctx: &DiffContext) -> String {
    if ctx.relevant_diff_hunk.is_empty() {
        String::new()
    } else {
        format!("\n\n```diff\n{}\n```", ctx.relevant_diff_hunk)
    }
}

/// Format a feedback message with the built-in layout.
///
/// ```
/// use diffcue::context::DiffContext;
/// use diffcue::message::format_feedback_message;
///
/// let ctx = DiffContext {
///     file_path: "/repo/src/lib.rs".into(),
///     relative_path: "src/lib.rs".into(),
///     start_line: 3,
///     end_line: 4,
///     selected_code: String::new(),
///     relevant_diff_hunk: String::new(),
/// };
/// let message = format_feedback_message(&ctx, "rename this").unwrap();
/// assert_eq!(message, "@src/lib.rs:3-4\n\nChange request: rename this");
/// ```
pub fn format_feedback_message(ctx: &DiffContext, feedback: &str) -> Result<String> {
    render_feedback_message(DEFAULT_MESSAGE_TEMPLATE, ctx, feedback)
}

/// Format a feedback message through a `message_template`.
///
/// Feedback is trimmed; blank feedback is rejected.
pub fn render_feedback_message(template: &str, ctx: &DiffContext, feedback: &str) -> Result<String> {
    let feedback = feedback.trim();
    if feedback.is_empty() {
        return Err(DiffcueError::UserError(
            "feedback is empty. Describe the change you want before sending.".to_string(),
        ));
    }

    let variables = vars([
        ("file_ref", file_reference(ctx)),
        ("feedback", feedback.to_string()),
        ("diff_block", diff_block(ctx)),
    ]);

    render_template(template, &variables).map_err(|e: TemplateError| {
        DiffcueError::UserError(format!("failed to render message_template: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(start: usize, end: usize, hunk: &str) -> DiffContext {
        DiffContext {
            file_path: "/work/app/src/main.rs".to_string(),
            relative_path: "src/main.rs".to_string(),
            start_line: start,
            end_line: end,
            selected_code: "    greet();".to_string(),
            relevant_diff_hunk: hunk.to_string(),
        }
    }

    #[test]
    fn test_file_reference_single_line() {
        assert_eq!(file_reference(&context(7, 7, "")), "src/main.rs:7");
    }

    #[test]
    fn test_file_reference_span() {
        assert_eq!(file_reference(&context(7, 9, "")), "src/main.rs:7-9");
    }

    #[test]
    fn test_message_with_hunk() {
        let hunk = "@@ -1,2 +1,3 @@\n fn main() {\n+    greet();\n }";
        let message = format_feedback_message(&context(2, 2, hunk), "  log instead  ").unwrap();

        assert_eq!(
            message,
            "@src/main.rs:2\n\nChange request: log instead\n\n```diff\n\
             @@ -1,2 +1,3 @@\n fn main() {\n+    greet();\n }\n```"
        );
    }

    #[test]
    fn test_message_without_hunk() {
        let message = format_feedback_message(&context(4, 6, ""), "split this up").unwrap();
        assert_eq!(message, "@src/main.rs:4-6\n\nChange request: split this up");
    }

    #[test]
    fn test_blank_feedback_rejected() {
        let err = format_feedback_message(&context(1, 1, ""), " \n\t").unwrap_err();
        assert!(matches!(err, DiffcueError::UserError(_)));
    }

    #[test]
    fn test_custom_template() {
        let message = render_feedback_message(
            "Please change {file_ref}: {feedback}",
            &context(3, 3, "@@ -1 +1 @@"),
            "use a constant",
        )
        .unwrap();
        assert_eq!(message, "Please change src/main.rs:3: use a constant");
    }

    #[test]
    fn test_feedback_with_braces_is_literal() {
        let message = format_feedback_message(&context(1, 1, ""), "return {}").unwrap();
        assert!(message.ends_with("Change request: return {}"));
    }

    #[test]
    fn test_bad_template_is_user_error() {
        let err = render_feedback_message("{nope}", &context(1, 1, ""), "x").unwrap_err();
        assert!(err.to_string().contains("message_template"));
    }
}
