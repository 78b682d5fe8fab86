//! Implementation of the `diffcue send` command.
//!
//! 1. Build the feedback context (selected code plus relevant hunk)
//! 2. Render the message through `message_template`
//! 3. Pick a terminal: `--target`, else discovery and selection
//! 4. Deliver the message and record a `feedback_sent` event
//!
//! With `--dry-run`, the message is printed instead of delivered and a
//! `feedback_previewed` event is recorded.

use super::{FileLocation, one_based_span};
use crate::cli::SendArgs;
use crate::config::Config;
use crate::context::{DiffContext, resolve_diff_context};
use crate::diff::LineRange;
use crate::error::{DiffcueError, Result};
use crate::events::{Event, EventAction, append_event};
use crate::message::render_feedback_message;
use crate::terminal::{
    Terminal, TerminalResolver, list_terminals, select_terminal, send_to_terminal,
};
use serde_json::json;
use std::io::{BufRead, IsTerminal, Write};

/// Execute the `diffcue send` command.
pub fn cmd_send(args: SendArgs) -> Result<()> {
    let (start, end) = one_based_span(&args.span)?;
    let location = FileLocation::find(&args.file);
    let config = location.config()?;

    let ctx = resolve_diff_context(&args.file, LineRange::new(start - 1, end - 1), &config)?;
    let message = render_feedback_message(&config.message_template, &ctx, &args.feedback)?;

    if args.dry_run {
        println!("{}", message);
        record(&location, &config, &ctx, EventAction::FeedbackPreviewed, None);
        return Ok(());
    }

    let terminal = match args.target {
        Some(id) => Terminal::new(id.clone(), id),
        None => choose_terminal(&config)?,
    };

    send_to_terminal(&config, &terminal, &message)?;
    record(
        &location,
        &config,
        &ctx,
        EventAction::FeedbackSent,
        Some(&terminal),
    );

    println!(
        "Sent feedback on {} to {} ({})",
        ctx.relative_path, terminal.name, terminal.id
    );
    Ok(())
}

/// Discover terminals and select one.
fn choose_terminal(config: &Config) -> Result<Terminal> {
    let terminals = list_terminals(config)?;
    if terminals.is_empty() {
        return Err(DiffcueError::DeliveryError(
            "no terminals found.\n\n\
             Start your agent in a terminal first, or pass --target <ID>."
                .to_string(),
        ));
    }

    let idx = select_terminal(
        &terminals,
        config.terminal_name_pattern.as_deref(),
        &config.terminal_hints,
        &PromptResolver,
    )
    .ok_or_else(|| {
        DiffcueError::UserError(
            "no terminal selected.\n\n\
             Pass --target <ID>, or set terminal_name_pattern in .diffcue.yaml.\n\
             Use `diffcue terminals` to see what is available."
                .to_string(),
        )
    })?;

    Ok(terminals[idx].clone())
}

/// Append an event to the repository log. Failures only warn.
fn record(
    location: &FileLocation,
    config: &Config,
    ctx: &DiffContext,
    action: EventAction,
    terminal: Option<&Terminal>,
) {
    let Some(repo_root) = &location.repo_root else {
        return;
    };
    if !config.event_log {
        return;
    }

    let mut details = json!({
        "start_line": ctx.start_line,
        "end_line": ctx.end_line,
        "has_hunk": !ctx.relevant_diff_hunk.is_empty(),
    });
    if let Some(terminal) = terminal {
        details["target"] = json!(terminal.id);
        details["terminal_name"] = json!(terminal.name);
    }

    let event = Event::new(action)
        .with_file(&ctx.relative_path)
        .with_details(details);
    if let Err(e) = append_event(repo_root, &event) {
        eprintln!("Warning: failed to record event: {}", e);
    }
}

/// Asks on stderr/stdin which terminal to use.
///
/// Declines without asking when stdin is not interactive.
struct PromptResolver;

impl TerminalResolver for PromptResolver {
    fn resolve(&self, candidates: &[Terminal]) -> Option<usize> {
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            return None;
        }

        eprintln!("Select a terminal:");
        for (i, terminal) in candidates.iter().enumerate() {
            eprintln!("  {}) {} ({})", i + 1, terminal.name, terminal.id);
        }
        eprint!("Number (empty to cancel): ");
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        stdin.lock().read_line(&mut answer).ok()?;
        parse_choice(&answer, candidates.len())
    }
}

/// Parse a one-based menu answer into an index.
fn parse_choice(answer: &str, count: usize) -> Option<usize> {
    let n: usize = answer.trim().parse().ok()?;
    (1..=count).contains(&n).then(|| n - 1)
}
