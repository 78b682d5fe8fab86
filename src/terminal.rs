//! Terminal discovery, selection, and message delivery.
//!
//! Terminals are listed and written to through configurable commands (tmux by
//! default). Selection never prompts on its own: when the automatic
//! strategies are inconclusive, the caller's [`TerminalResolver`] decides.

use crate::config::{Config, split_command};
use crate::error::{DiffcueError, Result};
use crate::template::{render_template, vars};
use serde::Serialize;
use std::collections::HashMap;
use std::process::Command;

/// A terminal that can receive a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Terminal {
    /// Identifier passed to the send command as `{target}`.
    pub id: String,
    /// Human-readable name used for matching.
    pub name: String,
}

impl Terminal {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Fallback chooser for when automatic selection is ambiguous.
pub trait TerminalResolver {
    /// Pick one of `candidates` by index, or `None` to cancel.
    fn resolve(&self, candidates: &[Terminal]) -> Option<usize>;
}

/// A resolver that always declines.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoResolver;

impl TerminalResolver for NoResolver {
    fn resolve(&self, _candidates: &[Terminal]) -> Option<usize> {
        None
    }
}

/// Choose the terminal to send feedback to.
///
/// Strategies, in order:
/// 1. first terminal whose name contains `pattern` (case-insensitive)
/// 2. the only terminal matching any of `hints`, if exactly one does
/// 3. the only terminal, if there is exactly one
/// 4. whatever `resolver` picks
///
/// Returns the index into `terminals`. An out-of-range answer from the
/// resolver counts as no selection.
pub fn select_terminal(
    terminals: &[Terminal],
    pattern: Option<&str>,
    hints: &[String],
    resolver: &dyn TerminalResolver,
) -> Option<usize> {
    if terminals.is_empty() {
        return None;
    }

    if let Some(pattern) = pattern.filter(|p| !p.is_empty()) {
        if let Some(idx) = terminals.iter().position(|t| t.name_contains(pattern)) {
            return Some(idx);
        }
    }

    let hinted: Vec<usize> = terminals
        .iter()
        .enumerate()
        .filter(|(_, t)| hints.iter().any(|hint| t.name_contains(hint)))
        .map(|(idx, _)| idx)
        .collect();
    if let [only] = hinted.as_slice() {
        return Some(*only);
    }

    if terminals.len() == 1 {
        return Some(0);
    }

    resolver
        .resolve(terminals)
        .filter(|&idx| idx < terminals.len())
}

/// Parse `list_command` output: one `<id> <name...>` per line.
///
/// Blank lines are skipped; a line with only an id gets an empty name.
pub fn parse_terminal_list(output: &str) -> Vec<Terminal> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| match line.split_once(char::is_whitespace) {
            Some((id, name)) => Terminal::new(id, name.trim()),
            None => Terminal::new(line, ""),
        })
        .collect()
}

/// Run the configured `list_command` and parse its output.
pub fn list_terminals(config: &Config) -> Result<Vec<Terminal>> {
    let args = split_command("list_command", &config.list_command)?;
    let stdout = run_command(&args)?;
    Ok(parse_terminal_list(&stdout))
}

/// Deliver `message` to `terminal` with `send_command`, then `submit_command`.
pub fn send_to_terminal(config: &Config, terminal: &Terminal, message: &str) -> Result<()> {
    let variables = vars([("target", terminal.id.as_str()), ("message", message)]);

    let send = render_command("send_command", &config.send_command, &variables)?;
    run_command(&send)?;

    if let Some(submit) = &config.submit_command {
        let submit = render_command("submit_command", submit, &variables)?;
        run_command(&submit)?;
    }

    Ok(())
}

/// Split a command template into words, then render each word.
///
/// Splitting first keeps substituted values as single arguments, whatever
/// quotes or spaces they contain.
pub(crate) fn render_command(
    field: &str,
    template: &str,
    variables: &HashMap<String, String>,
) -> Result<Vec<String>> {
    split_command(field, template)?
        .iter()
        .map(|word| {
            render_template(word, variables)
                .map_err(|e| DiffcueError::UserError(format!("failed to render {}: {}", field, e)))
        })
        .collect()
}

fn run_command(args: &[String]) -> Result<String> {
    let (program, rest) = args
        .split_first()
        .ok_or_else(|| DiffcueError::UserError("command is empty".to_string()))?;

    let output = Command::new(program).args(rest).output().map_err(|e| {
        DiffcueError::DeliveryError(format!(
            "failed to execute '{}': {}\n\
             Fix: ensure the command is installed and in PATH.",
            program, e
        ))
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DiffcueError::DeliveryError(format!(
            "'{}' failed (exit code {}): {}",
            program,
            output.status.code().unwrap_or(-1),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
