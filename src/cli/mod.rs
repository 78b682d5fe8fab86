//! CLI argument parsing for diffcue.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Diffcue: point a coding agent at the code it just changed.
///
/// Finds the lines a git diff added to a file, extracts the hunk around a
/// line span, and sends a change request (file reference, feedback, and
/// hunk) to the terminal the agent runs in.
#[derive(Parser, Debug)]
#[command(name = "diffcue")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for diffcue.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the line ranges a diff adds to a file.
    ///
    /// Ranges are zero-based and inclusive.
    Ranges(RangesArgs),

    /// Print the diff hunks overlapping a line span.
    ///
    /// Prints nothing when no hunk overlaps.
    Hunk(HunkArgs),

    /// Show the feedback context for a line span.
    Context(ContextArgs),

    /// Send a change request about a line span to an agent's terminal.
    ///
    /// Selects a terminal by `--target`, the configured name pattern, the
    /// configured hints, or by asking.
    Send(SendArgs),

    /// List the terminals feedback can be sent to.
    ///
    /// The terminal that `send` would pick automatically is marked with `*`.
    Terminals,

    /// Show recorded feedback events.
    Log(LogArgs),
}

/// Where to read the diff from.
#[derive(Args, Debug, Clone, Default)]
pub struct DiffSourceArgs {
    /// Read the diff from a file (`-` for stdin) instead of running git.
    #[arg(long, value_name = "PATH")]
    pub diff: Option<String>,
}

/// One-based, inclusive line span.
#[derive(Args, Debug, Clone)]
pub struct SpanArgs {
    /// First line (one-based).
    #[arg(short, long)]
    pub start: usize,

    /// Last line (one-based). Defaults to `--start`.
    #[arg(short, long)]
    pub end: Option<usize>,
}

/// Arguments for the `ranges` command.
#[derive(Parser, Debug)]
pub struct RangesArgs {
    /// File whose added lines to list.
    pub file: PathBuf,

    #[command(flatten)]
    pub source: DiffSourceArgs,

    /// Print JSON instead of one `start-end` per line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `hunk` command.
#[derive(Parser, Debug)]
pub struct HunkArgs {
    /// File the span refers to.
    pub file: PathBuf,

    #[command(flatten)]
    pub span: SpanArgs,

    #[command(flatten)]
    pub source: DiffSourceArgs,
}

/// Arguments for the `context` command.
#[derive(Parser, Debug)]
pub struct ContextArgs {
    /// File the span refers to.
    pub file: PathBuf,

    #[command(flatten)]
    pub span: SpanArgs,

    #[command(flatten)]
    pub source: DiffSourceArgs,

    /// Print JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `send` command.
#[derive(Parser, Debug)]
pub struct SendArgs {
    /// File the feedback is about.
    pub file: PathBuf,

    #[command(flatten)]
    pub span: SpanArgs,

    /// The change request (required).
    #[arg(short, long)]
    pub feedback: String,

    /// Terminal id to send to, skipping discovery.
    #[arg(short, long)]
    pub target: Option<String>,

    /// Print the message instead of sending it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `log` command.
#[derive(Parser, Debug)]
pub struct LogArgs {
    /// Show only the most recent N events.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Print raw NDJSON lines.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
