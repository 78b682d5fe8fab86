//! Diffcue: point a coding agent at the code it just changed.
//!
//! The core is [`diff`]: [`diff::ranges_from_diff`] finds the lines a
//! unified diff adds to the new file, and [`diff::relevant_hunk`] extracts
//! the hunks that overlap a line span. Around it sit the pieces the `diffcue`
//! binary needs to turn a span and a sentence of feedback into a message in
//! an agent's terminal.

pub mod annotations;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod diff;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod git;
pub mod message;
pub mod template;
pub mod terminal;

#[cfg(test)]
mod test_support;
