//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for diffcue.
///
/// This struct represents the contents of `.diffcue.yaml` at the repository
/// root. Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Diff settings
    // =========================================================================
    /// Which versions of a file to compare when fetching its diff.
    #[serde(default)]
    pub diff_mode: DiffMode,

    /// Glob patterns for files that never get annotations.
    #[serde(default)]
    pub ignore_globs: Vec<String>,

    // =========================================================================
    // Terminal selection
    // =========================================================================
    /// Case-insensitive substring matched against terminal names first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_name_pattern: Option<String>,

    /// Substrings identifying an agent terminal when exactly one matches.
    #[serde(default = "default_terminal_hints")]
    pub terminal_hints: Vec<String>,

    /// Command listing terminals, one `<id> <name...>` per output line.
    #[serde(default = "default_list_command")]
    pub list_command: String,

    // =========================================================================
    // Delivery
    // =========================================================================
    /// Command sending the message; arguments may use `{target}` and `{message}`.
    #[serde(default = "default_send_command")]
    pub send_command: String,

    /// Command run after sending to submit the input; `{target}` only.
    #[serde(default = "default_submit_command")]
    pub submit_command: Option<String>,

    /// Layout of the feedback message; `{file_ref}`, `{feedback}`, `{diff_block}`.
    #[serde(default = "default_message_template")]
    pub message_template: String,

    /// Whether to append events to `.diffcue/events.ndjson`.
    #[serde(default = "default_true")]
    pub event_log: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diff_mode: DiffMode::default(),
            ignore_globs: Vec::new(),
            terminal_name_pattern: None,
            terminal_hints: default_terminal_hints(),
            list_command: default_list_command(),
            send_command: default_send_command(),
            submit_command: default_submit_command(),
            message_template: default_message_template(),
            event_log: default_true(),
        }
    }
}
