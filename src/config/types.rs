//! Configuration types and defaults for diffcue.

use serde::{Deserialize, Serialize};

/// Which two versions of a file `git diff` compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiffMode {
    /// Working tree against the index (`git diff`).
    #[default]
    Unstaged,
    /// Index against HEAD (`git diff --cached`).
    Staged,
    /// Working tree against HEAD (`git diff HEAD`).
    Head,
}

impl DiffMode {
    /// Parse a diff mode from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "unstaged" => Some(Self::Unstaged),
            "staged" => Some(Self::Staged),
            "head" => Some(Self::Head),
            _ => None,
        }
    }

    /// Extra `git diff` arguments selecting this comparison.
    pub fn git_args(self) -> &'static [&'static str] {
        match self {
            Self::Unstaged => &[],
            Self::Staged => &["--cached"],
            Self::Head => &["HEAD"],
        }
    }
}

/// Variables available to `send_command` arguments.
pub const SEND_COMMAND_VARIABLES: &[&str] = &["target", "message"];

/// Variables available to `submit_command` arguments.
pub const SUBMIT_COMMAND_VARIABLES: &[&str] = &["target"];

/// Variables available to `message_template`.
pub const MESSAGE_TEMPLATE_VARIABLES: &[&str] = &["file_ref", "feedback", "diff_block"];

/// Default message layout: file reference, the request, then the hunk.
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "@{file_ref}\n\nChange request: {feedback}{diff_block}";

// Default value functions for serde
pub(crate) fn default_terminal_hints() -> Vec<String> {
    vec!["claude".to_string(), "node".to_string()]
}
pub(crate) fn default_list_command() -> String {
    r##"tmux list-panes -a -F "#{pane_id} #{pane_current_command}""##.to_string()
}
pub(crate) fn default_send_command() -> String {
    "tmux send-keys -t {target} -l {message}".to_string()
}
pub(crate) fn default_submit_command() -> Option<String> {
    Some("tmux send-keys -t {target} Enter".to_string())
}
pub(crate) fn default_message_template() -> String {
    DEFAULT_MESSAGE_TEMPLATE.to_string()
}
pub(crate) fn default_true() -> bool {
    true
}
