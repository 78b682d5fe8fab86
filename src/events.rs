//! Append-only event log for diffcue.
//!
//! Every feedback message that is sent (or previewed) is recorded as one
//! JSON object per line in `<repo_root>/.diffcue/events.ndjson`.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: `feedback_sent` or `feedback_previewed`
//! - `actor`: `USER@HOST`
//! - `file`: repo-relative path the feedback is about, if any
//! - `details`: freeform object with action-specific details
//!
//! ```no_run
//! use diffcue::events::{Event, EventAction, append_event};
//! use serde_json::json;
//! use std::path::Path;
//!
//! let event = Event::new(EventAction::FeedbackSent)
//!     .with_file("src/lib.rs")
//!     .with_details(json!({"target": "%3"}));
//! append_event(Path::new("."), &event)?;
//! # Ok::<(), diffcue::error::DiffcueError>(())
//! ```

use crate::error::{DiffcueError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory under the repository root holding diffcue state.
pub const STATE_DIR: &str = ".diffcue";

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Feedback delivered to a terminal.
    FeedbackSent,
    /// Feedback rendered with `--dry-run` and not delivered.
    FeedbackPreviewed,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::FeedbackSent => write!(f, "feedback_sent"),
            EventAction::FeedbackPreviewed => write!(f, "feedback_previewed"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// When the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// Who performed the action (`USER@HOST`).
    pub actor: String,

    /// Repo-relative file path the event refers to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Freeform details object.
    pub details: Value,
}

impl Event {
    /// Create a new event stamped with the current time and actor.
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            file: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the file this event refers to.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            DiffcueError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Path of the events file for a repository.
pub fn events_file_path<P: AsRef<Path>>(repo_root: P) -> PathBuf {
    repo_root.as_ref().join(STATE_DIR).join("events.ndjson")
}

/// Append an event to the repository's event log.
///
/// Creates `.diffcue/` and the events file if needed; each call writes
/// exactly one line.
pub fn append_event<P: AsRef<Path>>(repo_root: P, event: &Event) -> Result<()> {
    let events_file = events_file_path(&repo_root);
    let json_line = event.to_ndjson_line()?;

    if let Some(dir) = events_file.parent() {
        fs::create_dir_all(dir).map_err(|e| {
            DiffcueError::UserError(format!(
                "failed to create events directory '{}': {}",
                dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            DiffcueError::UserError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        DiffcueError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

/// Read every event from the repository's log, oldest first.
///
/// A missing log reads as empty. Lines that fail to parse are skipped.
pub fn read_events<P: AsRef<Path>>(repo_root: P) -> Result<Vec<Event>> {
    let events_file = events_file_path(repo_root);
    if !events_file.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&events_file).map_err(|e| {
        DiffcueError::UserError(format!(
            "failed to read events file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect())
}
