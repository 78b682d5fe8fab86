//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::{MESSAGE_TEMPLATE_VARIABLES, SEND_COMMAND_VARIABLES, SUBMIT_COMMAND_VARIABLES};
use crate::error::{DiffcueError, Result};
use crate::template::check_template;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Config file name, looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".diffcue.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DiffcueError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffcueError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.diffcue.yaml` from `repo_root`, or defaults when it does not exist.
    pub fn load_for_repo<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DiffcueError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            DiffcueError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `list_command` and `send_command` must split into at least one word
    /// - command arguments and `message_template` may only reference their
    ///   documented variables
    /// - `ignore_globs` must all compile
    pub fn validate(&self) -> Result<()> {
        split_command("list_command", &self.list_command)?;

        for arg in split_command("send_command", &self.send_command)? {
            check_template(&arg, SEND_COMMAND_VARIABLES).map_err(|e| invalid("send_command", e))?;
        }

        if let Some(submit) = &self.submit_command {
            for arg in split_command("submit_command", submit)? {
                check_template(&arg, SUBMIT_COMMAND_VARIABLES)
                    .map_err(|e| invalid("submit_command", e))?;
            }
        }

        check_template(&self.message_template, MESSAGE_TEMPLATE_VARIABLES)
            .map_err(|e| invalid("message_template", e))?;

        self.ignore_set()?;

        Ok(())
    }

    /// Compile `ignore_globs` into a matcher.
    pub fn ignore_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.ignore_globs {
            let glob = Glob::new(pattern).map_err(|e| {
                DiffcueError::UserError(format!(
                    "config validation failed: invalid glob '{}' in ignore_globs: {}",
                    pattern, e
                ))
            })?;
            builder.add(glob);
        }
        builder.build().map_err(|e| {
            DiffcueError::UserError(format!(
                "config validation failed: failed to build ignore_globs: {}",
                e
            ))
        })
    }

    /// Whether a repo-relative path may carry annotations.
    ///
    /// Paths matching any of `ignore_globs` are excluded.
    pub fn is_annotatable(&self, relative_path: &str) -> Result<bool> {
        Ok(!self.ignore_set()?.is_match(relative_path))
    }
}

/// Split a configured command line into words with shell quoting rules.
pub(crate) fn split_command(field: &str, command: &str) -> Result<Vec<String>> {
    let words = shell_words::split(command).map_err(|e| {
        DiffcueError::UserError(format!(
            "config validation failed: cannot parse {} '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            field, command, e
        ))
    })?;

    if words.is_empty() {
        return Err(DiffcueError::UserError(format!(
            "config validation failed: {} must not be empty",
            field
        )));
    }

    Ok(words)
}

fn invalid(field: &str, err: impl std::fmt::Display) -> DiffcueError {
    DiffcueError::UserError(format!("config validation failed: {}: {}", field, err))
}
