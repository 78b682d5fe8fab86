//! Tests for config functionality.

use crate::config::types::DEFAULT_MESSAGE_TEMPLATE;
use crate::config::{CONFIG_FILE_NAME, Config, DiffMode};
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.diff_mode, DiffMode::Unstaged);
    assert!(config.ignore_globs.is_empty());
    assert!(config.terminal_name_pattern.is_none());
    assert_eq!(config.terminal_hints, vec!["claude", "node"]);
    assert!(config.list_command.starts_with("tmux list-panes"));
    assert_eq!(config.send_command, "tmux send-keys -t {target} -l {message}");
    assert_eq!(
        config.submit_command.as_deref(),
        Some("tmux send-keys -t {target} Enter")
    );
    assert_eq!(config.message_template, DEFAULT_MESSAGE_TEMPLATE);
    assert!(config.event_log);
    assert!(config.validate().is_ok());
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.diff_mode, DiffMode::Unstaged);
    assert_eq!(config.terminal_hints, vec!["claude", "node"]);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
diff_mode: head
terminal_name_pattern: agent
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.diff_mode, DiffMode::Head);
    assert_eq!(config.terminal_name_pattern.as_deref(), Some("agent"));
    assert_eq!(config.terminal_hints, vec!["claude", "node"]);
    assert!(config.event_log);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
diff_mode: staged
ignore_globs:
  - "*.lock"
  - "vendor/**"
terminal_name_pattern: Claude
terminal_hints: [codex]
list_command: "wezterm cli list"
send_command: "wezterm cli send-text --pane-id {target} {message}"
submit_command: null
message_template: "{file_ref}: {feedback}"
event_log: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.diff_mode, DiffMode::Staged);
    assert_eq!(config.ignore_globs, vec!["*.lock", "vendor/**"]);
    assert_eq!(config.terminal_hints, vec!["codex"]);
    assert_eq!(config.list_command, "wezterm cli list");
    assert!(config.submit_command.is_none());
    assert_eq!(config.message_template, "{file_ref}: {feedback}");
    assert!(!config.event_log);
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = "diff_mode: head\nfuture_option: 42\n";
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.diff_mode, DiffMode::Head);
}

#[test]
fn test_invalid_diff_mode_rejected() {
    let err = Config::from_yaml("diff_mode: sideways\n").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_empty_send_command_rejected() {
    let err = Config::from_yaml("send_command: \"\"\n").unwrap_err();
    assert!(err.to_string().contains("send_command must not be empty"));
}

#[test]
fn test_unbalanced_quotes_rejected() {
    let err = Config::from_yaml("list_command: \"tmux 'list\"\n").unwrap_err();
    assert!(err.to_string().contains("cannot parse list_command"));
}

#[test]
fn test_unknown_template_variable_rejected() {
    let err = Config::from_yaml("send_command: \"send {pane}\"\n").unwrap_err();
    assert!(err.to_string().contains("send_command"));
    assert!(err.to_string().contains("'pane'"));

    let err = Config::from_yaml("submit_command: \"submit {message}\"\n").unwrap_err();
    assert!(err.to_string().contains("submit_command"));

    let err = Config::from_yaml("message_template: \"{diff}\"\n").unwrap_err();
    assert!(err.to_string().contains("message_template"));
}

#[test]
fn test_invalid_glob_rejected() {
    let err = Config::from_yaml("ignore_globs: [\"src/[\"]\n").unwrap_err();
    assert!(err.to_string().contains("invalid glob"));
}

#[test]
fn test_is_annotatable() {
    let config = Config::from_yaml("ignore_globs: [\"*.lock\", \"generated/**\"]\n").unwrap();

    assert!(config.is_annotatable("src/lib.rs").unwrap());
    assert!(!config.is_annotatable("Cargo.lock").unwrap());
    assert!(!config.is_annotatable("generated/api/client.rs").unwrap());
}

#[test]
fn test_roundtrip_yaml() {
    let mut config = Config::default();
    config.terminal_name_pattern = Some("claude".to_string());

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(parsed.terminal_name_pattern.as_deref(), Some("claude"));
    assert_eq!(parsed.send_command, config.send_command);
}

#[test]
fn test_load_for_repo() {
    let temp_dir = TempDir::new().unwrap();

    let config = Config::load_for_repo(temp_dir.path()).unwrap();
    assert_eq!(config.diff_mode, DiffMode::Unstaged);

    std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "diff_mode: staged\n").unwrap();
    let config = Config::load_for_repo(temp_dir.path()).unwrap();
    assert_eq!(config.diff_mode, DiffMode::Staged);
}

#[test]
fn test_diff_mode_from_str() {
    assert_eq!(DiffMode::from_str("unstaged"), Some(DiffMode::Unstaged));
    assert_eq!(DiffMode::from_str("staged"), Some(DiffMode::Staged));
    assert_eq!(DiffMode::from_str("head"), Some(DiffMode::Head));
    assert_eq!(DiffMode::from_str("HEAD"), None);
}
