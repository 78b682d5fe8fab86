//! Implementation of the `diffcue terminals` command.

use super::cwd_config;
use crate::error::Result;
use crate::terminal::{NoResolver, list_terminals, select_terminal};

/// Execute the `diffcue terminals` command.
///
/// Lists discovered terminals; the one `send` would pick without asking is
/// marked with `*`.
pub fn cmd_terminals() -> Result<()> {
    let config = cwd_config()?;
    let terminals = list_terminals(&config)?;

    if terminals.is_empty() {
        println!("No terminals found.");
        return Ok(());
    }

    let selected = select_terminal(
        &terminals,
        config.terminal_name_pattern.as_deref(),
        &config.terminal_hints,
        &NoResolver,
    );

    for (i, terminal) in terminals.iter().enumerate() {
        let marker = if selected == Some(i) { "*" } else { " " };
        println!("{} {:<8} {}", marker, terminal.id, terminal.name);
    }

    if selected.is_none() {
        eprintln!();
        eprintln!("No terminal would be picked automatically; `send` will ask.");
    }

    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use crate::error::DiffcueError;
    use crate::test_support::{DirGuard, create_test_repo};
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_terminals_uses_repo_config() {
        let temp_dir = create_test_repo();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "list_command: \"printf '%%1 zsh\\\\n%%2 claude\\\\n'\"\n",
        )
        .unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        assert!(cmd_terminals().is_ok());
    }

    #[test]
    #[serial]
    fn test_terminals_list_failure() {
        let temp_dir = create_test_repo();
        std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "list_command: \"false\"\n")
            .unwrap();
        let _guard = DirGuard::new(temp_dir.path());

        assert!(matches!(
            cmd_terminals().unwrap_err(),
            DiffcueError::DeliveryError(_)
        ));
    }
}
