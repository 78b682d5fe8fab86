//! Configuration model for diffcue.
//!
//! This module defines the Config struct that represents `.diffcue.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of command and message templates.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::CONFIG_FILE_NAME;
pub(crate) use operations::split_command;
pub use types::DiffMode;
