//! Error types for diffcue.
//!
//! The diff core never fails; these errors come from the layers around it
//! (git, files, config, terminal delivery).

use crate::exit_codes;
use thiserror::Error;

/// Main error type for diffcue operations.
#[derive(Error, Debug)]
pub enum DiffcueError {
    /// User provided invalid arguments, input, or configuration.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// No terminal could be selected, or sending to it failed.
    #[error("Delivery failed: {0}")]
    DeliveryError(String),
}

impl DiffcueError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffcueError::UserError(_) => exit_codes::USER_ERROR,
            DiffcueError::GitError(_) => exit_codes::GIT_FAILURE,
            DiffcueError::DeliveryError(_) => exit_codes::DELIVERY_FAILURE,
        }
    }
}

/// Result type alias for diffcue operations.
pub type Result<T> = std::result::Result<T, DiffcueError>;
