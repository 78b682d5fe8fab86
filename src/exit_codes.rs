//! Exit code constants for the diffcue CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable input, invalid config)
//! - 3: Git operation failure
//! - 4: Terminal discovery or delivery failure
//!
//! Code 2 is left unassigned.

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, unreadable files, or an invalid config.
pub const USER_ERROR: i32 = 1;

/// Git operation failure: not a repository, diff failed.
pub const GIT_FAILURE: i32 = 3;

/// Delivery failure: no terminal found, or the send command failed.
pub const DELIVERY_FAILURE: i32 = 4;
