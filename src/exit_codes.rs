//! Exit code constants for the goplay CLI.
//!
//! - 0: Success (including deletion batches where some items failed)
//! - 1: User error (bad arguments, unowned or missing directory, bad config)
//! - 2: Filesystem failure (home setup, ledger read/write)
//! - 3: External command failure (editor or module init)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, refused deletion target, or invalid config.
pub const USER_ERROR: i32 = 1;

/// Filesystem failure: home directory setup or ledger I/O.
pub const IO_FAILURE: i32 = 2;

/// External command failure: the editor could not be launched or exited non-zero.
pub const COMMAND_FAILURE: i32 = 3;
