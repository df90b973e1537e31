//! Process exit codes
//!
//! `OK` and `FAILURE` are the script's own contract. The rest follow BSD `sysexits.h`.

/// Successful termination
pub const OK: i32 = 0;

/// Help shown or argument validation failed
pub const FAILURE: i32 = 1;

/// Input/output error (console could not be written)
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
