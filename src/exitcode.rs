//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Admission refused by the house rules
pub const REFUSED: i32 = 1;

/// Data format error
pub const DATAERR: i32 = 65;

/// Cannot open input
pub const NOINPUT: i32 = 66;

/// Service unavailable (ticket pool exhausted)
pub const UNAVAILABLE: i32 = 69;

/// Configuration error
pub const CONFIG: i32 = 78;
