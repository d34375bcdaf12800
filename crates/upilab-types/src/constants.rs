//! System-wide constants for the UPI lab.

/// Default per-transaction ceiling in rupees (UPI default of Rs 1,00,000).
pub const DEFAULT_AMOUNT_LIMIT: i64 = 100_000;

/// Minimum length of the local (user) part of a VPA.
pub const MIN_USERNAME_LEN: usize = 3;

/// Separator between the user and handle parts of a VPA.
pub const VPA_SEPARATOR: char = '@';

/// Number of random bytes drawn for a reference token.
pub const REFERENCE_BYTES: usize = 8;

/// Length of a rendered reference token (two hex characters per byte).
pub const REFERENCE_LEN: usize = REFERENCE_BYTES * 2;

/// Placeholder shown in place of a reference on failed simulations.
pub const REFERENCE_NOT_APPLICABLE: &str = "N/A";

/// Status line for a successful simulation.
pub const STATUS_SUCCESS: &str = "SUCCESS (SIMULATED)";

/// Prefix of every failure status line.
pub const STATUS_FAILED_PREFIX: &str = "FAILED";

/// Timestamp layout used when rendering records.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";
