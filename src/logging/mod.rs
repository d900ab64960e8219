//! Logging utilities.
//!
//! Provides `LogOnce` to deduplicate per-cycle summary messages while still
//! tracking how many repeats were suppressed.

pub mod log_once;

pub use log_once::LogOnce;
