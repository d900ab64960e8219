//! Deduplicated logging.
//!
//! Pairlist filters emit the same one-line summary on every pipeline cycle;
//! `LogOnce` suppresses a message until its content changes so the log shows
//! transitions rather than a line per cycle.

/// Suppresses repeats of the most recently emitted message.
#[derive(Debug, Default)]
pub struct LogOnce {
    last_message: Option<String>,
    suppressed_count: u64,
}

impl LogOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if a message should be emitted.
    /// Returns true when `message` differs from the previously emitted one.
    /// If false, increments the suppressed counter.
    pub fn should_log(&mut self, message: &str) -> bool {
        if self.last_message.as_deref() == Some(message) {
            self.suppressed_count += 1;
            false
        } else {
            self.last_message = Some(message.to_string());
            true
        }
    }

    /// Returns the number of suppressed messages since the last emitted one,
    /// and resets the counter.
    pub fn get_and_reset_suppressed_count(&mut self) -> u64 {
        let count = self.suppressed_count;
        self.suppressed_count = 0;
        count
    }
}
