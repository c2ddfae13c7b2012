//! Timestamp type used throughout the gateway.
//!
//! Timestamps are Unix epoch seconds (UTC). Session timestamps are written by
//! the Discord bot and the proof-callback processor; this crate only reads
//! and compares them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    /// Get the current system time as a `Timestamp`.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock before Unix epoch")
            .as_secs();
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// Build from millisecond precision, truncating sub-second detail.
    pub fn from_millis(millis: i64) -> Self {
        Self((millis.max(0) as u64) / 1000)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_truncate_toward_zero() {
        assert_eq!(Timestamp::from_millis(1_999), Timestamp::new(1));
        assert_eq!(Timestamp::from_millis(-5), Timestamp::EPOCH);
    }
}
