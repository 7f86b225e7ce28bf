//! Request timestamps for Bitget API authentication.
//!
//! Every signed request carries the wall-clock time in milliseconds. Bitget
//! rejects requests whose timestamp is more than a few seconds away from its
//! own clock, so the value is taken at signing time.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing timestamps for signed requests.
pub trait TimestampProvider: Send + Sync {
    /// Milliseconds since the UNIX epoch.
    fn now_millis(&self) -> u64;
}

/// Reads the system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock provider.
    pub fn new() -> Self {
        Self
    }
}

impl TimestampProvider for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Always returns the same timestamp.
///
/// Useful for reproducing a signature or pinning headers in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimestamp(pub u64);

impl TimestampProvider for FixedTimestamp {
    fn now_millis(&self) -> u64 {
        self.0
    }
}
