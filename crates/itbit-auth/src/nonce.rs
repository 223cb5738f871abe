//! Monotonic nonce counter
//!
//! itBit rejects private requests whose nonce is not strictly greater than
//! the last one seen for the key. The counter is seeded with the current
//! time in milliseconds so a freshly constructed client starts above any
//! nonce issued by a previous process.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{AuthError, AuthResult};

/// Strictly increasing nonce source, one per client instance.
///
/// `next()` is an atomic read-then-increment: concurrent callers can never
/// observe the same value, only race for who gets the smaller one.
#[derive(Debug)]
pub struct NonceCounter(AtomicU64);

impl NonceCounter {
    /// Create a counter seeded with the current unix time in milliseconds
    pub fn from_clock() -> AuthResult<Self> {
        Ok(Self::starting_at(unix_millis()?))
    }

    /// Create a counter starting at an explicit value
    pub fn starting_at(initial: u64) -> Self {
        Self(AtomicU64::new(initial))
    }

    /// Consume the current nonce and advance the counter by exactly 1
    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst)
    }

    /// The value the next call to [`next`](Self::next) will return
    pub fn current(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// Current unix time in milliseconds
pub(crate) fn unix_millis() -> AuthResult<u64> {
    Ok(SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AuthError::SystemClock)?
        .as_millis() as u64)
}
