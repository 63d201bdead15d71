//! Stateless replay defense.
//!
//! An envelope is fresh when `now - timestamp <= max_gap`. The subtraction
//! wraps, so a timestamp ahead of `now` yields a huge gap and is rejected
//! exactly like an expired one. No nonces or timestamps are remembered.

use crate::error::EnvelopeError;

/// Default replay window, in seconds.
pub const DEFAULT_MAX_GAP: u64 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayWindow {
    max_gap: u64,
}

impl ReplayWindow {
    pub fn new(max_gap: u64) -> Self {
        Self { max_gap }
    }

    pub fn max_gap(&self) -> u64 {
        self.max_gap
    }

    pub fn check(&self, timestamp: u64, now: u64) -> Result<(), EnvelopeError> {
        let gap = now.wrapping_sub(timestamp);
        if gap > self.max_gap {
            return Err(EnvelopeError::StaleTimestamp {
                timestamp,
                now,
                max_gap: self.max_gap,
            });
        }
        Ok(())
    }
}

impl Default for ReplayWindow {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GAP)
    }
}
