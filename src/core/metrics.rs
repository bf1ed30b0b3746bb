//! Logger metrics for observability
//!
//! Counters describing what happened to each `write` call.

use std::sync::atomic::{AtomicU64, Ordering};

/// Per-logger write counters
///
/// # Example
///
/// ```
/// use logo::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_written();
/// metrics.record_below_level();
///
/// assert_eq!(metrics.written_count(), 1);
/// assert_eq!(metrics.total_calls(), 2);
/// ```
#[derive(Debug, Default)]
pub struct LoggerMetrics {
    /// Events formatted and written to the sink
    written: AtomicU64,

    /// Events stopped by the level gate
    below_level: AtomicU64,

    /// Events without a message
    empty: AtomicU64,

    /// Events whose formatting or sink write failed
    failed: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            written: AtomicU64::new(0),
            below_level: AtomicU64::new(0),
            empty: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn written_count(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn below_level_count(&self) -> u64 {
        self.below_level.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn empty_count(&self) -> u64 {
        self.empty.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failed_count(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_below_level(&self) -> u64 {
        self.below_level.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_empty(&self) -> u64 {
        self.empty.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failed(&self) -> u64 {
        self.failed.fetch_add(1, Ordering::Relaxed)
    }

    /// Total number of `write` calls observed
    pub fn total_calls(&self) -> u64 {
        self.written_count() + self.below_level_count() + self.empty_count() + self.failed_count()
    }

    /// Failure rate as a percentage (0.0 - 100.0)
    ///
    /// Returns 0.0 if nothing has been logged.
    pub fn failure_rate(&self) -> f64 {
        let total = self.total_calls();
        if total == 0 {
            return 0.0;
        }
        (self.failed_count() as f64 / total as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.total_calls(), 0);
        assert_eq!(metrics.failure_rate(), 0.0);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        for _ in 0..9 {
            metrics.record_written();
        }
        metrics.record_failed();

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }
}
