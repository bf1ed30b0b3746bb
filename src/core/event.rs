//! Log event structure

use super::log_context::{Extra, FieldValue};
use super::log_level::Level;
use chrono::{DateTime, Utc};

/// One log occurrence.
///
/// Built once per [`Logger::write`](crate::Logger::write) call. Hooks receive
/// it by mutable reference and may add to `extra`; nothing keeps it after the
/// call returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub timestamp: DateTime<Utc>,
    pub level: Level,
    pub message: Option<FieldValue>,
    pub extra: Extra,
}

impl Event {
    /// Stamp a new event with the current time.
    ///
    /// A missing `extra` becomes an empty mapping so hooks can always insert.
    pub fn new(level: Level, message: Option<FieldValue>, extra: Option<Extra>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message,
            extra: extra.unwrap_or_default(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// True when the event carries no message and should produce no output
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.message.is_none()
    }
}
