//! JSON formatter for structured logging

use crate::core::{Event, Formatter, Result, TimestampFormat};
use serde::Serialize;

/// Field order of one JSON line
#[derive(Serialize)]
struct JsonRecord<'a> {
    time: serde_json::Value,
    level: &'a str,
    message: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    extra: Option<serde_json::Value>,
}

/// Renders each event as a single-line JSON object
///
/// `{"time":"...","level":"VERBOSE","message":"hello","extra":{...}}`, with
/// `extra` left out when empty. The level is written by name, never by rank.
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp format for this formatter
    ///
    /// Custom layouts are validated here, so a bad layout never reaches `write`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logo::{JsonFormatter, TimestampFormat};
    ///
    /// let formatter = JsonFormatter::new()
    ///     .with_timestamp_format(TimestampFormat::UnixMillis)
    ///     .unwrap();
    /// assert!(JsonFormatter::new()
    ///     .with_timestamp_format(TimestampFormat::Custom("%Q".to_string()))
    ///     .is_err());
    /// ```
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Result<Self> {
        format.validate()?;
        self.timestamp_format = format;
        Ok(self)
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, event: &Event) -> Result<String> {
        let message = match &event.message {
            Some(message) => message.to_json_value()?,
            None => return Ok(String::new()),
        };

        let extra = if event.extra.is_empty() {
            None
        } else {
            let mut object = serde_json::Map::new();
            for (key, value) in event.extra.iter() {
                object.insert(key.clone(), value.to_json_value()?);
            }
            Some(serde_json::Value::Object(object))
        };

        let record = JsonRecord {
            time: self.timestamp_format.format_json(&event.timestamp)?,
            level: event.level.name(),
            message,
            extra,
        };

        Ok(serde_json::to_string(&record)?)
    }

    fn name(&self) -> &str {
        "json"
    }
}
