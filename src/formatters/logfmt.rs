//! Logfmt formatter (key=value pairs)
//!
//! Example: `time=2025-01-08T10:30:45Z level=VERBOSE message="Request processed" user="alice"`

use crate::core::{Event, FieldValue, Formatter, LoggerError, Result, TimestampFormat};

#[derive(Debug, Clone, Default)]
pub struct LogfmtFormatter {
    timestamp_format: TimestampFormat,
}

impl LogfmtFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the timestamp format; custom layouts are validated here
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Result<Self> {
        format.validate()?;
        self.timestamp_format = format;
        Ok(self)
    }

    fn format_value(&self, value: &FieldValue) -> Result<String> {
        Ok(match value {
            FieldValue::String(s) => quote_value(s),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::Float(f) if !f.is_finite() => {
                return Err(LoggerError::serialization(format!(
                    "float {} has no logfmt representation",
                    f
                )))
            }
            FieldValue::Float(f) => f.to_string(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Null => "null".to_string(),
            FieldValue::List(_) | FieldValue::Map(_) => {
                quote_value(&serde_json::to_string(&value.to_json_value()?)?)
            }
        })
    }
}

impl Formatter for LogfmtFormatter {
    fn format(&self, event: &Event) -> Result<String> {
        let message = match &event.message {
            Some(message) => message,
            None => return Ok(String::new()),
        };

        let mut parts = Vec::with_capacity(3 + event.extra.len());
        parts.push(format!(
            "time={}",
            escape_value(&self.timestamp_format.format(&event.timestamp)?)
        ));
        parts.push(format!("level={}", escape_value(event.level.name())));

        // message is always quoted
        let message = match message {
            FieldValue::String(s) => quote_value(s),
            other => quote_value(&other.to_string()),
        };
        parts.push(format!("message={}", message));

        for (key, value) in event.extra.iter() {
            parts.push(format!("{}={}", escape_key(key), self.format_value(value)?));
        }

        Ok(parts.join(" "))
    }

    fn name(&self) -> &str {
        "logfmt"
    }
}

/// Escape a logfmt key (remove spaces and special chars)
fn escape_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-' || *c == '.')
        .collect()
}

/// Escape a logfmt value (quote if contains spaces)
fn escape_value(value: &str) -> String {
    if value.is_empty() || value.contains(' ') || value.contains('"') || value.contains('=') {
        quote_value(value)
    } else {
        value.to_string()
    }
}

fn quote_value(value: &str) -> String {
    format!(
        "\"{}\"",
        value
            .replace('\\', "\\\\")
            .replace('"', "\\\"")
            .replace('\n', "\\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Extra, Level};

    #[test]
    fn test_logfmt_format() {
        let event = Event::new(Level::IMPORTANT, Some("Warning message".into()), None);
        let result = LogfmtFormatter::new().format(&event).unwrap();

        assert!(result.starts_with("time="));
        assert!(result.contains("level=IMPORTANT"));
        assert!(result.contains("message=\"Warning message\""));
    }

    #[test]
    fn test_logfmt_with_extra() {
        let extra = Extra::new()
            .with_field("user", "alice")
            .with_field("count", 5)
            .with_field("query", "SELECT * FROM users WHERE id=1");
        let event = Event::new(Level::VERBOSE, Some("Debug info".into()), Some(extra));
        let result = LogfmtFormatter::new().format(&event).unwrap();

        assert!(result.contains("user=\"alice\""));
        assert!(result.contains("count=5"));
        assert!(result.contains("query=\"SELECT * FROM users WHERE id=1\""));
    }

    #[test]
    fn test_logfmt_escapes() {
        let extra = Extra::new().with_field("bad key!", "say \"hi\"\nbye");
        let event = Event::new(Level::VERBOSE, Some("x".into()), Some(extra));
        let result = LogfmtFormatter::new().format(&event).unwrap();

        assert!(result.contains("badkey=\"say \\\"hi\\\"\\nbye\""));
        assert!(!result.contains('\n'));
    }

    #[test]
    fn test_logfmt_empty_message() {
        let event = Event::new(Level::VERBOSE, None, None);
        assert_eq!(LogfmtFormatter::new().format(&event).unwrap(), "");
    }

    #[test]
    fn test_logfmt_nested_values_as_json() {
        let extra = Extra::new().with_field("tags", vec!["a", "b"]);
        let event = Event::new(Level::VERBOSE, Some("x".into()), Some(extra));
        let result = LogfmtFormatter::new().format(&event).unwrap();

        assert!(result.contains(r#"tags="[\"a\",\"b\"]""#));
    }

    #[test]
    fn test_logfmt_rejects_nan() {
        let extra = Extra::new().with_field("ratio", f64::NAN);
        let event = Event::new(Level::VERBOSE, Some("x".into()), Some(extra));
        assert!(LogfmtFormatter::new().format(&event).is_err());
    }

    #[test]
    fn test_logfmt_invalid_custom_layout() {
        let err = LogfmtFormatter::new()
            .with_timestamp_format(TimestampFormat::Custom("%Y-%Q".to_string()))
            .unwrap_err();
        assert!(err.is_configuration());

        let formatter = LogfmtFormatter {
            timestamp_format: TimestampFormat::Custom("%Q".to_string()),
        };
        let event = Event::new(Level::VERBOSE, Some("x".into()), None);
        assert!(matches!(
            formatter.format(&event).unwrap_err(),
            LoggerError::Serialization { .. }
        ));
    }

    #[test]
    fn test_logfmt_custom_layout() {
        let formatter = LogfmtFormatter::new()
            .with_timestamp_format(TimestampFormat::Custom("%Y".to_string()))
            .unwrap();
        let event = Event::new(Level::VERBOSE, Some("x".into()), None);
        let year = event.timestamp.format("%Y").to_string();
        assert!(formatter.format(&event).unwrap().starts_with(&format!("time={} ", year)));
    }
}
