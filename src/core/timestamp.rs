//! Timestamp formatting utilities
//!
//! Provides the timestamp layouts used by formatters and template helpers.

use super::error::{LoggerError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use logo::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now()).unwrap();
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// RFC 3339 with as many fractional digits as needed: `2025-01-08T10:30:45.123456Z`
    ///
    /// This is the default and the layout of the JSON wire format.
    #[default]
    Rfc3339Nanos,

    /// RFC 3339 format: `2025-01-08T10:30:45+00:00`
    Rfc3339,

    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    Iso8601,

    /// Ruby date layout: `Wed Jan 08 10:30:45 +0000 2025`
    Ruby,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// ```
    /// use logo::TimestampFormat;
    ///
    /// // Apache log format
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S %z".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Utc>` according to this format
    ///
    /// Fails for custom layouts chrono cannot render instead of panicking.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        Ok(match self {
            TimestampFormat::Rfc3339Nanos => datetime.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
            TimestampFormat::Ruby => datetime.format("%a %b %d %H:%M:%S %z %Y").to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut out = String::new();
                write!(out, "{}", datetime.format(format_str)).map_err(|_| {
                    LoggerError::serialization(format!(
                        "timestamp layout '{}' cannot be rendered",
                        format_str
                    ))
                })?;
                out
            }
        })
    }

    /// Format as a JSON value; numeric layouts stay numbers
    pub(crate) fn format_json(&self, datetime: &DateTime<Utc>) -> Result<serde_json::Value> {
        Ok(match self {
            TimestampFormat::UnixMillis => {
                serde_json::Value::Number(datetime.timestamp_millis().into())
            }
            _ => serde_json::Value::String(self.format(datetime)?),
        })
    }

    /// Reject custom layouts chrono cannot render
    pub fn validate(&self) -> Result<()> {
        if let TimestampFormat::Custom(format_str) = self {
            if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                return Err(LoggerError::config(
                    "TimestampFormat",
                    format!("invalid strftime layout '{}'", format_str),
                ));
            }
        }
        Ok(())
    }

    /// Look up a named layout, as used by template helpers
    pub fn from_helper_name(name: &str) -> Option<Self> {
        match name {
            "rfc3339" => Some(TimestampFormat::Rfc3339),
            "rfc3339nano" => Some(TimestampFormat::Rfc3339Nanos),
            "iso8601" => Some(TimestampFormat::Iso8601),
            "ruby" => Some(TimestampFormat::Ruby),
            "unix_millis" => Some(TimestampFormat::UnixMillis),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_rfc3339_nanos_format() {
        let result = TimestampFormat::Rfc3339Nanos.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123456Z");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime()).unwrap();
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.contains("+00:00") || result.ends_with('Z'));
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "2025-01-08T10:30:45.123Z");
    }

    #[test]
    fn test_ruby_format() {
        let result = TimestampFormat::Ruby.format(&fixed_datetime()).unwrap();
        assert_eq!(result, "Wed Jan 08 10:30:45 +0000 2025");
    }

    #[test]
    fn test_unix_millis_format() {
        let format = TimestampFormat::UnixMillis;
        let parsed: i64 = format.format(&fixed_datetime()).unwrap().parse().expect("valid millis");
        assert_eq!(parsed, fixed_datetime().timestamp_millis());
        assert!(format.format_json(&fixed_datetime()).unwrap().is_number());
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()).unwrap(), "2025/01/08 10:30");
    }

    #[test]
    fn test_validate_custom_layout() {
        assert!(TimestampFormat::Custom("%Y-%m-%d".to_string()).validate().is_ok());
        assert!(TimestampFormat::Custom("%Y-%Q".to_string()).validate().is_err());
        assert!(TimestampFormat::Ruby.validate().is_ok());
    }

    #[test]
    fn test_unrenderable_custom_layout_is_error() {
        let format = TimestampFormat::Custom("%Q".to_string());
        let err = format.format(&fixed_datetime()).unwrap_err();
        assert!(matches!(err, LoggerError::Serialization { .. }));
        assert!(format.format_json(&fixed_datetime()).is_err());
    }

    #[test]
    fn test_default_is_rfc3339_nanos() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::Rfc3339Nanos);
    }

    #[test]
    fn test_from_helper_name() {
        assert_eq!(TimestampFormat::from_helper_name("ruby"), Some(TimestampFormat::Ruby));
        assert_eq!(TimestampFormat::from_helper_name("pad"), None);
    }

    #[test]
    fn test_deserialization() {
        let format: TimestampFormat = serde_json::from_str("\"Ruby\"").expect("deserialize Ruby");
        assert_eq!(format, TimestampFormat::Ruby);

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
