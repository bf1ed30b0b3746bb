//! Logger configuration
//!
//! `LoggerConfig` is the explicit, serializable description of a logger that
//! an application builds once and hands to whatever needs logging.

use crate::core::{ErrorPolicy, Level, Logger, Result, TimestampFormat};
use crate::formatters::{JsonFormatter, LogfmtFormatter, TemplateFormatter};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Environment variable read by [`LoggerConfig::from_env`]
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Output format selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FormatConfig {
    /// One JSON object per line
    #[default]
    Json,

    /// key=value pairs
    Logfmt,

    /// Caller supplied template, compiled when the logger is built
    Template { source: String },
}

/// Logger configuration
///
/// # Example
///
/// ```
/// use logo::config::{FormatConfig, LoggerConfig};
/// use logo::{Level, MemorySink};
///
/// let config: LoggerConfig = serde_json::from_str(
///     r#"{"min_level":"important","format":{"kind":"template","source":"{level} {message}"}}"#,
/// ).unwrap();
/// assert_eq!(config.min_level, Level::IMPORTANT);
///
/// let logger = config.build(MemorySink::new()).unwrap();
/// assert_eq!(logger.formatter_name(), "template");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub min_level: Level,
    pub format: FormatConfig,
    pub timestamp_format: TimestampFormat,
    pub error_policy: ErrorPolicy,
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with the minimum level read from `LOG_LEVEL`
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(LOG_LEVEL_ENV).ok().as_deref())
    }

    /// Same as [`LoggerConfig::from_env`] for an already read value.
    ///
    /// `critical`, `important`, `fatal`, `error`, `warning`, `err` and `warn`
    /// select `IMPORTANT`; anything else, or no value, selects `VERBOSE`.
    pub fn from_env_value(value: Option<&str>) -> Self {
        Self {
            min_level: value.map(Level::from_env_value).unwrap_or_default(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: FormatConfig) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Build a logger writing to `output`.
    ///
    /// Invalid templates and timestamp layouts fail here, never at log time.
    pub fn build<W: Write + Send + 'static>(&self, output: W) -> Result<Logger> {
        self.timestamp_format.validate()?;

        let builder = Logger::builder()
            .min_level(self.min_level.clone())
            .output(output)
            .error_policy(self.error_policy);

        let ts = self.timestamp_format.clone();
        let builder = match &self.format {
            FormatConfig::Json => builder.formatter(JsonFormatter::new().with_timestamp_format(ts)?),
            FormatConfig::Logfmt => {
                builder.formatter(LogfmtFormatter::new().with_timestamp_format(ts)?)
            }
            FormatConfig::Template { source } => builder.formatter(
                TemplateFormatter::builder(source)
                    .timestamp_format(ts)
                    .build()?,
            ),
        };

        Ok(builder.build())
    }
}
