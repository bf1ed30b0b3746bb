//! Core logger types and traits

pub mod error;
pub mod error_policy;
pub mod event;
pub mod formatter;
pub mod hook;
pub mod log_context;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use error_policy::ErrorPolicy;
pub use event::Event;
pub use formatter::Formatter;
pub use hook::Hook;
pub use log_context::{Context, Extra, FieldValue};
pub use log_level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use timestamp::TimestampFormat;
