//! # logo
//!
//! A small structured logging library: timestamped, leveled events rendered
//! through pluggable formatters, with pre/post hooks that can observe or
//! extend each event.
//!
//! ## Features
//!
//! - **Single choke point**: every call funnels into `Logger::write`
//! - **Formatters**: JSON lines, logfmt and compiled text templates
//! - **Hooks**: pre-hooks may enrich events, post-hooks see what was written
//! - **Thread Safe**: one lock per logger, lines never interleave
//!
//! ## Example
//!
//! ```
//! use logo::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::builder()
//!     .min_level(Level::VERBOSE)
//!     .output(sink.clone())
//!     .pre_hook(event_id)
//!     .build();
//!
//! let ctx = Context::background();
//! logger.verbose(&ctx, "hello!").unwrap();
//! logger.important_x(&ctx, "hello, it's important", Extra::new().with_field("a", 42)).unwrap();
//!
//! assert_eq!(sink.lines().len(), 2);
//! ```

pub mod config;
pub mod core;
pub mod formatters;
pub mod hooks;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::config::{FormatConfig, LoggerConfig};
    pub use crate::core::{
        Context, ErrorPolicy, Event, Extra, FieldValue, Formatter, Hook, Level, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, Result, TimestampFormat,
    };
    pub use crate::formatters::{JsonFormatter, LogfmtFormatter, TemplateFormatter};
    pub use crate::hooks::{
        event_id, exit_on_important, exit_on_level, filtered_hook, level_bounds_filter,
        level_filter,
    };
    pub use crate::sinks::{FileSink, MemorySink};
}

pub use crate::config::{FormatConfig, LoggerConfig};
pub use crate::core::{
    Context, ErrorPolicy, Event, Extra, FieldValue, Formatter, Hook, Level, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, Result, TimestampFormat,
};
pub use crate::formatters::{JsonFormatter, LogfmtFormatter, TemplateFormatter};
pub use crate::sinks::{FileSink, MemorySink};
