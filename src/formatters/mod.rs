//! Formatter implementations

pub mod json;
pub mod logfmt;
pub mod template;

pub use json::JsonFormatter;
pub use logfmt::LogfmtFormatter;
pub use template::{TemplateFormatter, TemplateFormatterBuilder, TemplateHelper};

// Re-export the trait next to its implementations
pub use crate::core::Formatter;
