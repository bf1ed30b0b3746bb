//! Formatter trait for rendering events

use super::{error::Result, event::Event};

/// Converts an event to the line written to the sink.
///
/// Implementations must return an empty string, not an error, for events
/// without a message. They are shared across threads and must not keep
/// mutable state between calls.
pub trait Formatter: Send + Sync {
    fn format(&self, event: &Event) -> Result<String>;
    fn name(&self) -> &str;
}

impl<F: Formatter + ?Sized> Formatter for Box<F> {
    fn format(&self, event: &Event) -> Result<String> {
        (**self).format(event)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
