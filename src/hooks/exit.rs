//! Process-terminating hooks

use super::filter::{filtered_hook, level_filter};
use crate::core::{Context, Event, Level};

/// Exit the process with `code` for events at or above `level`.
///
/// Register as a post-hook: the line has already been written and flushed
/// when post-hooks run, so it is not lost.
pub fn exit_on_level(level: Level, code: i32) -> impl Fn(&Context, &mut Event) + Send + Sync + 'static {
    filtered_hook(
        move |_: &Context, _: &mut Event| std::process::exit(code),
        level_filter(level),
    )
}

/// Exit with status 1 after any `IMPORTANT` (or higher) event.
///
/// ```no_run
/// use logo::prelude::*;
///
/// let logger = Logger::from_env();
/// logger.post_hook(exit_on_important());
/// let _ = logger.important(&Context::background(), "cannot continue");
/// ```
pub fn exit_on_important() -> impl Fn(&Context, &mut Event) + Send + Sync + 'static {
    exit_on_level(Level::IMPORTANT, 1)
}
