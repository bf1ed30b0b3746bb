//! Filtered hooks

use crate::core::{Context, Event, Level};

/// Wrap `hook` so it only runs when `filter` accepts the event.
///
/// The result is a plain closure; wrap it in an `Arc` to get a
/// [`Hook`](crate::Hook) for [`Logger::pre_hook_arc`](crate::Logger::pre_hook_arc)
/// or [`Logger::post_hook_arc`](crate::Logger::post_hook_arc).
///
/// # Example
///
/// ```
/// use logo::prelude::*;
///
/// let logger = Logger::builder().output(MemorySink::new()).build();
/// logger.post_hook(filtered_hook(
///     |_, event| println!("important: {:?}", event.message),
///     level_filter(Level::IMPORTANT),
/// ));
/// ```
pub fn filtered_hook<H, F>(hook: H, filter: F) -> impl Fn(&Context, &mut Event) + Send + Sync + 'static
where
    H: Fn(&Context, &mut Event) + Send + Sync + 'static,
    F: Fn(&Event) -> bool + Send + Sync + 'static,
{
    move |ctx: &Context, event: &mut Event| {
        if filter(&*event) {
            hook(ctx, event);
        }
    }
}

/// Accept events at or above `level`
pub fn level_filter(level: Level) -> impl Fn(&Event) -> bool + Send + Sync + 'static {
    move |event: &Event| event.level.gte(&level)
}

/// Accept events between `min` and `max`, both inclusive
pub fn level_bounds_filter(min: Level, max: Level) -> impl Fn(&Event) -> bool + Send + Sync + 'static {
    move |event: &Event| event.level.gte(&min) && max.gte(&event.level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Extra, Hook, Logger};
    use crate::formatters::JsonFormatter;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn flag_hook(flag: &Arc<AtomicBool>) -> impl Fn(&Context, &mut Event) + Send + Sync + 'static {
        let flag = Arc::clone(flag);
        move |_: &Context, _: &mut Event| flag.store(true, Ordering::SeqCst)
    }

    fn discard_logger() -> Logger {
        Logger::new(Level::VERBOSE, std::io::sink(), JsonFormatter::new())
    }

    #[test]
    fn test_filtered_hook_custom_filter() {
        let called = Arc::new(AtomicBool::new(false));
        let logger = discard_logger();
        logger.post_hook(filtered_hook(flag_hook(&called), |event: &Event| {
            event.extra.contains_key("request_id")
        }));

        let ctx = Context::background();
        logger.verbose(&ctx, "hook will not be called on this message").unwrap();
        assert!(!called.load(Ordering::SeqCst));

        logger
            .verbose_x(
                &ctx,
                "hook will be called on this message",
                Extra::new().with_field("request_id", "abc"),
            )
            .unwrap();
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_level_filter() {
        let called = Arc::new(AtomicBool::new(false));
        let logger = discard_logger();
        logger.post_hook(filtered_hook(flag_hook(&called), level_filter(Level::IMPORTANT)));

        let ctx = Context::background();
        logger.verbose(&ctx, "not so important").unwrap();
        assert!(!called.load(Ordering::SeqCst));

        logger.important(&ctx, "really important").unwrap();
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_level_bounds_filter() {
        let called = Arc::new(AtomicBool::new(false));
        let logger = discard_logger();
        logger.post_hook(filtered_hook(
            flag_hook(&called),
            level_bounds_filter(Level::VERBOSE, Level::IMPORTANT),
        ));

        let ctx = Context::background();
        let out_level = Level::new(100, "MOST_CRITICAL_EVER");
        logger
            .write(&ctx, out_level, Some("very critical stuff".into()), None)
            .unwrap();
        assert!(!called.load(Ordering::SeqCst));

        logger.important(&ctx, "hello world").unwrap();
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_filtered_shared_hook() {
        let called = Arc::new(AtomicBool::new(false));
        let stored: Hook = Arc::new(flag_hook(&called));
        let filtered: Hook = Arc::new(filtered_hook(
            move |ctx: &Context, event: &mut Event| stored(ctx, event),
            level_filter(Level::IMPORTANT),
        ));

        let logger = discard_logger();
        logger.post_hook_arc(filtered);

        let ctx = Context::background();
        logger.verbose(&ctx, "skipped").unwrap();
        assert!(!called.load(Ordering::SeqCst));

        logger.important(&ctx, "seen").unwrap();
        assert!(called.load(Ordering::SeqCst));
    }

    #[test]
    fn test_filters_compare_by_rank() {
        let event = Event::new(Level::new(20, "ALERT"), Some("x".into()), None);
        assert!(level_filter(Level::IMPORTANT)(&event));
        assert!(level_bounds_filter(Level::IMPORTANT, Level::IMPORTANT)(&event));
        assert!(!level_bounds_filter(Level::VERBOSE, Level::VERBOSE)(&event));
    }
}
