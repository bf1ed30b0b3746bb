//! Logging macros with `format!`-style interpolation.
//!
//! The message is interpolated before the event is built, so formatting
//! mistakes are compile errors at the call site.
//!
//! # Examples
//!
//! ```
//! use logo::prelude::*;
//! use logo::verbosef;
//!
//! let logger = Logger::builder().output(MemorySink::new()).build();
//! let ctx = Context::background();
//!
//! let port = 8080;
//! verbosef!(logger, &ctx, "Server listening on port {}", port).unwrap();
//! ```

/// Log an interpolated message at the given level.
///
/// # Examples
///
/// ```
/// # use logo::prelude::*;
/// # let logger = Logger::builder().output(MemorySink::new()).build();
/// # let ctx = Context::background();
/// use logo::writef;
/// writef!(logger, &ctx, Level::VERBOSE, "My name is {}, I'm {} y.o.", "Ildar", 23).unwrap();
/// ```
#[macro_export]
macro_rules! writef {
    ($logger:expr, $ctx:expr, $level:expr, $($arg:tt)+) => {
        $logger.writef($ctx, $level, format_args!($($arg)+))
    };
}

/// Log an interpolated message at `VERBOSE`.
#[macro_export]
macro_rules! verbosef {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::writef!($logger, $ctx, $crate::Level::VERBOSE, $($arg)+)
    };
}

/// Log an interpolated message at `IMPORTANT`.
///
/// # Examples
///
/// ```
/// # use logo::prelude::*;
/// # let logger = Logger::builder().output(MemorySink::new()).build();
/// # let ctx = Context::background();
/// use logo::importantf;
/// importantf!(logger, &ctx, "Retry attempt {} of {}", 3, 5).unwrap();
/// ```
#[macro_export]
macro_rules! importantf {
    ($logger:expr, $ctx:expr, $($arg:tt)+) => {
        $crate::writef!($logger, $ctx, $crate::Level::IMPORTANT, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Context, Level, Logger};
    use crate::formatters::TemplateFormatter;
    use crate::sinks::MemorySink;

    fn text_logger(level: Level) -> (Logger, MemorySink) {
        let sink = MemorySink::new();
        let formatter = TemplateFormatter::new("{level} {message}").unwrap();
        (Logger::new(level, sink.clone(), formatter), sink)
    }

    #[test]
    fn test_writef_macro() {
        let (logger, sink) = text_logger(Level::VERBOSE);
        let ctx = Context::background();
        writef!(logger, &ctx, Level::VERBOSE, "Hello, {}", "Jon Snow").unwrap();

        assert_eq!(sink.lines(), vec!["VERBOSE Hello, Jon Snow"]);
    }

    #[test]
    fn test_verbosef_macro() {
        let (logger, sink) = text_logger(Level::VERBOSE);
        let ctx = Context::background();
        verbosef!(logger, &ctx, "Count: {}", 5).unwrap();

        assert_eq!(sink.lines(), vec!["VERBOSE Count: 5"]);
    }

    #[test]
    fn test_importantf_macro() {
        let (logger, sink) = text_logger(Level::IMPORTANT);
        let ctx = Context::background();
        verbosef!(logger, &ctx, "hidden {}", 1).unwrap();
        importantf!(logger, &ctx, "Code: {}", 500).unwrap();

        assert_eq!(sink.lines(), vec!["IMPORTANT Code: 500"]);
    }
}
