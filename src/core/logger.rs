//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    error_policy::ErrorPolicy,
    event::Event,
    formatter::Formatter,
    hook::Hook,
    log_context::{Context, Extra, FieldValue},
    log_level::Level,
    metrics::LoggerMetrics,
};
use crate::formatters::JsonFormatter;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// State touched by every `write`, guarded by one lock
struct LoggerState {
    output: Box<dyn Write + Send>,
    pre_hooks: Vec<Hook>,
    post_hooks: Vec<Hook>,
}

/// Leveled event logger.
///
/// Every entry point funnels into [`Logger::write`], which holds a single lock
/// for the whole call: event construction, pre-hooks, level gate, formatting,
/// output and post-hooks. Lines from concurrent callers never interleave and
/// hooks observe a strict total order of events.
///
/// # Example
///
/// ```
/// use logo::prelude::*;
///
/// let sink = MemorySink::new();
/// let logger = Logger::new(Level::VERBOSE, sink.clone(), JsonFormatter::new());
///
/// logger.verbose(&Context::background(), "hello").unwrap();
/// assert_eq!(sink.lines().len(), 1);
/// ```
pub struct Logger {
    min_level: Level,
    formatter: Box<dyn Formatter>,
    error_policy: ErrorPolicy,
    metrics: Arc<LoggerMetrics>,
    state: Mutex<LoggerState>,
}

impl Logger {
    #[must_use]
    pub fn new<W, F>(min_level: Level, output: W, formatter: F) -> Self
    where
        W: Write + Send + 'static,
        F: Formatter + 'static,
    {
        Self::from_parts(
            min_level,
            Box::new(output),
            Box::new(formatter),
            ErrorPolicy::default(),
        )
    }

    fn from_parts(
        min_level: Level,
        output: Box<dyn Write + Send>,
        formatter: Box<dyn Formatter>,
        error_policy: ErrorPolicy,
    ) -> Self {
        Self {
            min_level,
            formatter,
            error_policy,
            metrics: Arc::new(LoggerMetrics::new()),
            state: Mutex::new(LoggerState {
                output,
                pre_hooks: Vec::new(),
                post_hooks: Vec::new(),
            }),
        }
    }

    /// Quick-start logger: JSON lines on stderr, level taken from `LOG_LEVEL`
    #[must_use]
    pub fn from_env() -> Self {
        let config = crate::config::LoggerConfig::from_env();
        Logger::builder()
            .min_level(config.min_level)
            .output(io::stderr())
            .build()
    }

    pub fn min_level(&self) -> &Level {
        &self.min_level
    }

    pub fn set_min_level(&mut self, level: Level) {
        self.min_level = level;
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    pub fn set_error_policy(&mut self, policy: ErrorPolicy) {
        self.error_policy = policy;
    }

    /// Name of the configured formatter
    pub fn formatter_name(&self) -> &str {
        self.formatter.name()
    }

    /// Register a hook run before the level gate, in registration order
    pub fn pre_hook<H>(&self, hook: H)
    where
        H: Fn(&Context, &mut Event) + Send + Sync + 'static,
    {
        self.pre_hook_arc(Arc::new(hook));
    }

    /// Register an already shared [`Hook`] as a pre-hook
    pub fn pre_hook_arc(&self, hook: Hook) {
        self.state.lock().pre_hooks.push(hook);
    }

    /// Register a hook run after the event has been written, in registration order
    pub fn post_hook<H>(&self, hook: H)
    where
        H: Fn(&Context, &mut Event) + Send + Sync + 'static,
    {
        self.post_hook_arc(Arc::new(hook));
    }

    /// Register an already shared [`Hook`] as a post-hook
    pub fn post_hook_arc(&self, hook: Hook) {
        self.state.lock().post_hooks.push(hook);
    }

    /// Write one event.
    ///
    /// Pre-hooks run first and may change the event, including its level and
    /// message. Events below the minimum level or without a message stop there
    /// with no output and no post-hooks. Otherwise the formatted line plus a
    /// newline is written and flushed, then post-hooks run.
    ///
    /// The event is stamped once the logger lock is held, not when `write` is
    /// entered. A caller blocked behind another writer gets the later time, so
    /// timestamps in the output never go backwards.
    ///
    /// Formatter and sink failures follow the configured [`ErrorPolicy`].
    pub fn write(
        &self,
        ctx: &Context,
        level: Level,
        message: Option<FieldValue>,
        extra: Option<Extra>,
    ) -> Result<()> {
        let mut state = self.state.lock();
        let mut event = Event::new(level, message, extra);

        for hook in &state.pre_hooks {
            hook(ctx, &mut event);
        }

        if self.min_level.gt(&event.level) {
            self.metrics.record_below_level();
            return Ok(());
        }

        if event.is_empty() {
            self.metrics.record_empty();
            return Ok(());
        }

        let line = match self.formatter.format(&event) {
            Ok(line) => line,
            Err(e) => return self.fail(e),
        };

        if let Err(e) = Self::emit(state.output.as_mut(), line) {
            return self.fail(e);
        }
        self.metrics.record_written();

        for hook in &state.post_hooks {
            hook(ctx, &mut event);
        }

        Ok(())
    }

    fn emit(output: &mut dyn Write, mut line: String) -> Result<()> {
        line.push('\n');
        output
            .write_all(line.as_bytes())
            .map_err(|e| LoggerError::sink_write("writing event", e))?;
        output
            .flush()
            .map_err(|e| LoggerError::sink_write("flushing sink", e))
    }

    fn fail(&self, error: LoggerError) -> Result<()> {
        self.metrics.record_failed();
        match self.error_policy {
            ErrorPolicy::Propagate => Err(error),
            ErrorPolicy::Panic => panic!("logger write failed: {}", error),
        }
    }

    #[inline]
    pub fn verbose(&self, ctx: &Context, message: impl Into<FieldValue>) -> Result<()> {
        self.write(ctx, Level::VERBOSE, Some(message.into()), None)
    }

    #[inline]
    pub fn important(&self, ctx: &Context, message: impl Into<FieldValue>) -> Result<()> {
        self.write(ctx, Level::IMPORTANT, Some(message.into()), None)
    }

    #[inline]
    pub fn verbose_x(
        &self,
        ctx: &Context,
        message: impl Into<FieldValue>,
        extra: Extra,
    ) -> Result<()> {
        self.write(ctx, Level::VERBOSE, Some(message.into()), Some(extra))
    }

    #[inline]
    pub fn important_x(
        &self,
        ctx: &Context,
        message: impl Into<FieldValue>,
        extra: Extra,
    ) -> Result<()> {
        self.write(ctx, Level::IMPORTANT, Some(message.into()), Some(extra))
    }

    /// Interpolate the message before building the event.
    ///
    /// Usually called through the [`writef!`](crate::writef) macro.
    pub fn writef(&self, ctx: &Context, level: Level, args: fmt::Arguments<'_>) -> Result<()> {
        self.write(ctx, level, Some(FieldValue::String(args.to_string())), None)
    }

    #[inline]
    pub fn verbosef(&self, ctx: &Context, args: fmt::Arguments<'_>) -> Result<()> {
        self.writef(ctx, Level::VERBOSE, args)
    }

    #[inline]
    pub fn importantf(&self, ctx: &Context, args: fmt::Arguments<'_>) -> Result<()> {
        self.writef(ctx, Level::IMPORTANT, args)
    }

    /// Get the logger metrics
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.state
            .lock()
            .output
            .flush()
            .map_err(|e| LoggerError::sink_write("flushing sink", e))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("min_level", &self.min_level)
            .field("formatter", &self.formatter.name())
            .field("error_policy", &self.error_policy)
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.state.get_mut().output.flush();
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Defaults: `VERBOSE` level, stderr output, JSON formatter, errors propagated.
///
/// # Example
/// ```
/// use logo::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Level::IMPORTANT)
///     .output(MemorySink::new())
///     .formatter(TemplateFormatter::simple())
///     .pre_hook(event_id)
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: Level,
    output: Option<Box<dyn Write + Send>>,
    formatter: Option<Box<dyn Formatter>>,
    pre_hooks: Vec<Hook>,
    post_hooks: Vec<Hook>,
    error_policy: ErrorPolicy,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: Level::VERBOSE,
            output: None,
            formatter: None,
            pre_hooks: Vec::new(),
            post_hooks: Vec::new(),
            error_policy: ErrorPolicy::default(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output<W: Write + Send + 'static>(mut self, output: W) -> Self {
        self.output = Some(Box::new(output));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn pre_hook<H>(mut self, hook: H) -> Self
    where
        H: Fn(&Context, &mut Event) + Send + Sync + 'static,
    {
        self.pre_hooks.push(Arc::new(hook));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn pre_hook_arc(mut self, hook: Hook) -> Self {
        self.pre_hooks.push(hook);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn post_hook<H>(mut self, hook: H) -> Self
    where
        H: Fn(&Context, &mut Event) + Send + Sync + 'static,
    {
        self.post_hooks.push(Arc::new(hook));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn post_hook_arc(mut self, hook: Hook) -> Self {
        self.post_hooks.push(hook);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let output = self
            .output
            .unwrap_or_else(|| Box::new(io::stderr()) as Box<dyn Write + Send>);
        let formatter = self
            .formatter
            .unwrap_or_else(|| Box::new(JsonFormatter::new()) as Box<dyn Formatter>);

        let logger = Logger::from_parts(self.min_level, output, formatter, self.error_policy);
        {
            let mut state = logger.state.lock();
            state.pre_hooks = self.pre_hooks;
            state.post_hooks = self.post_hooks;
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
