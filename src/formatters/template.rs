//! Template formatter
//!
//! Templates are plain text with placeholders, compiled once when the
//! formatter is built:
//!
//! - `{level}`, `{time}`, `{message}`, `{extra}`, `{extra.<key>}` insert a field
//! - `{field|helper|helper:arg}` pipes the field through helpers
//! - `{?extra} ... {/}` renders its body only when the field is non-empty
//! - `{{` and `}}` produce literal braces
//!
//! Built-in helpers: `pad` / `pad:N` (left aligned, default width 9), `upper`,
//! `lower`, the time layouts `ruby`, `rfc3339`, `rfc3339nano`, `iso8601`,
//! `unix_millis` (first helper on `time` only) and, with the `console`
//! feature, `color`.

use crate::core::{Event, Formatter, LoggerError, Result, TimestampFormat};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

const DEFAULT_PAD_WIDTH: usize = 9;
const TABLE_TEMPLATE: &str = "| {level|pad} | {time|ruby} | {message}{?extra}; extra: {extra} {/}";
const SIMPLE_TEMPLATE: &str = "{level} @ {time}: {message}{?extra}; {extra}{/}";

/// Custom template helper: receives the rendered value, returns the replacement
pub type TemplateHelper = Arc<dyn Fn(&str) -> std::result::Result<String, String> + Send + Sync>;

#[derive(Debug, Clone, PartialEq)]
enum Field {
    Time,
    Level,
    Message,
    Extra,
    ExtraKey(String),
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "time" => Some(Field::Time),
            "level" => Some(Field::Level),
            "message" => Some(Field::Message),
            "extra" => Some(Field::Extra),
            _ => name
                .strip_prefix("extra.")
                .filter(|key| !key.is_empty())
                .map(|key| Field::ExtraKey(key.to_string())),
        }
    }
}

enum Step {
    Time(TimestampFormat),
    Pad(usize),
    Upper,
    Lower,
    #[cfg(feature = "console")]
    Color,
    Custom(String, TemplateHelper),
}

struct Placeholder {
    field: Field,
    steps: Vec<Step>,
}

enum Segment {
    Literal(String),
    Value(Placeholder),
    Section { field: Field, body: Vec<Segment> },
}

/// Renders events through a compiled template
///
/// # Example
///
/// ```
/// use logo::prelude::*;
///
/// let formatter = TemplateFormatter::new("level={level} msg=\"{message}\" extra={extra}").unwrap();
/// let event = Event::new(Level::VERBOSE, Some("hello".into()), None);
/// assert_eq!(formatter.format(&event).unwrap(), "level=VERBOSE msg=\"hello\" extra=");
/// ```
pub struct TemplateFormatter {
    name: String,
    source: String,
    timestamp_format: TimestampFormat,
    segments: Vec<Segment>,
}

impl TemplateFormatter {
    /// Compile `source` with default settings
    pub fn new(source: impl Into<String>) -> Result<Self> {
        Self::builder(source).build()
    }

    pub fn builder(source: impl Into<String>) -> TemplateFormatterBuilder {
        TemplateFormatterBuilder::new(source)
    }

    /// Table layout: `| VERBOSE   | Wed Jan 08 10:30:45 +0000 2025 | hello; extra: k=v `
    pub fn table() -> Self {
        Self::builder(TABLE_TEMPLATE)
            .name("tablefmt")
            .build()
            .expect("built-in table template compiles")
    }

    /// Simple layout: `VERBOSE @ 2025-01-08T10:30:45.123Z: hello; k=v`
    pub fn simple() -> Self {
        Self::builder(SIMPLE_TEMPLATE)
            .name("simplefmt")
            .build()
            .expect("built-in simple template compiles")
    }

    /// Name used in render errors
    pub fn template_name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    fn render_segments(&self, segments: &[Segment], event: &Event, out: &mut String) -> Result<()> {
        for segment in segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Value(placeholder) => {
                    out.push_str(&self.render_placeholder(placeholder, event)?)
                }
                Segment::Section { field, body } => {
                    if Self::is_present(field, event) {
                        self.render_segments(body, event, out)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn is_present(field: &Field, event: &Event) -> bool {
        match field {
            Field::Message => event.message.as_ref().is_some_and(|m| !m.is_empty()),
            Field::Extra => !event.extra.is_empty(),
            Field::ExtraKey(key) => event.extra.contains_key(key),
            Field::Time | Field::Level => true,
        }
    }

    fn render_placeholder(&self, placeholder: &Placeholder, event: &Event) -> Result<String> {
        let mut steps = placeholder.steps.iter().peekable();

        let mut value = match &placeholder.field {
            Field::Time => match steps.next_if(|step| matches!(step, Step::Time(_))) {
                Some(Step::Time(format)) => format.format(&event.timestamp)?,
                _ => self.timestamp_format.format(&event.timestamp)?,
            },
            Field::Level => event.level.name().to_string(),
            Field::Message => event
                .message
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            Field::Extra => event.extra.format_fields(),
            Field::ExtraKey(key) => match event.extra.get(key) {
                Some(value) => value.to_string(),
                None => {
                    return Err(LoggerError::render(
                        &self.name,
                        format!("extra has no key '{}'", key),
                    ))
                }
            },
        };

        for step in steps {
            value = match step {
                Step::Time(_) => value,
                Step::Pad(width) => format!("{:<width$}", value, width = *width),
                Step::Upper => value.to_uppercase(),
                Step::Lower => value.to_lowercase(),
                #[cfg(feature = "console")]
                Step::Color => colorize(&value, &event.level),
                Step::Custom(name, helper) => helper(&value).map_err(|message| {
                    LoggerError::render(&self.name, format!("helper '{}' failed: {}", name, message))
                })?,
            };
        }

        Ok(value)
    }
}

#[cfg(feature = "console")]
fn colorize(value: &str, level: &crate::core::Level) -> String {
    use crate::core::Level;
    use colored::{Color, Colorize};

    let color = if level.gt(&Level::IMPORTANT) {
        Color::BrightRed
    } else if level.gte(&Level::IMPORTANT) {
        Color::Yellow
    } else {
        Color::Green
    };
    value.color(color).to_string()
}

impl Formatter for TemplateFormatter {
    fn format(&self, event: &Event) -> Result<String> {
        if event.is_empty() {
            return Ok(String::new());
        }

        let mut out = String::with_capacity(self.source.len() + 32);
        self.render_segments(&self.segments, event, &mut out)?;
        Ok(out)
    }

    fn name(&self) -> &str {
        "template"
    }
}

impl fmt::Debug for TemplateFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateFormatter")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("timestamp_format", &self.timestamp_format)
            .finish()
    }
}

/// Builder for [`TemplateFormatter`]; helpers must be registered before `build`
pub struct TemplateFormatterBuilder {
    source: String,
    name: String,
    timestamp_format: TimestampFormat,
    helpers: HashMap<String, TemplateHelper>,
}

impl TemplateFormatterBuilder {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            name: "template".to_string(),
            timestamp_format: TimestampFormat::default(),
            helpers: HashMap::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Layout used by `{time}` when no time helper is given
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn helper<F>(mut self, name: impl Into<String>, helper: F) -> Self
    where
        F: Fn(&str) -> std::result::Result<String, String> + Send + Sync + 'static,
    {
        self.helpers.insert(name.into(), Arc::new(helper));
        self
    }

    /// Compile the template; any syntax problem is a configuration error
    pub fn build(self) -> Result<TemplateFormatter> {
        self.timestamp_format.validate()?;
        let segments = Parser::new(&self.source, &self.helpers).parse()?;

        Ok(TemplateFormatter {
            name: self.name,
            source: self.source,
            timestamp_format: self.timestamp_format,
            segments,
        })
    }
}

struct Parser<'a> {
    source: &'a str,
    helpers: &'a HashMap<String, TemplateHelper>,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, helpers: &'a HashMap<String, TemplateHelper>) -> Self {
        Self { source, helpers }
    }

    fn error(&self, message: impl Into<String>) -> LoggerError {
        LoggerError::config("TemplateFormatter", message)
    }

    fn parse(&self) -> Result<Vec<Segment>> {
        // Innermost open section last; the root body sits at index 0.
        let mut stack: Vec<(Option<Field>, Vec<Segment>)> = vec![(None, Vec::new())];
        let mut literal = String::new();
        let mut chars = self.source.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if chars.next_if(|(_, next)| *next == '{').is_some() => literal.push('{'),
                '}' if chars.next_if(|(_, next)| *next == '}').is_some() => literal.push('}'),
                '}' => return Err(self.error(format!("unmatched '}}' at offset {}", pos))),
                '{' => {
                    let mut tag = String::new();
                    let mut closed = false;
                    for (_, c) in chars.by_ref() {
                        if c == '}' {
                            closed = true;
                            break;
                        }
                        tag.push(c);
                    }
                    if !closed {
                        return Err(self.error(format!("unclosed '{{' at offset {}", pos)));
                    }

                    if !literal.is_empty() {
                        Self::top(&mut stack).push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    self.parse_tag(tag.trim(), &mut stack)?;
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            Self::top(&mut stack).push(Segment::Literal(literal));
        }

        if stack.len() > 1 {
            return Err(self.error("section opened with '{?...}' is never closed with '{/}'"));
        }

        Ok(stack.pop().map(|(_, body)| body).unwrap_or_default())
    }

    fn top(stack: &mut [(Option<Field>, Vec<Segment>)]) -> &mut Vec<Segment> {
        let last = stack.len() - 1;
        &mut stack[last].1
    }

    fn parse_tag(&self, tag: &str, stack: &mut Vec<(Option<Field>, Vec<Segment>)>) -> Result<()> {
        if tag == "/" {
            if stack.len() == 1 {
                return Err(self.error("'{/}' without an open section"));
            }
            if let Some((Some(field), body)) = stack.pop() {
                Self::top(stack).push(Segment::Section { field, body });
            }
            return Ok(());
        }

        if let Some(name) = tag.strip_prefix('?') {
            let field = self.parse_field(name.trim())?;
            if matches!(field, Field::Time | Field::Level) {
                return Err(self.error(format!("'{}' cannot start a section", name.trim())));
            }
            stack.push((Some(field), Vec::new()));
            return Ok(());
        }

        let placeholder = self.parse_placeholder(tag)?;
        Self::top(stack).push(Segment::Value(placeholder));
        Ok(())
    }

    fn parse_field(&self, name: &str) -> Result<Field> {
        Field::parse(name).ok_or_else(|| self.error(format!("unknown field '{}'", name)))
    }

    fn parse_placeholder(&self, tag: &str) -> Result<Placeholder> {
        let mut parts = tag.split('|').map(str::trim);
        let field = self.parse_field(parts.next().unwrap_or_default())?;

        let mut steps = Vec::new();
        for (idx, part) in parts.enumerate() {
            let (name, arg) = match part.split_once(':') {
                Some((name, arg)) => (name.trim(), Some(arg.trim())),
                None => (part, None),
            };

            if let Some(format) = TimestampFormat::from_helper_name(name) {
                if field != Field::Time || idx != 0 {
                    return Err(self.error(format!(
                        "time helper '{}' must directly follow 'time'",
                        name
                    )));
                }
                steps.push(Step::Time(format));
                continue;
            }

            let step = match name {
                "pad" => {
                    let width = match arg {
                        Some(arg) => arg.parse().map_err(|_| {
                            self.error(format!("invalid pad width '{}'", arg))
                        })?,
                        None => DEFAULT_PAD_WIDTH,
                    };
                    Step::Pad(width)
                }
                "upper" => Step::Upper,
                "lower" => Step::Lower,
                #[cfg(feature = "console")]
                "color" => Step::Color,
                _ => match self.helpers.get(name) {
                    Some(helper) => Step::Custom(name.to_string(), Arc::clone(helper)),
                    None => return Err(self.error(format!("unknown helper '{}'", name))),
                },
            };
            steps.push(step);
        }

        Ok(Placeholder { field, steps })
    }
}
