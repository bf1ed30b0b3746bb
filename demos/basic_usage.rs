//! Basic logger usage example
//!
//! Demonstrates the JSON and template formatters, extra fields and hooks.
//!
//! Run with: cargo run --example basic_usage

use logo::prelude::*;
use serde::Serialize;
use std::io;

#[derive(Serialize)]
struct SomeInfo {
    a: String,
    b: i32,
}

fn main() -> Result<()> {
    let ctx = Context::background();

    // JSON lines on stderr, threshold taken from LOG_LEVEL
    let logger = Logger::from_env();
    logger.write(
        &ctx,
        Level::IMPORTANT,
        Some("hello!".into()),
        Some(Extra::new().with_field("foo", "bar")),
    )?;

    let info = FieldValue::from_serialize(&SomeInfo {
        a: "foo".to_string(),
        b: 17,
    })?;
    logger.verbose_x(&ctx, "hello again", Extra::new().with_field("info", info))?;
    logger.important(&ctx, "this is important info!")?;

    // Text lines through a template, with an id stamped on every event
    let template_logger = Logger::builder()
        .min_level(Level::IMPORTANT)
        .output(io::stderr())
        .formatter(TemplateFormatter::new(
            "{time|rfc3339} | {level|pad} | {message}{?extra} | {extra}{/}",
        )?)
        .pre_hook(event_id)
        .build();

    template_logger.important(&ctx, "wow!")?;
    template_logger.verbose(&ctx, "you will not see this")?;

    // A custom level ranked above IMPORTANT
    let critical = Level::new(100, "MOST_CRITICAL_EVER");
    template_logger.writef(&ctx, critical, format_args!("disk {} is on fire", "sda1"))?;

    Ok(())
}
