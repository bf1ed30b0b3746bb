//! Event identifier hook

use crate::core::{Context, Event};
use uuid::Uuid;

/// Key written into `extra` by [`event_id`]
pub const EVENT_ID_KEY: &str = "event_id";

/// Stamp a fresh UUID v4 into `extra["event_id"]`.
///
/// Register it as a pre-hook so the id appears in the formatted line and is
/// visible to post-hooks.
pub fn event_id(_ctx: &Context, event: &mut Event) {
    event
        .extra
        .insert(EVENT_ID_KEY, Uuid::new_v4().hyphenated().to_string());
}
