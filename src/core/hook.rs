//! Hook callback type

use super::{event::Event, log_context::Context};
use std::sync::Arc;

/// Callback run synchronously inside `Logger::write`, while the logger lock
/// is held. Logging through the same logger from a hook deadlocks.
pub type Hook = Arc<dyn Fn(&Context, &mut Event) + Send + Sync>;
