//! Hook decorators and built-in hooks
//!
//! Hooks are plain closures `Fn(&Context, &mut Event)`; the functions here
//! build or wrap them and are registered with `Logger::pre_hook` /
//! `Logger::post_hook`. Hooks already shared as a [`Hook`] go through
//! `Logger::pre_hook_arc` / `Logger::post_hook_arc`.

pub mod event_id;
pub mod exit;
pub mod filter;

pub use event_id::{event_id, EVENT_ID_KEY};
pub use exit::{exit_on_important, exit_on_level};
pub use filter::{filtered_hook, level_bounds_filter, level_filter};

pub use crate::core::Hook;
