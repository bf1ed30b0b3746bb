//! What `Logger::write` does when formatting or the sink fails

use serde::{Deserialize, Serialize};
use std::fmt;

/// Policy for formatter and sink failures inside `write`
///
/// Neither policy drops an event silently: the failure is either returned to
/// the caller or aborts the calling path.
///
/// # Example
///
/// ```
/// use logo::ErrorPolicy;
///
/// let policy = ErrorPolicy::default();
/// assert_eq!(policy, ErrorPolicy::Propagate);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Return the error from `write`
    #[default]
    Propagate,

    /// Panic with the error, aborting the calling path
    Panic,
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Propagate => write!(f, "Propagate"),
            ErrorPolicy::Panic => write!(f, "Panic"),
        }
    }
}
