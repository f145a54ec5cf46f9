//! Error types for the resolver tool.

use std::fmt;

/// Errors from running the resolver tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Reading the schedule document failed.
    ReadInput { source: String },
    /// The schedule document could not be parsed (use as context wrapper).
    InvalidSchedule,
    /// Rendering the trigger failed.
    Render { reason: String },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReadInput { source } => write!(f, "failed to read schedule from {source}"),
            Self::InvalidSchedule => write!(f, "invalid schedule document"),
            Self::Render { reason } => write!(f, "failed to render trigger: {reason}"),
        }
    }
}

impl std::error::Error for ResolveError {}
