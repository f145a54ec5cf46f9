//! Error types for the bridge crate.

use beacon_core::EventId;
use std::fmt;

/// Errors from delivering events to the web layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The sink rejected an event.
    DispatchFailed { event_id: EventId, reason: String },
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DispatchFailed { event_id, reason } => {
                write!(f, "failed to dispatch event {event_id}: {reason}")
            }
        }
    }
}

impl std::error::Error for BridgeError {}
