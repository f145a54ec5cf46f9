//! Bridge between native notification callbacks and the web layer.
//!
//! Events raised by the native side before the web view reports ready are
//! buffered by [`EventQueue`] and delivered once, in order, afterwards.
//! [`LaunchRecorder`] keeps the notification that launched the app until the
//! web layer asks for it.

mod error;
mod event;
mod launch;
mod queue;

pub use error::BridgeError;
pub use event::{EventSink, NotificationEvent};
pub use launch::{LaunchDetails, LaunchRecorder};
pub use queue::{EventQueue, FlushReport, QueueMode};
