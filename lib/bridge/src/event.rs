//! Events raised towards the web layer.

use crate::error::BridgeError;
use beacon_core::EventId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// JavaScript function the web layer exposes for native events.
const FIRE_EVENT_FN: &str = "cordova.plugins.notification.local.fireEvent";

/// A named event, optionally about one notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationEvent {
    /// Unique identifier.
    pub id: EventId,
    /// Event name, e.g. `"trigger"` or `"click"`.
    pub name: String,
    /// The notification the event is about.
    pub notification_id: Option<i64>,
    /// Extra fields merged into the event arguments.
    pub payload: Map<String, Value>,
    /// Whether the event waited in the pre-ready queue.
    pub queued: bool,
}

impl NotificationEvent {
    /// Creates an event with no notification and an empty payload.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: EventId::new(),
            name: name.into(),
            notification_id: None,
            payload: Map::new(),
            queued: false,
        }
    }

    /// Attaches the notification the event is about.
    #[must_use]
    pub fn for_notification(mut self, notification_id: i64) -> Self {
        self.notification_id = Some(notification_id);
        self
    }

    /// Adds a payload field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.payload.insert(key.into(), value);
        self
    }

    /// Returns the argument object passed to the web layer.
    ///
    /// `event`, `queued` and `notification` are set last and win over payload
    /// fields with the same name.
    #[must_use]
    pub fn arguments(&self) -> Value {
        let mut args = self.payload.clone();
        args.insert("event".to_string(), Value::String(self.name.clone()));
        args.insert("queued".to_string(), Value::Bool(self.queued));
        if let Some(notification_id) = self.notification_id {
            args.insert("notification".to_string(), Value::from(notification_id));
        }
        Value::Object(args)
    }

    /// Renders the script that delivers this event inside the web view.
    #[must_use]
    pub fn to_script(&self) -> String {
        let name = Value::String(self.name.clone());
        format!("{FIRE_EVENT_FN}({name},{})", self.arguments())
    }
}

/// Destination for events once the web layer is ready.
pub trait EventSink {
    /// Delivers one event.
    fn dispatch(&mut self, event: &NotificationEvent) -> beacon_core::Result<(), BridgeError>;
}

impl EventSink for Vec<NotificationEvent> {
    fn dispatch(&mut self, event: &NotificationEvent) -> beacon_core::Result<(), BridgeError> {
        self.push(event.clone());
        Ok(())
    }
}
