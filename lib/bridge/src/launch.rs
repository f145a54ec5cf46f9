//! The notification that launched the app.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Notification and action that brought the app to the foreground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchDetails {
    /// The notification that was acted on.
    #[serde(rename = "id")]
    pub notification_id: i64,
    /// Action identifier, `"click"` for a plain tap.
    pub action: String,
}

/// Holds launch details until the web layer asks for them.
#[derive(Debug, Default)]
pub struct LaunchRecorder {
    details: Option<LaunchDetails>,
}

impl LaunchRecorder {
    /// Creates a recorder with nothing recorded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the launch, replacing any earlier one not yet taken.
    pub fn record(&mut self, notification_id: i64, action: impl Into<String>) {
        let action = action.into();
        debug!(notification_id, action = %action, "recorded launch details");
        self.details = Some(LaunchDetails {
            notification_id,
            action,
        });
    }

    /// Returns the recorded launch once.
    pub fn take(&mut self) -> Option<LaunchDetails> {
        self.details.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn take_returns_details_once() {
        let mut recorder = LaunchRecorder::new();
        assert!(recorder.take().is_none());

        recorder.record(42, "click");
        let details = recorder.take().expect("recorded");
        assert_eq!(details.notification_id, 42);
        assert_eq!(details.action, "click");
        assert!(recorder.take().is_none());
    }

    #[test]
    fn later_launch_replaces_earlier() {
        let mut recorder = LaunchRecorder::new();
        recorder.record(1, "click");
        recorder.record(2, "reply");
        assert_eq!(recorder.take().map(|d| d.notification_id), Some(2));
    }

    #[test]
    fn serializes_with_id_key() {
        let details = LaunchDetails {
            notification_id: 5,
            action: "snooze".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&details).expect("serialize"),
            json!({ "id": 5, "action": "snooze" })
        );
    }
}
