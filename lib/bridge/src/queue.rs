//! Pre-ready event buffering.
//!
//! Events fired before the web layer signals readiness are held in arrival
//! order. The first [`EventQueue::mark_ready`] flushes them and switches the
//! queue to immediate dispatch for good.

use crate::error::BridgeError;
use crate::event::{EventSink, NotificationEvent};
use std::collections::VecDeque;
use tracing::{debug, warn};

/// Delivery mode of an [`EventQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueMode {
    /// Holding events until the web layer is ready.
    #[default]
    Buffering,
    /// Ready; events go straight to the sink.
    Flushed,
}

/// Outcome of flushing buffered events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlushReport {
    /// Events the sink accepted.
    pub delivered: usize,
    /// Events the sink rejected.
    pub failed: usize,
}

/// Buffers events until the web layer is ready.
#[derive(Debug, Default)]
pub struct EventQueue {
    mode: QueueMode,
    pending: VecDeque<NotificationEvent>,
}

impl EventQueue {
    /// Creates an empty queue in buffering mode.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> QueueMode {
        self.mode
    }

    /// Returns the number of buffered events.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Fires an event: buffered before ready, dispatched after.
    ///
    /// # Errors
    ///
    /// Returns the sink's error when dispatching immediately.
    pub fn fire<S: EventSink + ?Sized>(
        &mut self,
        mut event: NotificationEvent,
        sink: &mut S,
    ) -> beacon_core::Result<(), BridgeError> {
        match self.mode {
            QueueMode::Buffering => {
                debug!(event = %event.name, id = %event.id, "web layer not ready, queueing event");
                event.queued = true;
                self.pending.push_back(event);
                Ok(())
            }
            QueueMode::Flushed => sink.dispatch(&event),
        }
    }

    /// Marks the web layer ready, flushing buffered events in order.
    ///
    /// Only the first call flushes; later calls return an empty report. A
    /// rejected event is logged and the flush carries on.
    pub fn mark_ready<S: EventSink + ?Sized>(&mut self, sink: &mut S) -> FlushReport {
        if self.mode == QueueMode::Flushed {
            return FlushReport::default();
        }
        self.mode = QueueMode::Flushed;

        let mut report = FlushReport::default();
        for event in self.pending.drain(..) {
            match sink.dispatch(&event) {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    warn!(event = %event.name, id = %event.id, error = %e, "failed to deliver queued event");
                    report.failed += 1;
                }
            }
        }

        debug!(
            delivered = report.delivered,
            failed = report.failed,
            "flushed pre-ready event queue"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that rejects events with a given name.
    struct RejectingSink {
        reject: &'static str,
        accepted: Vec<String>,
    }

    impl EventSink for RejectingSink {
        fn dispatch(&mut self, event: &NotificationEvent) -> beacon_core::Result<(), BridgeError> {
            if event.name == self.reject {
                return Err(BridgeError::DispatchFailed {
                    event_id: event.id,
                    reason: "rejected".to_string(),
                }
                .into());
            }
            self.accepted.push(event.name.clone());
            Ok(())
        }
    }

    #[test]
    fn buffers_until_ready_then_flushes_in_order() {
        let mut queue = EventQueue::new();
        let mut sink: Vec<NotificationEvent> = Vec::new();

        for name in ["schedule", "trigger", "click"] {
            queue
                .fire(NotificationEvent::new(name), &mut sink)
                .expect("fire");
        }
        assert!(sink.is_empty());
        assert_eq!(queue.pending_len(), 3);

        let report = queue.mark_ready(&mut sink);
        assert_eq!(
            report,
            FlushReport {
                delivered: 3,
                failed: 0
            }
        );
        assert_eq!(queue.mode(), QueueMode::Flushed);
        assert_eq!(queue.pending_len(), 0);

        let names: Vec<&str> = sink.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["schedule", "trigger", "click"]);
        assert!(sink.iter().all(|e| e.queued));
    }

    #[test]
    fn dispatches_immediately_after_ready() {
        let mut queue = EventQueue::new();
        let mut sink: Vec<NotificationEvent> = Vec::new();
        queue.mark_ready(&mut sink);

        queue
            .fire(NotificationEvent::new("clear").for_notification(3), &mut sink)
            .expect("fire");

        assert_eq!(sink.len(), 1);
        assert!(!sink[0].queued);
        assert_eq!(queue.pending_len(), 0);
    }

    #[test]
    fn flushes_only_once() {
        let mut queue = EventQueue::new();
        let mut sink: Vec<NotificationEvent> = Vec::new();
        queue
            .fire(NotificationEvent::new("add"), &mut sink)
            .expect("fire");

        assert_eq!(queue.mark_ready(&mut sink).delivered, 1);
        assert_eq!(queue.mark_ready(&mut sink), FlushReport::default());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn failed_delivery_does_not_stop_flush() {
        let mut queue = EventQueue::new();
        let mut sink = RejectingSink {
            reject: "trigger",
            accepted: Vec::new(),
        };

        for name in ["add", "trigger", "click"] {
            queue
                .fire(NotificationEvent::new(name), &mut sink)
                .expect("fire");
        }

        let report = queue.mark_ready(&mut sink);
        assert_eq!(
            report,
            FlushReport {
                delivered: 2,
                failed: 1
            }
        );
        assert_eq!(sink.accepted, vec!["add", "click"]);
    }

    #[test]
    fn immediate_dispatch_propagates_errors() {
        let mut queue = EventQueue::new();
        let mut sink = RejectingSink {
            reject: "trigger",
            accepted: Vec::new(),
        };
        queue.mark_ready(&mut sink);

        let result = queue.fire(NotificationEvent::new("trigger"), &mut sink);
        assert!(result.is_err());
    }
}
