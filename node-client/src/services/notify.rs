//! # Notification Forwarding
//!
//! [`NotificationSink`] implementation that forwards notifications over an
//! async channel so an event-driven UI can drain them on its own schedule,
//! the same way background task results reach a render loop.

use async_channel::{Receiver, Sender};
use tracing::warn;

use crate::core::service::{Notification, NotificationLevel, NotificationSink};

/// A notification paired with its severity, ready for UI consumption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEvent {
    pub level: NotificationLevel,
    pub notification: Notification,
}

/// Forwards notifications over an unbounded channel.
///
/// The sink side is synchronous, as required by [`NotificationSink`]; the
/// receiving end is async and typically polled from the UI event loop.
pub struct ChannelNotifier {
    sender: Sender<NotificationEvent>,
}

impl ChannelNotifier {
    /// Create a notifier together with the receiving end for the UI.
    pub fn unbounded() -> (Self, Receiver<NotificationEvent>) {
        let (sender, receiver) = async_channel::unbounded();
        (Self { sender }, receiver)
    }

    fn forward(&self, level: NotificationLevel, notification: Notification) {
        let event = NotificationEvent {
            level,
            notification,
        };
        // send_blocking cannot block on an unbounded channel; it only fails
        // once the receiver is gone
        if self.sender.send_blocking(event).is_err() {
            warn!("notification dropped: receiver closed");
        }
    }
}

impl NotificationSink for ChannelNotifier {
    fn success(&self, notification: Notification) {
        self.forward(NotificationLevel::Success, notification);
    }

    fn info(&self, notification: Notification) {
        self.forward(NotificationLevel::Info, notification);
    }

    fn error(&self, notification: Notification) {
        self.forward(NotificationLevel::Error, notification);
    }
}
