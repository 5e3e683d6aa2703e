//! stalker-core/src/notify/bus.rs
//!
//! Fans notifications out to any number of async consumers via bounded
//! MPSC queues. Watchers run synchronously, so delivery never waits: a full
//! queue drops the notification for that subscriber only.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, warn};

use stalker_common::models::notification::Notification;
use stalker_common::traits::host_traits::NotificationSink;

/// Default size for each subscriber's buffer.
const DEFAULT_BUFFER_SIZE: usize = 64;

#[derive(Clone, Default)]
pub struct NotificationBus {
    subscribers: Arc<Mutex<Vec<mpsc::Sender<Notification>>>>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a receiver on which notifications will be delivered.
    /// Dropping the receiver unsubscribes.
    pub fn subscribe(&self, buffer_size: Option<usize>) -> mpsc::Receiver<Notification> {
        let size = buffer_size.unwrap_or(DEFAULT_BUFFER_SIZE);
        let (tx, rx) = mpsc::channel(size);
        self.subscribers.lock().push(tx);
        rx
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().len()
    }

    /// Offer a notification to every subscriber; returns how many took it.
    pub fn publish(&self, notification: Notification) -> usize {
        let mut subs = self.subscribers.lock();
        let mut delivered = 0;

        subs.retain(|tx| match tx.try_send(notification.clone()) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(TrySendError::Full(_)) => {
                warn!("Notification subscriber is full; dropping \"{}\"", notification.body);
                true
            }
            Err(TrySendError::Closed(_)) => {
                debug!("Removing closed notification subscriber");
                false
            }
        });

        delivered
    }
}

impl NotificationSink for NotificationBus {
    fn show(&self, notification: Notification) {
        self.publish(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stalker_common::models::notification::ClickAction;

    fn notification(body: &str) -> Notification {
        Notification {
            title: "Stalker".into(),
            body: body.into(),
            color: None,
            icon: None,
            on_click: ClickAction::JoinVoice {
                channel_id: "c1".into(),
            },
        }
    }

    #[tokio::test]
    async fn test_subscribers_receive_notifications() {
        let bus = NotificationBus::new();
        let mut rx1 = bus.subscribe(Some(4));
        let mut rx2 = bus.subscribe(Some(4));

        assert_eq!(bus.publish(notification("hello")), 2);

        let n1 = rx1.recv().await.expect("rx1 should get notification");
        let n2 = rx2.recv().await.expect("rx2 should get notification");
        assert_eq!(n1.body, "hello");
        assert_eq!(n2.body, "hello");
    }

    #[tokio::test]
    async fn test_full_queue_drops_instead_of_blocking() {
        let bus = NotificationBus::new();
        let mut rx = bus.subscribe(Some(1));

        bus.show(notification("first"));
        assert_eq!(bus.publish(notification("second")), 0);
        assert_eq!(bus.subscriber_count(), 1);

        assert_eq!(rx.recv().await.unwrap().body, "first");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_dropped_receivers_are_pruned() {
        let bus = NotificationBus::new();
        let rx = bus.subscribe(None);
        let mut kept = bus.subscribe(None);
        drop(rx);

        assert_eq!(bus.publish(notification("ping")), 1);
        assert_eq!(bus.subscriber_count(), 1);
        assert_eq!(kept.recv().await.unwrap().body, "ping");
    }
}
