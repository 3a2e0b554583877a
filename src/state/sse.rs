use tokio::sync::broadcast;

use crate::dto::sse::ServerEvent;

/// Fan-out of change events to every `/sse` subscriber.
pub struct SseHub {
    sender: broadcast::Sender<ServerEvent>,
}

impl SseHub {
    /// `capacity` bounds how far a slow subscriber may lag before events are skipped.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Receive every event published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    /// Receivers currently attached.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Publish to current subscribers. Events sent with nobody listening are dropped.
    pub fn publish(&self, event: ServerEvent) {
        if self.sender.send(event).is_err() {
            tracing::trace!("change event dropped; no subscribers");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn publishes_to_every_subscriber() {
        let hub = SseHub::new(4);
        let mut first = hub.subscribe();
        let mut second = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 2);

        hub.publish(ServerEvent {
            name: "history.updated",
            data: "{}".into(),
        });

        assert_eq!(first.recv().await.unwrap().name, "history.updated");
        assert_eq!(second.recv().await.unwrap().data, "{}");
    }
}
