use std::sync::Mutex;

use tokio::sync::broadcast;
use tracing::trace;

use crate::models::Event;

/// Push side of the observer channel. Delivery is best-effort: emitting never
/// blocks and never fails the caller.
pub trait Broadcaster: Send + Sync {
    fn emit(&self, event: Event);
}

/// Fan-out over a bounded `tokio::sync::broadcast` channel. Observers that
/// fall behind lose the oldest events.
#[derive(Clone)]
pub struct ChannelBroadcaster {
    sender: broadcast::Sender<Event>,
}

impl ChannelBroadcaster {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn observer_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Broadcaster for ChannelBroadcaster {
    fn emit(&self, event: Event) {
        let name = event.name();
        // Err only means nobody is listening right now.
        if self.sender.send(event).is_err() {
            trace!(event = name, "No observers connected, event dropped");
        }
    }
}

/// Keeps every emitted event in memory, in order.
#[derive(Default)]
pub struct RecordingBroadcaster {
    events: Mutex<Vec<Event>>,
}

impl RecordingBroadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.events()
            .iter()
            .filter(|event| event.name() == name)
            .count()
    }

    pub fn clear(&self) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl Broadcaster for RecordingBroadcaster {
    fn emit(&self, event: Event) {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(event);
    }
}
