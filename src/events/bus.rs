//! Thread-safe event bus using mpsc channels.
//!
//! The bus provides a simple publish/subscribe mechanism where:
//! - Any thread (OS completion queues included) publishes via `EventPublisher::publish()`
//! - The main loop tick polls via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::NotifierEvent;

/// Multi-producer, single-consumer event bus.
///
/// # Example
///
/// ```
/// use claude_notifier::events::{EventBus, NotifierEvent};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(NotifierEvent::Delivered);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<NotifierEvent>,
    receiver: Receiver<NotifierEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and moved into OS callbacks.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<NotifierEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) => None,
            // We hold a sender ourselves, so this only happens during teardown
            Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec, in publish order.
    pub fn drain(&self) -> Vec<NotifierEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<NotifierEvent>,
}

impl EventPublisher {
    /// Create a publisher from an existing sender.
    pub fn from_sender(sender: Sender<NotifierEvent>) -> Self {
        Self { sender }
    }

    /// Publish an event to the bus.
    ///
    /// Non-blocking. If the receiver is gone the process is exiting and the
    /// event is dropped.
    pub fn publish(&self, event: NotifierEvent) {
        tracing::debug!(event = event.description(), "publish");
        let _ = self.sender.send(event);
    }
}
