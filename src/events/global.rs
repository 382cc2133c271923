//! Process-wide access to the event bus.
//!
//! Objective-C delegate methods are plain `extern "C-unwind"` functions with
//! no Rust context, so they reach the bus through these statics. The bus is
//! initialized once in `main` before the run loop starts.
//!
//! - `Sender` is stored in `OnceLock` since it's `Send + Sync`
//! - `Receiver` is stored in `Mutex`, only locked by the main loop tick

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::NotifierEvent;

static SENDER: OnceLock<Sender<NotifierEvent>> = OnceLock::new();

static RECEIVER: OnceLock<Mutex<Receiver<NotifierEvent>>> = OnceLock::new();

/// Initialize the global event bus. Later calls are no-ops.
pub fn init_event_bus() {
    if SENDER.get().is_some() {
        return;
    }
    let (sender, receiver) = mpsc::channel();
    let _ = SENDER.set(sender);
    let _ = RECEIVER.set(Mutex::new(receiver));
}

/// Get a publisher for the global bus, or `None` before `init_event_bus()`.
pub fn publisher() -> Option<EventPublisher> {
    SENDER.get().cloned().map(EventPublisher::from_sender)
}

/// Publish to the global bus. Dropped silently before initialization.
pub fn publish(event: NotifierEvent) {
    if let Some(publisher) = publisher() {
        publisher.publish(event);
    }
}

/// Drain all pending events from the global bus.
pub fn drain_events() -> Vec<NotifierEvent> {
    let Some(receiver) = RECEIVER.get() else {
        return Vec::new();
    };
    let Ok(receiver) = receiver.lock() else {
        return Vec::new();
    };

    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}
