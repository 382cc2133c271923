//! Event system carrying OS callback results to the main loop.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐
//! │ UNUserNotif.     │  │ NSWorkspace      │  │ Delegate         │
//! │ completion block │  │ completion block │  │ (click callback) │
//! └────────┬─────────┘  └────────┬─────────┘  └────────┬─────────┘
//!          │ publish()           │ publish()           │ publish()
//!          ▼                     ▼                     ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    EventBus (mpsc channel)                  │
//! └──────────────────────────────┬──────────────────────────────┘
//!                                │ drain()
//!                                ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │          Session (main loop tick, NSTimer 50ms)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`types`]: `NotifierEvent`
//! - [`bus`]: `EventBus` and `EventPublisher`
//! - [`global`]: static access for delegate methods

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish, publisher};
pub use types::NotifierEvent;
