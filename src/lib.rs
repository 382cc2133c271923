#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! macOS notification shim for coding-assistant hooks.
//!
//! Everything outside `platform` is free of macOS FFI so tests run as
//! normal unit and integration tests on any host.

pub mod cli;
pub mod error;
pub mod events;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod platform;

pub use cli::{parse_args, usage};
pub use error::NotifierError;
pub use events::{EventBus, EventPublisher, NotifierEvent};
pub use handlers::{dispatch, Dispatch, Runtime, Termination};
pub use model::{Command, NotificationRequest, NotifierConfig};
