//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies)
//! including the request value object, notification values, configuration
//! and constants.
//!
//! Platform-specific persistence is in `platform::macos::storage`.

pub mod config;
pub mod constants;
pub mod notification;
pub mod request;
pub mod sound;

pub use config::NotifierConfig;
pub use constants::*;
pub use notification::{ClickPayload, OutgoingNotification, PresentationOptions, RemovalTarget};
pub use request::{Command, NotificationRequest};
pub use sound::Sound;
