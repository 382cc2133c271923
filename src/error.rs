//! Error types reported by the platform adapters.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotifierError {
    /// The notification center rejected the request. Holds the OS message.
    #[error("{0}")]
    Delivery(String),

    /// The editor could not be opened with the given path.
    #[error("failed to open in editor: {0}")]
    Launch(String),

    /// The permission prompt returned an error.
    #[error("{0}")]
    Authorization(String),

    /// An Objective-C class we need is not available in this process.
    #[error("class `{0}` is not available")]
    MissingClass(&'static str),

    /// The run loop started without what it needs to drive the session.
    #[error("launch failed: {0}")]
    Startup(&'static str),

    #[error("{0} requires macOS")]
    UnsupportedPlatform(&'static str),
}

pub type Result<T> = std::result::Result<T, NotifierError>;
