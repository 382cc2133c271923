//! Events carrying OS callback results back to the main loop.
//!
//! Completion handlers from UserNotifications and NSWorkspace may run on any
//! queue; they only publish one of these. The session consumes them on the
//! main thread. Pure Rust with no FFI dependencies.

use crate::model::ClickPayload;

/// Results of asynchronous OS requests, plus the click callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotifierEvent {
    /// The notification center accepted a delivery.
    Delivered,

    /// The notification center rejected a delivery.
    DeliveryFailed(String),

    /// The permission prompt finished.
    AuthorizationResolved {
        granted: bool,
        reason: Option<String>,
    },

    /// The user clicked a delivered notification.
    Clicked(ClickPayload),

    /// The editor opened the project folder.
    EditorOpened,

    /// Opening the folder with the editor failed.
    EditorOpenFailed(String),

    /// The editor application was activated.
    EditorActivated,
}

impl NotifierEvent {
    /// Returns true if this event comes from the click path.
    pub fn is_click_path(&self) -> bool {
        matches!(
            self,
            NotifierEvent::Clicked(_)
                | NotifierEvent::EditorOpened
                | NotifierEvent::EditorOpenFailed(_)
                | NotifierEvent::EditorActivated
        )
    }

    /// Returns a human-readable description of the event for logging.
    pub fn description(&self) -> &'static str {
        match self {
            NotifierEvent::Delivered => "Notification delivered",
            NotifierEvent::DeliveryFailed(_) => "Notification delivery failed",
            NotifierEvent::AuthorizationResolved { .. } => "Authorization resolved",
            NotifierEvent::Clicked(_) => "Notification clicked",
            NotifierEvent::EditorOpened => "Editor opened project",
            NotifierEvent::EditorOpenFailed(_) => "Editor open failed",
            NotifierEvent::EditorActivated => "Editor activated",
        }
    }
}
