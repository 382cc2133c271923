//! Applies session effects through the OS seams.
//!
//! The two traits are the only boundary between the pure core and the
//! platform layer. Implementations report asynchronous results by publishing
//! a `NotifierEvent`; they never block.

use std::path::Path;

use crate::events::EventPublisher;
use crate::model::{OutgoingNotification, RemovalTarget};

use super::session::Effect;

/// The OS notification service.
pub trait NotificationCenter {
    /// Submit for immediate delivery under `notification.identity`.
    ///
    /// Publishes `Delivered` or `DeliveryFailed`.
    fn deliver(&self, notification: &OutgoingNotification, events: EventPublisher);

    /// Remove delivered and pending notifications. Fire and forget.
    fn remove(&self, target: &RemovalTarget);

    /// Show the permission prompt. Publishes `AuthorizationResolved`.
    fn request_authorization(&self, events: EventPublisher);
}

/// The OS application launch service, bound to one editor.
pub trait EditorLauncher {
    /// Open `folder` with the editor, activating it and focusing an existing
    /// window for that folder. Publishes `EditorOpened` or `EditorOpenFailed`.
    fn open_in_editor(&self, folder: &Path, events: EventPublisher);

    /// Activate the editor. Publishes `EditorActivated` once the request
    /// finished, whether or not it succeeded.
    fn activate_editor(&self, events: EventPublisher);
}

/// Runs effects against a notification center and a launcher.
pub struct Executor<C, L> {
    center: C,
    launcher: L,
    events: EventPublisher,
}

impl<C: NotificationCenter, L: EditorLauncher> Executor<C, L> {
    pub fn new(center: C, launcher: L, events: EventPublisher) -> Self {
        Self {
            center,
            launcher,
            events,
        }
    }

    pub fn apply(&self, effect: &Effect) {
        tracing::debug!(?effect, "apply");
        match effect {
            Effect::Deliver(notification) => {
                self.center.deliver(notification, self.events.clone())
            }
            Effect::Remove(target) => self.center.remove(target),
            Effect::RequestAuthorization => self.center.request_authorization(self.events.clone()),
            Effect::OpenInEditor(folder) => {
                self.launcher.open_in_editor(folder, self.events.clone())
            }
            Effect::ActivateEditor => self.launcher.activate_editor(self.events.clone()),
        }
    }
}
