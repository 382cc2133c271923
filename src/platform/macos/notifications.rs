//! `UNUserNotificationCenter` adapter.
//!
//! Completion blocks run on a private queue; they only publish events.

use crate::error::{NotifierError, Result};
use crate::events::{EventPublisher, NotifierEvent};
use crate::handlers::NotificationCenter;
use crate::model::{OutgoingNotification, RemovalTarget, Sound};
use crate::platform::macos::ffi::authorization_options;
use crate::platform::macos::ffi::bridge::{
    array_of_one, class_named, error_description, id, msg_send, nil, nsstring, Bool, RcBlock,
    Retained,
};

/// The current process's notification center.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserNotificationCenter;

impl UserNotificationCenter {
    /// `[UNUserNotificationCenter currentNotificationCenter]`.
    ///
    /// # Safety
    /// Needs an autorelease pool. The process must have a bundle identifier.
    pub unsafe fn current() -> Result<id> {
        let cls = class_named(c"UNUserNotificationCenter")?;
        let center: id = msg_send![cls, currentNotificationCenter];
        Ok(center)
    }

    unsafe fn build_request(notification: &OutgoingNotification) -> Result<id> {
        let content_cls = class_named(c"UNMutableNotificationContent")?;
        let content: id = msg_send![content_cls, new];
        let _: () = msg_send![content, setTitle: &*nsstring(&notification.title)];
        let _: () = msg_send![content, setBody: &*nsstring(&notification.body)];
        if let Some(subtitle) = &notification.subtitle {
            let _: () = msg_send![content, setSubtitle: &*nsstring(subtitle)];
        }

        let sound_cls = class_named(c"UNNotificationSound")?;
        let sound: id = match &notification.sound {
            Sound::Default => msg_send![sound_cls, defaultSound],
            Sound::Silent => nil,
            Sound::Named(name) => msg_send![sound_cls, soundNamed: &*nsstring(name)],
        };
        let _: () = msg_send![content, setSound: sound];

        let dict_cls = class_named(c"NSMutableDictionary")?;
        let user_info: id = msg_send![dict_cls, dictionary];
        for (key, value) in notification.payload.to_pairs() {
            let _: () = msg_send![user_info, setObject: &*nsstring(value), forKey: &*nsstring(key)];
        }
        let _: () = msg_send![content, setUserInfo: user_info];

        let request_cls = class_named(c"UNNotificationRequest")?;
        // nil trigger: deliver now
        let request: id = msg_send![
            request_cls,
            requestWithIdentifier: &*nsstring(&notification.identity),
            content: content,
            trigger: nil
        ];
        Ok(request)
    }

    unsafe fn submit(notification: &OutgoingNotification, events: EventPublisher) -> Result<()> {
        let center = Self::current()?;
        let request = Self::build_request(notification)?;

        let block = RcBlock::new(move |error: id| {
            let event = match unsafe { error_description(error) } {
                None if error.is_null() => NotifierEvent::Delivered,
                Some(message) => {
                    NotifierEvent::DeliveryFailed(NotifierError::Delivery(message).to_string())
                }
                None => NotifierEvent::DeliveryFailed("unknown error".to_string()),
            };
            events.publish(event);
        });
        let _: () = msg_send![
            center,
            addNotificationRequest: request,
            withCompletionHandler: &*block
        ];
        Ok(())
    }

    unsafe fn remove_matching(target: &RemovalTarget) -> Result<()> {
        let center = Self::current()?;
        match target {
            RemovalTarget::All => {
                let _: () = msg_send![center, removeAllDeliveredNotifications];
                let _: () = msg_send![center, removeAllPendingNotificationRequests];
            }
            RemovalTarget::Identity(identity) => {
                let identity = nsstring(identity);
                let ids = array_of_one(Retained::as_ptr(&identity) as id)?;
                let _: () = msg_send![center, removeDeliveredNotificationsWithIdentifiers: ids];
                let _: () =
                    msg_send![center, removePendingNotificationRequestsWithIdentifiers: ids];
            }
        }
        Ok(())
    }

    unsafe fn prompt(events: EventPublisher) -> Result<()> {
        let center = Self::current()?;
        let block = RcBlock::new(move |granted: Bool, error: id| {
            events.publish(NotifierEvent::AuthorizationResolved {
                granted: granted.as_bool(),
                reason: unsafe { error_description(error) },
            });
        });
        let _: () = msg_send![
            center,
            requestAuthorizationWithOptions: authorization_options(),
            completionHandler: &*block
        ];
        Ok(())
    }
}

impl NotificationCenter for UserNotificationCenter {
    fn deliver(&self, notification: &OutgoingNotification, events: EventPublisher) {
        tracing::debug!(identity = %notification.identity, "submitting notification");
        if let Err(err) = unsafe { Self::submit(notification, events.clone()) } {
            events.publish(NotifierEvent::DeliveryFailed(err.to_string()));
        }
    }

    fn remove(&self, target: &RemovalTarget) {
        tracing::debug!(?target, "removing notifications");
        if let Err(err) = unsafe { Self::remove_matching(target) } {
            tracing::warn!(%err, "removal skipped");
        }
    }

    fn request_authorization(&self, events: EventPublisher) {
        if let Err(err) = unsafe { Self::prompt(events.clone()) } {
            let err = NotifierError::Authorization(err.to_string());
            events.publish(NotifierEvent::AuthorizationResolved {
                granted: false,
                reason: Some(err.to_string()),
            });
        }
    }
}
