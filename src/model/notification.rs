//! Notification values handed to and received from the OS.

use std::path::PathBuf;

use super::constants::{PAYLOAD_GROUP, PAYLOAD_PROJECT_DIR};
use super::request::NotificationRequest;
use super::sound::Sound;

/// Opaque payload attached to a notification and returned on click.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClickPayload {
    pub project_dir: String,
    pub group: String,
}

impl ClickPayload {
    /// Key/value pairs as stored in the notification's user info.
    pub fn to_pairs(&self) -> [(&'static str, &str); 2] {
        [
            (PAYLOAD_PROJECT_DIR, self.project_dir.as_str()),
            (PAYLOAD_GROUP, self.group.as_str()),
        ]
    }

    /// Rebuild the payload from a user info lookup.
    ///
    /// Missing or non-string values read as empty.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            project_dir: lookup(PAYLOAD_PROJECT_DIR).unwrap_or_default(),
            group: lookup(PAYLOAD_GROUP).unwrap_or_default(),
        }
    }

    /// The folder to open in the editor, if any.
    pub fn project_path(&self) -> Option<PathBuf> {
        if self.project_dir.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.project_dir))
        }
    }
}

/// A notification ready for immediate delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingNotification {
    /// OS identity; a later delivery with the same identity replaces this one.
    pub identity: String,
    pub title: String,
    pub body: String,
    pub subtitle: Option<String>,
    pub sound: Sound,
    pub payload: ClickPayload,
}

impl OutgoingNotification {
    pub fn from_request(request: &NotificationRequest) -> Self {
        let subtitle = if request.subtitle.is_empty() {
            None
        } else {
            Some(request.subtitle.clone())
        };
        Self {
            identity: request.group.clone(),
            title: request.title.clone(),
            body: request.message.clone(),
            subtitle,
            sound: Sound::resolve(&request.sound),
            payload: ClickPayload {
                project_dir: request.project_dir.clone(),
                group: request.group.clone(),
            },
        }
    }
}

/// Which notifications a removal affects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalTarget {
    /// Every delivered and pending notification.
    All,
    /// Delivered and pending notifications with this identity.
    Identity(String),
}

/// How a notification is shown while we are the foreground app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationOptions {
    pub banner: bool,
    pub sound: bool,
    pub list: bool,
    pub badge: bool,
}

impl PresentationOptions {
    /// Foreground policy: always show the banner and play the sound.
    pub fn foreground() -> Self {
        Self {
            banner: true,
            sound: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::request::Command;

    fn send_request() -> NotificationRequest {
        NotificationRequest {
            command: Command::Send,
            title: "Permission needed".into(),
            message: "Bash".into(),
            group: "perm-Bash".into(),
            project_dir: "/work/app".into(),
            ..NotificationRequest::default()
        }
    }

    #[test]
    fn test_identity_is_group() {
        let n = OutgoingNotification::from_request(&send_request());
        assert_eq!(n.identity, "perm-Bash");
        assert_eq!(n.payload.group, "perm-Bash");
        assert_eq!(n.payload.project_dir, "/work/app");
    }

    #[test]
    fn test_empty_subtitle_is_omitted() {
        let n = OutgoingNotification::from_request(&send_request());
        assert_eq!(n.subtitle, None);

        let mut req = send_request();
        req.subtitle = "tool".into();
        let n = OutgoingNotification::from_request(&req);
        assert_eq!(n.subtitle.as_deref(), Some("tool"));
    }

    #[test]
    fn test_payload_survives_user_info() {
        let payload = ClickPayload {
            project_dir: "/work/app".into(),
            group: "g".into(),
        };
        let pairs = payload.to_pairs();
        let back = ClickPayload::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        });
        assert_eq!(back, payload);
    }

    #[test]
    fn test_missing_payload_reads_empty() {
        let payload = ClickPayload::from_lookup(|_| None);
        assert_eq!(payload.project_path(), None);
        assert!(payload.group.is_empty());
    }

    #[test]
    fn test_foreground_policy_never_suppresses() {
        let opts = PresentationOptions::foreground();
        assert!(opts.banner);
        assert!(opts.sound);
    }
}
