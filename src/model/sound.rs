//! Sound resolution for outgoing notifications.

use super::constants::{SOUND_DEFAULT, SOUND_NONE};

/// What the notification should play when shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sound {
    /// The platform's default alert sound.
    Default,
    /// No sound.
    Silent,
    /// A named sound resource. Unknown names are left to the OS.
    Named(String),
}

impl Sound {
    /// Resolve the `--sound` value.
    ///
    /// `default` maps to the platform sound and `none`/empty to silence, both
    /// case-insensitively. Anything else is passed through unvalidated.
    pub fn resolve(name: &str) -> Self {
        if name.eq_ignore_ascii_case(SOUND_DEFAULT) {
            Sound::Default
        } else if name.is_empty() || name.eq_ignore_ascii_case(SOUND_NONE) {
            Sound::Silent
        } else {
            Sound::Named(name.to_string())
        }
    }
}
