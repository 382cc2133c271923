//! UserNotifications link and option bit masks.
//!
//! Classes are looked up dynamically, so the framework must be linked for
//! them to be registered.

#[link(name = "UserNotifications", kind = "framework")]
extern "C" {}

// === UNAuthorizationOptions (NSUInteger bit mask) ===

pub const UN_AUTHORIZATION_OPTION_BADGE: usize = 1 << 0;
pub const UN_AUTHORIZATION_OPTION_SOUND: usize = 1 << 1;
pub const UN_AUTHORIZATION_OPTION_ALERT: usize = 1 << 2;

// === UNNotificationPresentationOptions (NSUInteger bit mask) ===

pub const UN_PRESENTATION_OPTION_BADGE: usize = 1 << 0;
pub const UN_PRESENTATION_OPTION_SOUND: usize = 1 << 1;
pub const UN_PRESENTATION_OPTION_LIST: usize = 1 << 3;
pub const UN_PRESENTATION_OPTION_BANNER: usize = 1 << 4;

// === NSApplicationActivationPolicy ===

/// No Dock icon, no menu bar.
pub const NS_APPLICATION_ACTIVATION_POLICY_ACCESSORY: i64 = 1;

/// Options requested by `setup`: alert, sound and badge.
pub fn authorization_options() -> usize {
    UN_AUTHORIZATION_OPTION_ALERT | UN_AUTHORIZATION_OPTION_SOUND | UN_AUTHORIZATION_OPTION_BADGE
}

/// Bit mask for a presentation policy.
pub fn presentation_mask(options: crate::model::PresentationOptions) -> usize {
    let mut mask = 0;
    if options.banner {
        mask |= UN_PRESENTATION_OPTION_BANNER;
    }
    if options.sound {
        mask |= UN_PRESENTATION_OPTION_SOUND;
    }
    if options.list {
        mask |= UN_PRESENTATION_OPTION_LIST;
    }
    if options.badge {
        mask |= UN_PRESENTATION_OPTION_BADGE;
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PresentationOptions;

    #[test]
    fn test_foreground_mask_is_banner_and_sound() {
        assert_eq!(presentation_mask(PresentationOptions::foreground()), 0b1_0010);
    }

    #[test]
    fn test_authorization_options_mask() {
        assert_eq!(authorization_options(), 0b111);
    }
}
