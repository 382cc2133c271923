//! Configuration overrides from NSUserDefaults.
//!
//! Set with e.g. `defaults write dev.claude-notifier editorAppPath "/Applications/Cursor.app"`.

use std::path::PathBuf;
use std::time::Duration;

use crate::model::constants::*;
use crate::model::NotifierConfig;
use crate::platform::macos::ffi::bridge::{class_named, id, msg_send, nsstring, string_from_id};

/// `[NSUserDefaults standardUserDefaults]`, or nil if the class is missing.
unsafe fn user_defaults() -> Option<id> {
    let cls = class_named(c"NSUserDefaults").ok()?;
    let ud: id = msg_send![cls, standardUserDefaults];
    (!ud.is_null()).then_some(ud)
}

/// Reads a double from NSUserDefaults, `None` if not set.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn prefs_get_double(key: &str) -> Option<f64> {
    let ud = user_defaults()?;
    let k = nsstring(key);
    let obj: id = msg_send![ud, objectForKey: &*k];
    if obj.is_null() {
        None
    } else {
        let value: f64 = msg_send![ud, doubleForKey: &*k];
        Some(value)
    }
}

/// Reads a string from NSUserDefaults, `None` if not set or not a string.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn prefs_get_string(key: &str) -> Option<String> {
    let ud = user_defaults()?;
    let obj: id = msg_send![ud, stringForKey: &*nsstring(key)];
    string_from_id(obj)
}

/// Defaults, then NSUserDefaults, then the environment; validated.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn load_config() -> NotifierConfig {
    let mut config = NotifierConfig::default();

    if let Some(editor) = prefs_get_string(PREF_EDITOR_APP) {
        config.editor_app = PathBuf::from(editor);
    }
    if let Some(secs) = prefs_get_double(PREF_RELAUNCH_TIMEOUT).and_then(duration_from_secs) {
        config.relaunch_timeout = secs;
    }
    if let Some(secs) = prefs_get_double(PREF_REMOVE_GRACE).and_then(duration_from_secs) {
        config.remove_grace = secs;
    }

    config.apply_env(|key| std::env::var(key).ok());
    config.validate();
    tracing::debug!(?config, "configuration loaded");
    config
}

fn duration_from_secs(secs: f64) -> Option<Duration> {
    Duration::try_from_secs_f64(secs).ok()
}
