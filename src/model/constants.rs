//! Configuration constants and default values.
//!
//! This module contains all application constants including request defaults,
//! timing, payload keys, NSUserDefaults keys, and validation limits.

use std::time::Duration;

/// Display name used in usage text.
pub const APP_NAME: &str = "ClaudeNotifier";

// === Request Defaults ===

/// Default notification title.
pub const DEFAULT_TITLE: &str = "Claude Code";

/// Default sound name (resolves to the system alert sound).
pub const DEFAULT_SOUND: &str = "default";

/// Default group identity.
pub const DEFAULT_GROUP: &str = "default";

// === Sound Names ===

/// Sound name mapped to the platform default sound (compared case-insensitively).
pub const SOUND_DEFAULT: &str = "default";

/// Sound name mapped to silence (compared case-insensitively).
pub const SOUND_NONE: &str = "none";

// === Timing ===

/// How long a click relaunch waits for the delegate callback.
pub const DEFAULT_RELAUNCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Grace delay after a removal request before exiting.
pub const DEFAULT_REMOVE_GRACE: Duration = Duration::from_millis(300);

/// Main loop tick interval in seconds.
pub const TICK_INTERVAL_SECS: f64 = 0.05;

// === Editor ===

/// Editor application opened on notification click.
pub const DEFAULT_EDITOR_APP: &str = "/Applications/Visual Studio Code.app";

/// Environment variable overriding the editor application path.
pub const ENV_EDITOR_APP: &str = "CLAUDE_NOTIFIER_EDITOR";

/// Environment variable holding the tracing filter.
pub const ENV_LOG_FILTER: &str = "CLAUDE_NOTIFIER_LOG";

// === Notification Payload Keys ===

/// Payload key carrying the project directory.
pub const PAYLOAD_PROJECT_DIR: &str = "projectDir";

/// Payload key carrying the group identity.
pub const PAYLOAD_GROUP: &str = "group";

// === NSUserDefaults Keys ===

/// Key for the editor application path preference.
pub const PREF_EDITOR_APP: &str = "editorAppPath";

/// Key for the relaunch timeout preference (seconds).
pub const PREF_RELAUNCH_TIMEOUT: &str = "relaunchTimeoutSecs";

/// Key for the removal grace delay preference (seconds).
pub const PREF_REMOVE_GRACE: &str = "removeGraceSecs";

// === Validation Limits ===

/// Minimum relaunch timeout in seconds.
pub const MIN_RELAUNCH_TIMEOUT_SECS: f64 = 1.0;

/// Maximum relaunch timeout in seconds.
pub const MAX_RELAUNCH_TIMEOUT_SECS: f64 = 120.0;

/// Minimum removal grace delay in seconds.
pub const MIN_REMOVE_GRACE_SECS: f64 = 0.05;

/// Maximum removal grace delay in seconds.
pub const MAX_REMOVE_GRACE_SECS: f64 = 5.0;

// === Exit Codes ===

/// Process exit code on success.
pub const EXIT_SUCCESS: i32 = 0;

/// Process exit code on failure.
pub const EXIT_FAILURE: i32 = 1;
