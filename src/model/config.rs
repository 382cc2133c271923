//! Runtime configuration (pure Rust, no FFI).
//!
//! Defaults live in `constants`; the macOS layer overlays NSUserDefaults
//! values and the environment before the session starts.

use std::path::PathBuf;
use std::time::Duration;

use super::constants::*;

/// Tunables for the editor and the two process-lifetime timers.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifierConfig {
    /// Application bundle opened on notification click.
    pub editor_app: PathBuf,
    /// Upper bound on a click relaunch waiting for the delegate.
    pub relaunch_timeout: Duration,
    /// Delay between a removal request and exit.
    pub remove_grace: Duration,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            editor_app: PathBuf::from(DEFAULT_EDITOR_APP),
            relaunch_timeout: DEFAULT_RELAUNCH_TIMEOUT,
            remove_grace: DEFAULT_REMOVE_GRACE,
        }
    }
}

impl NotifierConfig {
    /// Clamps timers to valid ranges and restores an empty editor path.
    pub fn validate(&mut self) {
        self.relaunch_timeout = clamp_duration(
            self.relaunch_timeout,
            MIN_RELAUNCH_TIMEOUT_SECS,
            MAX_RELAUNCH_TIMEOUT_SECS,
        );
        self.remove_grace =
            clamp_duration(self.remove_grace, MIN_REMOVE_GRACE_SECS, MAX_REMOVE_GRACE_SECS);
        if self.editor_app.as_os_str().is_empty() {
            self.editor_app = PathBuf::from(DEFAULT_EDITOR_APP);
        }
    }

    /// Applies overrides from environment-like lookups.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(editor) = lookup(ENV_EDITOR_APP).filter(|v| !v.trim().is_empty()) {
            self.editor_app = PathBuf::from(editor.trim());
        }
    }
}

fn clamp_duration(d: Duration, lo: f64, hi: f64) -> Duration {
    let secs = d.as_secs_f64();
    if secs.is_nan() {
        return Duration::from_secs_f64(lo);
    }
    Duration::from_secs_f64(secs.clamp(lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NotifierConfig::default();
        assert_eq!(config.relaunch_timeout, Duration::from_secs(10));
        assert_eq!(config.remove_grace, Duration::from_millis(300));
        assert_eq!(config.editor_app, PathBuf::from(DEFAULT_EDITOR_APP));
    }

    #[test]
    fn test_validate_clamps_timers() {
        let mut config = NotifierConfig {
            relaunch_timeout: Duration::from_secs(3600),
            remove_grace: Duration::ZERO,
            ..NotifierConfig::default()
        };
        config.validate();
        assert_eq!(
            config.relaunch_timeout,
            Duration::from_secs_f64(MAX_RELAUNCH_TIMEOUT_SECS)
        );
        assert_eq!(
            config.remove_grace,
            Duration::from_secs_f64(MIN_REMOVE_GRACE_SECS)
        );
    }

    #[test]
    fn test_validate_restores_empty_editor() {
        let mut config = NotifierConfig {
            editor_app: PathBuf::new(),
            ..NotifierConfig::default()
        };
        config.validate();
        assert_eq!(config.editor_app, PathBuf::from(DEFAULT_EDITOR_APP));
    }

    #[test]
    fn test_env_override_editor() {
        let mut config = NotifierConfig::default();
        config.apply_env(|key| {
            (key == ENV_EDITOR_APP).then(|| "/Applications/Cursor.app".to_string())
        });
        assert_eq!(config.editor_app, PathBuf::from("/Applications/Cursor.app"));
    }

    #[test]
    fn test_blank_env_is_ignored() {
        let mut config = NotifierConfig::default();
        config.apply_env(|_| Some("  ".to_string()));
        assert_eq!(config.editor_app, PathBuf::from(DEFAULT_EDITOR_APP));
    }
}
