//! The per-invocation request (pure Rust, no FFI).
//!
//! A `NotificationRequest` is built once from argv by `cli::parse_args`
//! and is read-only afterwards.

use super::constants::*;

/// Command selected by the first positional argument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Post a notification.
    Send,
    /// Remove delivered/pending notifications.
    Remove,
    /// Ask the user for notification permission.
    Setup,
    /// Print usage.
    Help,
    /// No command: the OS relaunched us because a notification was clicked.
    #[default]
    Empty,
    /// Anything we don't recognise.
    Unknown(String),
}

impl Command {
    /// Map a command token to a `Command`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "send" => Command::Send,
            "remove" => Command::Remove,
            "setup" => Command::Setup,
            "help" | "--help" | "-h" => Command::Help,
            "" => Command::Empty,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// Returns true if this command needs the OS notification service.
    pub fn needs_platform(&self) -> bool {
        matches!(
            self,
            Command::Send | Command::Remove | Command::Setup | Command::Empty
        )
    }
}

/// Everything parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub command: Command,
    pub title: String,
    pub message: String,
    pub subtitle: String,
    /// `default`, `none`, or a named sound resource.
    pub sound: String,
    /// Identity used to replace or remove a prior notification.
    pub group: String,
    /// Project folder to focus on click. Empty means none.
    pub project_dir: String,
    /// Bulk removal flag.
    pub all: bool,
}

impl Default for NotificationRequest {
    fn default() -> Self {
        Self {
            command: Command::Empty,
            title: DEFAULT_TITLE.to_string(),
            message: String::new(),
            subtitle: String::new(),
            sound: DEFAULT_SOUND.to_string(),
            group: DEFAULT_GROUP.to_string(),
            project_dir: String::new(),
            all: false,
        }
    }
}
