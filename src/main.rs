//! claude-notifier entry point.
//!
//! Parses argv, dispatches the command and either exits right away (help,
//! unknown command) or hands the session to the platform run loop.

#[cfg(target_os = "macos")]
mod macos_main;

use claude_notifier::handlers::Dispatch;
use claude_notifier::{dispatch, logging, parse_args};

fn main() {
    logging::init();

    let request = parse_args(std::env::args());
    let config = if request.command.needs_platform() {
        load_config()
    } else {
        claude_notifier::NotifierConfig::default()
    };

    match dispatch(&request, &config) {
        Dispatch::Exit(termination) => {
            termination.emit();
            std::process::exit(termination.code);
        }
        Dispatch::Run { session, effects } => run(session, effects, config),
    }
}

#[cfg(target_os = "macos")]
fn load_config() -> claude_notifier::NotifierConfig {
    macos_main::load_config()
}

#[cfg(not(target_os = "macos"))]
fn load_config() -> claude_notifier::NotifierConfig {
    let mut config = claude_notifier::NotifierConfig::default();
    config.apply_env(|key| std::env::var(key).ok());
    config.validate();
    config
}

#[cfg(target_os = "macos")]
fn run(
    session: claude_notifier::handlers::Session,
    effects: Vec<claude_notifier::handlers::Effect>,
    config: claude_notifier::NotifierConfig,
) {
    macos_main::run(session, effects, config)
}

#[cfg(not(target_os = "macos"))]
fn run(
    _session: claude_notifier::handlers::Session,
    _effects: Vec<claude_notifier::handlers::Effect>,
    _config: claude_notifier::NotifierConfig,
) {
    let err = claude_notifier::NotifierError::UnsupportedPlatform("claude-notifier");
    let termination = claude_notifier::Termination::from_error(&err);
    termination.emit();
    std::process::exit(termination.code);
}
