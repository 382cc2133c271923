//! Process-wide session state for the delegate methods.
//!
//! `main` stashes the dispatched session before the run loop starts; the
//! delegate takes it once the application has finished launching and the
//! run loop timer pumps it until it terminates.

use std::sync::Mutex;
use std::time::Instant;

use crate::error::{NotifierError, Result};
use crate::events::{drain_events, publisher, NotifierEvent};
use crate::handlers::{Effect, Executor, Runtime, Session, Termination};
use crate::model::NotifierConfig;
use crate::platform::macos::notifications::UserNotificationCenter;
use crate::platform::macos::workspace::WorkspaceLauncher;

pub type MacRuntime = Runtime<UserNotificationCenter, WorkspaceLauncher>;

/// A dispatched session waiting for the application to finish launching.
pub struct Launch {
    pub session: Session,
    pub effects: Vec<Effect>,
    pub config: NotifierConfig,
}

static PENDING: Mutex<Option<Launch>> = Mutex::new(None);

static RUNTIME: Mutex<Option<MacRuntime>> = Mutex::new(None);

/// Stash the session started by `applicationDidFinishLaunching:`.
pub fn stash_launch(launch: Launch) {
    if let Ok(mut pending) = PENDING.lock() {
        *pending = Some(launch);
    }
}

/// Start the stashed session: apply its initial effects and keep it for
/// the timer.
pub fn start_pending() -> Result<()> {
    let launch = PENDING
        .lock()
        .ok()
        .and_then(|mut p| p.take())
        .ok_or(NotifierError::Startup("no dispatched session"))?;
    let events = publisher().ok_or(NotifierError::Startup("event bus not initialized"))?;

    let launcher = WorkspaceLauncher::new(launch.config.editor_app.clone());
    let executor = Executor::new(UserNotificationCenter, launcher, events);
    let runtime = Runtime::start(launch.session, launch.effects, executor, Instant::now());

    let mut slot = RUNTIME
        .lock()
        .map_err(|_| NotifierError::Startup("session lock poisoned"))?;
    *slot = Some(runtime);
    Ok(())
}

/// Drain the bus into the session and check its deadline.
///
/// Clicks that arrive before `start_pending` stay queued on the bus.
pub fn pump() -> Option<Termination> {
    let mut slot = RUNTIME.lock().ok()?;
    let runtime = slot.as_mut()?;
    let events: Vec<NotifierEvent> = drain_events();
    runtime.dispatch_events(events, Instant::now())
}

/// Print the outcome and exit the process.
pub fn finish(termination: Termination) -> ! {
    tracing::debug!(code = termination.code, "terminating");
    termination.emit();
    std::process::exit(termination.code)
}
