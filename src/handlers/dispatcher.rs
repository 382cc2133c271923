//! Command dispatcher and event pump.
//!
//! # Architecture
//!
//! ```text
//! NotificationRequest ─ dispatch() ─▶ Exit(Termination)          (help, unknown)
//!                                 └─▶ Run { Session, effects }   (send, remove, setup, empty)
//!
//! EventBus::drain() ─▶ Runtime::dispatch_events() ─▶ Session::handle() ─▶ Executor::apply()
//!                                                  └─▶ Session::tick()  ─▶ Termination
//! ```
//!
//! Both halves are platform independent. The macOS layer owns one `Runtime`
//! and calls `dispatch_events` from its run loop timer.

use std::time::Instant;

use crate::cli::usage;
use crate::events::NotifierEvent;
use crate::model::{
    Command, NotificationRequest, NotifierConfig, OutgoingNotification, RemovalTarget,
};

use super::executor::{EditorLauncher, Executor, NotificationCenter};
use super::session::{Effect, Phase, Session, Step};
use super::termination::Termination;

/// Result of dispatching a request.
#[derive(Debug)]
pub enum Dispatch {
    /// Nothing to ask the OS; end the process now.
    Exit(Termination),
    /// Start a session and apply `effects` in order.
    Run { session: Session, effects: Vec<Effect> },
}

/// Map a parsed request to its session and initial OS requests.
///
/// Session deadlines are relative; they start counting in [`Runtime::start`].
pub fn dispatch(request: &NotificationRequest, config: &NotifierConfig) -> Dispatch {
    tracing::debug!(command = ?request.command, "dispatch");
    match &request.command {
        Command::Send => Dispatch::Run {
            // The OS always answers a submission; the cap only guards a wedged daemon
            session: Session::new(Phase::Delivering).give_up_after(config.relaunch_timeout),
            effects: vec![Effect::Deliver(OutgoingNotification::from_request(request))],
        },
        Command::Remove => {
            let target = if request.all {
                Some(RemovalTarget::All)
            } else if !request.group.is_empty() {
                Some(RemovalTarget::Identity(request.group.clone()))
            } else {
                None
            };
            Dispatch::Run {
                session: Session::new(Phase::Removing).finish_after(config.remove_grace),
                effects: target.map(Effect::Remove).into_iter().collect(),
            }
        }
        Command::Setup => Dispatch::Run {
            session: Session::new(Phase::Authorizing),
            effects: vec![Effect::RequestAuthorization],
        },
        Command::Empty => Dispatch::Run {
            session: Session::new(Phase::AwaitingClick).finish_after(config.relaunch_timeout),
            effects: Vec::new(),
        },
        Command::Help => Dispatch::Exit(Termination::success().with_stdout(usage())),
        Command::Unknown(name) => Dispatch::Exit(
            Termination::failure()
                .with_stderr(format!("Unknown command: {}", name))
                .with_stdout(usage()),
        ),
    }
}

/// A running session bound to its executor.
pub struct Runtime<C, L> {
    session: Session,
    executor: Executor<C, L>,
}

impl<C: NotificationCenter, L: EditorLauncher> Runtime<C, L> {
    /// Apply the initial effects at `now` and arm the session deadline.
    pub fn start(
        mut session: Session,
        effects: Vec<Effect>,
        executor: Executor<C, L>,
        now: Instant,
    ) -> Self {
        for effect in &effects {
            executor.apply(effect);
        }
        session.arm(now);
        Self { session, executor }
    }

    /// Feed drained events, then check the deadline.
    ///
    /// Returns the termination the first time one is reached.
    pub fn dispatch_events(
        &mut self,
        events: Vec<NotifierEvent>,
        now: Instant,
    ) -> Option<Termination> {
        for event in events {
            match self.session.handle(event) {
                Step::Idle => {}
                Step::Run(effect) => self.executor.apply(&effect),
                Step::Exit(termination) => return Some(termination),
            }
        }
        self.session.tick(now)
    }
}
