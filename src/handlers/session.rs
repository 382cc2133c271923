//! Per-invocation session state machine.
//!
//! A session is created by [`dispatch`](super::dispatcher::dispatch), armed
//! when its initial effects are applied and then fed OS events and clock
//! ticks from the main loop. It answers with the next
//! OS action to run, or with the `Termination` that ends the process.
//!
//! ```text
//! Delivering   ── Delivered ──────────────▶ exit 0
//!              ── DeliveryFailed(msg) ────▶ "Error: msg", exit 1
//! Authorizing  ── AuthorizationResolved ──▶ granted/denied line, exit 0
//! Removing     ── deadline (grace) ───────▶ exit 0
//! AwaitingClick── deadline (timeout) ─────▶ exit 0
//!
//! any phase    ── Clicked(dir) ───────────▶ OpenInEditor(dir) | ActivateEditor
//!              ── EditorOpenFailed ───────▶ ActivateEditor
//!              ── EditorOpened/Activated ─▶ exit 0
//! ```

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::events::NotifierEvent;
use crate::model::{OutgoingNotification, RemovalTarget};

use super::termination::Termination;

/// An OS request the session wants performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Submit a notification for immediate delivery.
    Deliver(OutgoingNotification),
    /// Remove delivered and pending notifications.
    Remove(RemovalTarget),
    /// Show the notification permission prompt.
    RequestAuthorization,
    /// Open a folder with the editor, activating it.
    OpenInEditor(PathBuf),
    /// Activate the editor without a path.
    ActivateEditor,
}

/// What the main loop should do after feeding the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Idle,
    Run(Effect),
    Exit(Termination),
}

/// What the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Delivering,
    Authorizing,
    Removing,
    AwaitingClick,
}

/// What a deadline means when it passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeadlineKind {
    /// Expected end of the session (grace delay, idle relaunch).
    Finish,
    /// The OS never answered.
    Stalled,
}

#[derive(Debug, Clone)]
pub struct Session {
    phase: Phase,
    /// Timeout counted from `arm`.
    timeout: Option<(Duration, DeadlineKind)>,
    deadline: Option<Instant>,
    click_in_flight: bool,
    finished: bool,
}

impl Session {
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            timeout: None,
            deadline: None,
            click_in_flight: false,
            finished: false,
        }
    }

    /// End the session successfully `after` it is armed.
    pub fn finish_after(mut self, after: Duration) -> Self {
        self.timeout = Some((after, DeadlineKind::Finish));
        self
    }

    /// Fail the session if nothing terminal arrived `after` it is armed.
    pub fn give_up_after(mut self, after: Duration) -> Self {
        self.timeout = Some((after, DeadlineKind::Stalled));
        self
    }

    /// Start the clock. Called when the initial effects are issued.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = self.timeout.map(|(after, _)| now + after);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Absolute deadline, once armed.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Feed one event.
    pub fn handle(&mut self, event: NotifierEvent) -> Step {
        if self.finished {
            tracing::debug!(
                event = event.description(),
                click = event.is_click_path(),
                "event after termination ignored"
            );
            return Step::Idle;
        }

        match event {
            NotifierEvent::Delivered if self.phase == Phase::Delivering => {
                self.finish(Termination::success())
            }
            NotifierEvent::DeliveryFailed(message) if self.phase == Phase::Delivering => {
                tracing::error!(%message, "notification submission failed");
                self.finish(Termination::failure().with_stderr(format!("Error: {}", message)))
            }
            NotifierEvent::AuthorizationResolved { granted, reason }
                if self.phase == Phase::Authorizing =>
            {
                let line = if granted {
                    "Notifications authorized".to_string()
                } else {
                    format!(
                        "Notifications denied: {}",
                        reason.as_deref().unwrap_or("unknown")
                    )
                };
                self.finish(Termination::success().with_stdout(line))
            }

            NotifierEvent::Clicked(payload) => {
                if self.click_in_flight {
                    return Step::Idle;
                }
                self.click_in_flight = true;
                match payload.project_path() {
                    Some(path) => Step::Run(Effect::OpenInEditor(path)),
                    None => Step::Run(Effect::ActivateEditor),
                }
            }
            NotifierEvent::EditorOpenFailed(message) => {
                tracing::warn!(%message, "open with editor failed, activating editor instead");
                Step::Run(Effect::ActivateEditor)
            }
            NotifierEvent::EditorOpened | NotifierEvent::EditorActivated => {
                self.finish(Termination::success())
            }

            other => {
                tracing::debug!(event = other.description(), phase = ?self.phase, "stray event");
                Step::Idle
            }
        }
    }

    /// Check the deadline.
    pub fn tick(&mut self, now: Instant) -> Option<Termination> {
        if self.finished {
            return None;
        }
        let at = self.deadline?;
        let (_, kind) = self.timeout?;
        if now < at {
            return None;
        }
        let termination = match kind {
            DeadlineKind::Finish => Termination::success(),
            DeadlineKind::Stalled => {
                tracing::error!(phase = ?self.phase, "no answer from the notification center");
                Termination::failure()
                    .with_stderr("Error: timed out waiting for the notification center")
            }
        };
        self.finished = true;
        Some(termination)
    }

    fn finish(&mut self, termination: Termination) -> Step {
        self.finished = true;
        Step::Exit(termination)
    }
}
