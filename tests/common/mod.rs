//! In-memory stand-ins for the OS services and a driver that runs one
//! invocation the way the run loop does.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use claude_notifier::events::{EventBus, EventPublisher, NotifierEvent};
use claude_notifier::handlers::{
    dispatch, Dispatch, EditorLauncher, Executor, NotificationCenter, Runtime, Termination,
};
use claude_notifier::model::{ClickPayload, NotifierConfig, OutgoingNotification, RemovalTarget};
use claude_notifier::parse_args;

/// How the fake center answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CenterMode {
    /// Deliver and grant permission.
    Accepting,
    /// Reject submissions with this message; deny permission with it too.
    Rejecting(String),
    /// Never answer.
    Silent,
}

/// Notifications the fake center holds, by identity.
///
/// Accepted submissions land in `delivered`; `pending` holds scheduled
/// requests seeded directly by tests.
#[derive(Debug, Default)]
pub struct CenterState {
    pub delivered: HashMap<String, OutgoingNotification>,
    pub pending: HashMap<String, OutgoingNotification>,
    pub prompts: usize,
}

/// Fake notification center shared across invocations.
#[derive(Clone)]
pub struct MemoryCenter {
    pub state: Rc<RefCell<CenterState>>,
    pub mode: CenterMode,
}

impl MemoryCenter {
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(CenterState::default())),
            mode: CenterMode::Accepting,
        }
    }

    pub fn with_mode(&self, mode: CenterMode) -> Self {
        Self {
            state: Rc::clone(&self.state),
            mode,
        }
    }

    pub fn identities(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.state.borrow().delivered.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn shown(&self, identity: &str) -> Option<OutgoingNotification> {
        self.state.borrow().delivered.get(identity).cloned()
    }

    pub fn pending_identities(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.state.borrow().pending.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Queue a scheduled request that has not been delivered yet.
    pub fn schedule(&self, notification: OutgoingNotification) {
        self.state
            .borrow_mut()
            .pending
            .insert(notification.identity.clone(), notification);
    }
}

impl NotificationCenter for MemoryCenter {
    fn deliver(&self, notification: &OutgoingNotification, events: EventPublisher) {
        match &self.mode {
            CenterMode::Accepting => {
                self.state
                    .borrow_mut()
                    .delivered
                    .insert(notification.identity.clone(), notification.clone());
                events.publish(NotifierEvent::Delivered);
            }
            CenterMode::Rejecting(message) => {
                events.publish(NotifierEvent::DeliveryFailed(message.clone()))
            }
            CenterMode::Silent => {}
        }
    }

    fn remove(&self, target: &RemovalTarget) {
        let mut state = self.state.borrow_mut();
        match target {
            RemovalTarget::All => {
                state.delivered.clear();
                state.pending.clear();
            }
            RemovalTarget::Identity(identity) => {
                state.delivered.remove(identity);
                state.pending.remove(identity);
            }
        }
    }

    fn request_authorization(&self, events: EventPublisher) {
        self.state.borrow_mut().prompts += 1;
        match &self.mode {
            CenterMode::Accepting => events.publish(NotifierEvent::AuthorizationResolved {
                granted: true,
                reason: None,
            }),
            CenterMode::Rejecting(reason) => {
                events.publish(NotifierEvent::AuthorizationResolved {
                    granted: false,
                    reason: Some(reason.clone()),
                })
            }
            CenterMode::Silent => {}
        }
    }
}

/// A call made to the fake launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchCall {
    Open(PathBuf),
    Activate,
}

/// Fake launcher that records every call.
#[derive(Clone, Default)]
pub struct RecordingLauncher {
    pub calls: Rc<RefCell<Vec<LaunchCall>>>,
    pub open_fails: bool,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_open() -> Self {
        Self {
            open_fails: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.borrow().clone()
    }
}

impl EditorLauncher for RecordingLauncher {
    fn open_in_editor(&self, folder: &Path, events: EventPublisher) {
        self.calls
            .borrow_mut()
            .push(LaunchCall::Open(folder.to_path_buf()));
        if self.open_fails {
            events.publish(NotifierEvent::EditorOpenFailed("no such file".into()));
        } else {
            events.publish(NotifierEvent::EditorOpened);
        }
    }

    fn activate_editor(&self, events: EventPublisher) {
        self.calls.borrow_mut().push(LaunchCall::Activate);
        events.publish(NotifierEvent::EditorActivated);
    }
}

pub const TICK: Duration = Duration::from_millis(50);

/// One process invocation against the fakes.
pub struct Invocation {
    pub center: MemoryCenter,
    pub launcher: RecordingLauncher,
    pub config: NotifierConfig,
    pub clicks: Vec<ClickPayload>,
    /// Time between dispatch and the application finishing its launch.
    pub launch_delay: Duration,
}

/// What the invocation produced and how long it ran on the fake clock.
#[derive(Debug)]
pub struct Outcome {
    pub termination: Termination,
    pub elapsed: Duration,
}

impl Invocation {
    pub fn new(center: &MemoryCenter, launcher: &RecordingLauncher) -> Self {
        Self {
            center: center.clone(),
            launcher: launcher.clone(),
            config: NotifierConfig::default(),
            clicks: Vec::new(),
            launch_delay: Duration::ZERO,
        }
    }

    pub fn launched_after(mut self, delay: Duration) -> Self {
        self.launch_delay = delay;
        self
    }

    pub fn click(mut self, project_dir: &str, group: &str) -> Self {
        self.clicks.push(ClickPayload {
            project_dir: project_dir.into(),
            group: group.into(),
        });
        self
    }

    /// Parse `args` (without the program name), dispatch and pump the
    /// session on a fake clock until it terminates.
    ///
    /// `elapsed` counts from dispatch, so it includes the launch delay.
    pub fn run(self, args: &[&str]) -> Outcome {
        let argv = std::iter::once("claude-notifier").chain(args.iter().copied());
        let request = parse_args(argv);
        let start = Instant::now();

        let (session, effects) = match dispatch(&request, &self.config) {
            Dispatch::Exit(termination) => {
                return Outcome {
                    termination,
                    elapsed: Duration::ZERO,
                }
            }
            Dispatch::Run { session, effects } => (session, effects),
        };

        let bus = EventBus::new();
        let executor = Executor::new(self.center, self.launcher, bus.publisher());
        let mut now = start + self.launch_delay;
        let mut runtime = Runtime::start(session, effects, executor, now);
        for payload in self.clicks {
            bus.publisher().publish(NotifierEvent::Clicked(payload));
        }

        // Far past any configured deadline
        for _ in 0..10_000 {
            if let Some(termination) = runtime.dispatch_events(bus.drain(), now) {
                return Outcome {
                    termination,
                    elapsed: now - start,
                };
            }
            now += TICK;
        }
        panic!("session for {args:?} never terminated");
    }
}

/// Run `args` against fresh fakes.
pub fn run(args: &[&str]) -> Termination {
    Invocation::new(&MemoryCenter::new(), &RecordingLauncher::new())
        .run(args)
        .termination
}
