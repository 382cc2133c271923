//! Command dispatch, session state machine and effect execution.
//!
//! Everything here is pure Rust; OS access goes through the
//! [`NotificationCenter`] and [`EditorLauncher`] traits.

pub mod dispatcher;
pub mod executor;
pub mod session;
pub mod termination;

pub use dispatcher::{dispatch, Dispatch, Runtime};
pub use executor::{EditorLauncher, Executor, NotificationCenter};
pub use session::{Effect, Phase, Session, Step};
pub use termination::Termination;
