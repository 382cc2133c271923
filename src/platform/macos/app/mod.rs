//! Application lifecycle: delegate class and the running session.

pub mod delegate;
pub mod runtime;

pub use delegate::create_delegate;
pub use runtime::{finish, pump, stash_launch, start_pending, Launch, MacRuntime};
