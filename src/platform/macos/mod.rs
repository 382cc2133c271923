//! macOS-specific implementation using UserNotifications and AppKit via objc2.
//!
//! - FFI helpers and framework constants
//! - UNUserNotificationCenter adapter
//! - NSWorkspace editor launcher
//! - Delegate class and run loop session
//! - Storage (NSUserDefaults configuration)

pub mod app;
pub mod ffi;
pub mod notifications;
pub mod storage;
pub mod workspace;

pub use ffi::bridge;
pub use notifications::UserNotificationCenter;
pub use storage::load_config;
pub use workspace::WorkspaceLauncher;
