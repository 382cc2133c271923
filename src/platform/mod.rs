//! Platform-specific implementations.
//!
//! Only macOS is supported. The pure core in the crate root builds
//! everywhere so its tests run on any host.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
