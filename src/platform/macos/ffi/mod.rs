//! FFI bindings and objc2 helpers for macOS.

pub mod bridge;
pub mod frameworks;

pub use frameworks::*;
