//! Thin helpers over objc2 for dynamic message sending.
//!
//! The UserNotifications and NSWorkspace calls are made with `msg_send!` on
//! untyped `id` pointers; this module collects the aliases and conversions
//! those call sites share.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::CStr;

use crate::error::{NotifierError, Result};

// ============================================================================
// Core objc2 re-exports
// ============================================================================

pub use objc2::runtime::{AnyClass, AnyObject, AnyProtocol, Bool, ClassBuilder, Sel};
pub use objc2::{msg_send, sel, ClassType};

pub use block2::{Block, RcBlock};
pub use objc2::rc::{autoreleasepool, Retained};
pub use objc2_app_kit::NSApplication;
pub use objc2_foundation::NSString;

// ============================================================================
// Type aliases
// ============================================================================

/// Objective-C object pointer.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL YES.
pub const YES: Bool = Bool::YES;

// ============================================================================
// Helper functions
// ============================================================================

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Look up a class by name.
pub fn class_named(name: &'static CStr) -> Result<&'static AnyClass> {
    AnyClass::get(name).ok_or(NotifierError::MissingClass(name.to_str().unwrap_or("?")))
}

/// Copy an NSString object into a Rust `String`.
///
/// Returns `None` for nil and for objects that aren't strings.
///
/// # Safety
/// `obj` must be nil or a valid Objective-C object.
pub unsafe fn string_from_id(obj: id) -> Option<String> {
    if obj.is_null() {
        return None;
    }
    let is_string: bool = msg_send![obj, isKindOfClass: NSString::class()];
    if !is_string {
        return None;
    }
    let s = &*(obj as *const NSString);
    Some(s.to_string())
}

/// `localizedDescription` of an NSError, or `None` for nil.
///
/// # Safety
/// `error` must be nil or a valid NSError.
pub unsafe fn error_description(error: id) -> Option<String> {
    if error.is_null() {
        return None;
    }
    let desc: id = msg_send![error, localizedDescription];
    string_from_id(desc)
}

/// `[NSURL fileURLWithPath:]`.
///
/// # Safety
/// Must be called with a valid autorelease pool.
pub unsafe fn file_url(path: &str) -> Result<id> {
    let url_cls = class_named(c"NSURL")?;
    let url: id = msg_send![url_cls, fileURLWithPath: &*nsstring(path)];
    Ok(url)
}

/// `[NSArray arrayWithObject:]`.
///
/// # Safety
/// `obj` must be a valid object; needs an autorelease pool.
pub unsafe fn array_of_one(obj: id) -> Result<id> {
    let array_cls = class_named(c"NSArray")?;
    let array: id = msg_send![array_cls, arrayWithObject: obj];
    Ok(array)
}
