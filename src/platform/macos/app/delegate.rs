//! `ClaudeNotifierDelegate`: NSApplication and UNUserNotificationCenter delegate.
//!
//! Registered at runtime with `ClassBuilder`. Methods:
//! - `applicationDidFinishLaunching:` starts the session and the tick timer
//! - `userNotificationCenter:didReceiveNotificationResponse:withCompletionHandler:`
//!   publishes the click
//! - `userNotificationCenter:willPresentNotification:withCompletionHandler:`
//!   answers the foreground policy
//! - `pumpEvents:` runs on the timer and exits the process when done

use crate::error::Result;
use crate::events::{publish, NotifierEvent};
use crate::handlers::Termination;
use crate::model::constants::TICK_INTERVAL_SECS;
use crate::model::{ClickPayload, PresentationOptions};
use crate::platform::macos::ffi::bridge::{
    class_named, id, msg_send, nil, nsstring, sel, string_from_id, AnyClass, AnyObject,
    AnyProtocol, Block, ClassBuilder, Sel, YES,
};
use crate::platform::macos::ffi::presentation_mask;

use super::runtime::{finish, pump, start_pending};

const DELEGATE_CLASS: &std::ffi::CStr = c"ClaudeNotifierDelegate";

/// Register the delegate class (once) and create an instance.
///
/// The instance is never released; NSApplication and the notification
/// center only hold it weakly.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn create_delegate() -> Result<id> {
    let cls = match AnyClass::get(DELEGATE_CLASS) {
        Some(cls) => cls,
        None => register_delegate_class()?,
    };
    let delegate: id = msg_send![cls, new];
    Ok(delegate)
}

unsafe fn register_delegate_class() -> Result<&'static AnyClass> {
    let superclass = class_named(c"NSObject")?;
    let Some(mut builder) = ClassBuilder::new(DELEGATE_CLASS, superclass) else {
        return class_named(DELEGATE_CLASS);
    };

    for protocol in [c"NSApplicationDelegate", c"UNUserNotificationCenterDelegate"] {
        if let Some(proto) = AnyProtocol::get(protocol) {
            builder.add_protocol(proto);
        }
    }

    builder.add_method(
        sel!(applicationDidFinishLaunching:),
        did_finish_launching as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(userNotificationCenter:didReceiveNotificationResponse:withCompletionHandler:),
        did_receive_response as unsafe extern "C-unwind" fn(_, _, _, _, _),
    );
    builder.add_method(
        sel!(userNotificationCenter:willPresentNotification:withCompletionHandler:),
        will_present as unsafe extern "C-unwind" fn(_, _, _, _, _),
    );
    builder.add_method(
        sel!(pumpEvents:),
        pump_events as unsafe extern "C-unwind" fn(_, _, _),
    );

    Ok(builder.register())
}

unsafe extern "C-unwind" fn did_finish_launching(this: &AnyObject, _cmd: Sel, _note: id) {
    // Without the session or its timer nothing would ever end the process
    if let Err(err) = start_pending().and_then(|()| schedule_pump(this)) {
        tracing::error!(%err, "cannot run session");
        finish(Termination::from_error(&err));
    }
}

unsafe fn schedule_pump(this: &AnyObject) -> Result<()> {
    let timer_cls = class_named(c"NSTimer")?;
    let target = this as *const AnyObject as id;
    let _: id = msg_send![
        timer_cls,
        scheduledTimerWithTimeInterval: TICK_INTERVAL_SECS,
        target: target,
        selector: sel!(pumpEvents:),
        userInfo: nil,
        repeats: YES
    ];
    Ok(())
}

unsafe extern "C-unwind" fn did_receive_response(
    _this: &AnyObject,
    _cmd: Sel,
    _center: id,
    response: id,
    completion: *mut Block<dyn Fn()>,
) {
    let payload = click_payload(response);
    tracing::debug!(group = %payload.group, "notification response");

    publish(NotifierEvent::Clicked(payload));
    if let Some(completion) = completion.as_ref() {
        completion.call(());
    }
}

unsafe extern "C-unwind" fn will_present(
    _this: &AnyObject,
    _cmd: Sel,
    _center: id,
    _notification: id,
    completion: *mut Block<dyn Fn(usize)>,
) {
    if let Some(completion) = completion.as_ref() {
        completion.call((presentation_mask(PresentationOptions::foreground()),));
    }
}

unsafe extern "C-unwind" fn pump_events(_this: &AnyObject, _cmd: Sel, _timer: id) {
    if let Some(termination) = pump() {
        finish(termination);
    }
}

/// `response.notification.request.content.userInfo` as a payload.
unsafe fn click_payload(response: id) -> ClickPayload {
    let notification: id = msg_send![response, notification];
    let request: id = msg_send![notification, request];
    let content: id = msg_send![request, content];
    let user_info: id = msg_send![content, userInfo];
    if user_info.is_null() {
        return ClickPayload::default();
    }

    ClickPayload::from_lookup(|key| {
        let value: id = msg_send![user_info, objectForKey: &*nsstring(key)];
        string_from_id(value)
    })
}
