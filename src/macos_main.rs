//! macOS-specific entry point.
//!
//! Sets up an accessory NSApplication whose delegate is also the
//! notification center delegate, stashes the dispatched session and runs
//! the run loop. The process exits from the delegate's timer once the
//! session terminates.

use claude_notifier::events::init_event_bus;
use claude_notifier::handlers::{Effect, Session, Termination};
use claude_notifier::model::NotifierConfig;
use claude_notifier::platform::macos::app::{create_delegate, finish, stash_launch, Launch};
use claude_notifier::platform::macos::ffi::bridge::{autoreleasepool, msg_send, NSApp};
use claude_notifier::platform::macos::ffi::NS_APPLICATION_ACTIVATION_POLICY_ACCESSORY;
use claude_notifier::platform::macos::UserNotificationCenter;

/// Load configuration from NSUserDefaults and the environment.
pub fn load_config() -> NotifierConfig {
    autoreleasepool(|_| unsafe { claude_notifier::platform::macos::load_config() })
}

/// Run the session on the AppKit run loop. Never returns normally.
pub fn run(session: Session, effects: Vec<Effect>, config: NotifierConfig) -> ! {
    // Delegate callbacks publish as soon as the run loop starts
    init_event_bus();

    autoreleasepool(|_| unsafe {
        let app = NSApp();
        // No Dock icon
        let _: bool =
            msg_send![app, setActivationPolicy: NS_APPLICATION_ACTIVATION_POLICY_ACCESSORY];

        let delegate = match create_delegate() {
            Ok(delegate) => delegate,
            Err(err) => finish(Termination::from_error(&err)),
        };
        let _: () = msg_send![app, setDelegate: delegate];

        // Must be set before launch finishes to receive the click that relaunched us
        match UserNotificationCenter::current() {
            Ok(center) => {
                let _: () = msg_send![center, setDelegate: delegate];
            }
            Err(err) => tracing::warn!(%err, "notification center unavailable"),
        }

        stash_launch(Launch {
            session,
            effects,
            config,
        });

        let _: () = msg_send![app, run];
    });

    // Only reached if something stopped the run loop without exiting
    finish(Termination::success())
}
