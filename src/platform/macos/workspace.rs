//! NSWorkspace launcher for the configured editor.
//!
//! Opening a folder through Launch Services with an explicit application
//! brings an existing window for that folder to the front, or opens one.

use std::path::{Path, PathBuf};

use crate::error::{NotifierError, Result};
use crate::events::{EventPublisher, NotifierEvent};
use crate::handlers::EditorLauncher;
use crate::platform::macos::ffi::bridge::{
    array_of_one, class_named, error_description, file_url, id, msg_send, RcBlock, YES,
};

/// Opens folders in, and activates, one editor application.
#[derive(Debug, Clone)]
pub struct WorkspaceLauncher {
    editor_app: PathBuf,
}

impl WorkspaceLauncher {
    pub fn new(editor_app: PathBuf) -> Self {
        Self { editor_app }
    }

    /// Shared workspace plus an activating open configuration.
    unsafe fn workspace_and_config() -> Result<(id, id)> {
        let ws_cls = class_named(c"NSWorkspace")?;
        let config_cls = class_named(c"NSWorkspaceOpenConfiguration")?;
        let ws: id = msg_send![ws_cls, sharedWorkspace];
        let config: id = msg_send![config_cls, configuration];
        let _: () = msg_send![config, setActivates: YES];
        Ok((ws, config))
    }

    unsafe fn open_folder(&self, folder: &Path, events: EventPublisher) -> Result<()> {
        let (ws, config) = Self::workspace_and_config()?;
        let app_url = file_url(&self.editor_app.to_string_lossy())?;
        let folder_url = file_url(&folder.to_string_lossy())?;
        let urls = array_of_one(folder_url)?;

        let block = RcBlock::new(move |_app: id, error: id| {
            let event = if error.is_null() {
                NotifierEvent::EditorOpened
            } else {
                let message = unsafe { error_description(error) }
                    .unwrap_or_else(|| "unknown error".to_string());
                NotifierEvent::EditorOpenFailed(NotifierError::Launch(message).to_string())
            };
            events.publish(event);
        });
        let _: () = msg_send![
            ws,
            openURLs: urls,
            withApplicationAtURL: app_url,
            configuration: config,
            completionHandler: &*block
        ];
        Ok(())
    }

    unsafe fn activate(&self, events: EventPublisher) -> Result<()> {
        let (ws, config) = Self::workspace_and_config()?;
        let app_url = file_url(&self.editor_app.to_string_lossy())?;

        let block = RcBlock::new(move |_app: id, error: id| {
            if let Some(message) = unsafe { error_description(error) } {
                tracing::warn!(%message, "editor activation failed");
            }
            events.publish(NotifierEvent::EditorActivated);
        });
        let _: () = msg_send![
            ws,
            openApplicationAtURL: app_url,
            configuration: config,
            completionHandler: &*block
        ];
        Ok(())
    }
}

impl EditorLauncher for WorkspaceLauncher {
    fn open_in_editor(&self, folder: &Path, events: EventPublisher) {
        tracing::debug!(
            folder = %folder.display(),
            editor = %self.editor_app.display(),
            "open in editor"
        );
        if let Err(err) = unsafe { self.open_folder(folder, events.clone()) } {
            events.publish(NotifierEvent::EditorOpenFailed(err.to_string()));
        }
    }

    fn activate_editor(&self, events: EventPublisher) {
        tracing::debug!(editor = %self.editor_app.display(), "activate editor");
        if let Err(err) = unsafe { self.activate(events.clone()) } {
            tracing::warn!(%err, "editor activation skipped");
            events.publish(NotifierEvent::EditorActivated);
        }
    }
}
