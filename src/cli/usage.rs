//! Usage text printed by `help` and after an unknown command.

use crate::model::constants::APP_NAME;

/// Full usage text, without a trailing newline.
pub fn usage() -> String {
    format!(
        "\
{app} - macOS notification tool for Claude Code hooks

Usage: {app} <command> [options]

Commands:
  send      Send a notification
  remove    Remove a delivered notification
  setup     Request notification permissions (run once)
  help      Show this help

Send options:
  --title VALUE        Notification title
  --message VALUE      Notification body
  --subtitle VALUE     Notification subtitle
  --sound VALUE        Sound name (default, Glass, none)
  --group VALUE        Group ID (same group replaces previous)
  --project-dir VALUE  Project folder to focus in the editor on click

Remove options:
  --group VALUE        Remove notification with this group ID
  --all                Remove all notifications

Examples:
  {app} send --title \"Permission needed\" --message \"Bash permission\" --group \"perm-Bash\"
  {app} remove --group \"perm-Bash\"
  {app} remove --all",
        app = APP_NAME
    )
}
