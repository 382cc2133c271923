//! Lenient `<command> --flag value ...` parser.

use crate::model::{Command, NotificationRequest};

/// Prefix of the process serial number argument LaunchServices may append.
const PSN_PREFIX: &str = "-psn_";

/// Parse a full argv (program name first) into a request.
///
/// The first token after the program name is the command. The rest is read
/// as `--flag value` pairs, except `--all` which stands alone. Repeated flags
/// keep the last value.
pub fn parse_args<I, S>(argv: I) -> NotificationRequest
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = argv
        .into_iter()
        .map(|s| s.as_ref().to_string())
        .collect();

    let mut request = NotificationRequest::default();
    let Some(command) = args.get(1) else {
        return request;
    };
    if command.starts_with(PSN_PREFIX) {
        return request;
    }
    request.command = Command::from_token(command);

    let mut i = 2;
    while i < args.len() {
        let slot = match args[i].as_str() {
            "--title" => Some(&mut request.title),
            "--message" => Some(&mut request.message),
            "--subtitle" => Some(&mut request.subtitle),
            "--sound" => Some(&mut request.sound),
            "--group" => Some(&mut request.group),
            "--project-dir" => Some(&mut request.project_dir),
            "--all" => {
                request.all = true;
                None
            }
            _ => None,
        };
        if let Some(slot) = slot {
            i += 1;
            if let Some(value) = args.get(i) {
                *slot = value.clone();
            }
        }
        i += 1;
    }

    tracing::debug!(command = ?request.command, group = %request.group, "parsed arguments");
    request
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::constants::*;

    #[test]
    fn test_program_name_only_is_empty_command() {
        let req = parse_args(["claude-notifier"]);
        assert_eq!(req, NotificationRequest::default());
        assert_eq!(req.command, Command::Empty);
    }

    #[test]
    fn test_psn_argument_is_click_relaunch() {
        let req = parse_args(["claude-notifier", "-psn_0_123456"]);
        assert_eq!(req.command, Command::Empty);
    }

    #[test]
    fn test_flag_value_consumed_even_if_it_looks_like_a_flag() {
        let req = parse_args(["n", "send", "--title", "--all"]);
        assert_eq!(req.title, "--all");
        assert!(!req.all);
    }

    #[test]
    fn test_trailing_flag_without_value_keeps_default() {
        let req = parse_args(["n", "send", "--group"]);
        assert_eq!(req.group, DEFAULT_GROUP);
    }
}
