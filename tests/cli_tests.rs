//! Command line parsing as seen from the binary's argv.

use claude_notifier::model::{
    Command, NotificationRequest, DEFAULT_GROUP, DEFAULT_SOUND, DEFAULT_TITLE,
};
use claude_notifier::{parse_args, usage};

fn parse(args: &[&str]) -> NotificationRequest {
    parse_args(std::iter::once("claude-notifier").chain(args.iter().copied()))
}

#[test]
fn no_arguments_is_the_empty_command() {
    let request = parse(&[]);
    assert_eq!(request.command, Command::Empty);
    assert_eq!(request, NotificationRequest::default());
}

#[test]
fn launch_services_serial_number_is_not_a_command() {
    let request = parse(&["-psn_0_123456"]);
    assert_eq!(request.command, Command::Empty);
}

#[test]
fn send_without_flags_uses_defaults() {
    let request = parse(&["send"]);
    assert_eq!(request.command, Command::Send);
    assert_eq!(request.title, DEFAULT_TITLE);
    assert_eq!(request.message, "");
    assert_eq!(request.subtitle, "");
    assert_eq!(request.sound, DEFAULT_SOUND);
    assert_eq!(request.group, DEFAULT_GROUP);
    assert_eq!(request.project_dir, "");
    assert!(!request.all);
}

#[test]
fn every_send_flag_is_read() {
    let request = parse(&[
        "send",
        "--title",
        "Permission needed",
        "--message",
        "Bash permission",
        "--subtitle",
        "my-repo",
        "--sound",
        "Glass",
        "--group",
        "perm-Bash",
        "--project-dir",
        "/Users/me/src/my-repo",
    ]);
    assert_eq!(request.title, "Permission needed");
    assert_eq!(request.message, "Bash permission");
    assert_eq!(request.subtitle, "my-repo");
    assert_eq!(request.sound, "Glass");
    assert_eq!(request.group, "perm-Bash");
    assert_eq!(request.project_dir, "/Users/me/src/my-repo");
}

#[test]
fn repeated_flag_keeps_last_value() {
    let request = parse(&["send", "--title", "first", "--message", "m", "--title", "second"]);
    assert_eq!(request.title, "second");
    assert_eq!(request.message, "m");
}

#[test]
fn unknown_flags_and_stray_tokens_are_skipped() {
    let request = parse(&["send", "--color", "--title", "T", "stray", "--verbose"]);
    assert_eq!(request.command, Command::Send);
    assert_eq!(request.title, "T");
    assert_eq!(request.message, "");
}

#[test]
fn value_flag_at_end_keeps_default() {
    let request = parse(&["send", "--message", "hi", "--group"]);
    assert_eq!(request.message, "hi");
    assert_eq!(request.group, DEFAULT_GROUP);
}

#[test]
fn value_flag_consumes_next_token_even_if_it_looks_like_a_flag() {
    let request = parse(&["send", "--title", "--all"]);
    assert_eq!(request.title, "--all");
    assert!(!request.all);
}

#[test]
fn remove_all_is_a_standalone_switch() {
    let request = parse(&["remove", "--all", "--group", "g"]);
    assert_eq!(request.command, Command::Remove);
    assert!(request.all);
    assert_eq!(request.group, "g");
}

#[test]
fn help_aliases_parse_to_help() {
    for alias in ["help", "--help", "-h"] {
        assert_eq!(parse(&[alias]).command, Command::Help, "alias {alias}");
    }
}

#[test]
fn unknown_command_keeps_its_name() {
    assert_eq!(parse(&["frobnicate"]).command, Command::Unknown("frobnicate".into()));
}

#[test]
fn usage_lists_every_command_and_flag() {
    let text = usage();
    for needle in [
        "send",
        "remove",
        "setup",
        "help",
        "--title",
        "--message",
        "--subtitle",
        "--sound",
        "--group",
        "--project-dir",
        "--all",
    ] {
        assert!(text.contains(needle), "usage is missing {needle}");
    }
    assert!(!text.ends_with('\n'));
}
