//! Tests for styled console rendering. Timestamps vary, so assertions match
//! on the surrounding structure rather than whole lines.

use mdlog::fmt::Ansi;
use mdlog::{ConsoleOutput, Level, Record};

const GRAY: &str = "\x1b[38;5;240m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

#[test]
fn metadata_opens_in_gray() {
    let console = ConsoleOutput::default();
    let out = console.render(&Record::new(Level::Info, "hello"));
    assert!(out.starts_with(GRAY));
    assert!(out.ends_with(" ~ hello"));
}

#[test]
fn info_label_has_no_color_code() {
    let console = ConsoleOutput::default();
    let out = console.render(&Record::new(Level::Info, "hello"));
    assert!(out.contains(" ~ INFO  ~ "));
}

#[test]
fn error_label_is_red() {
    let console = ConsoleOutput::default();
    let out = console.render(&Record::new(Level::Error, "boom"));
    assert!(out.contains(&format!(" ~ {RED}ERROR ~ ")));
}

#[test]
fn override_color_follows_the_label() {
    let console = ConsoleOutput::default();
    let mut record = Record::new(Level::Error, "boom");
    record.color = Some(Ansi::Blue);
    let out = console.render(&record);
    assert!(out.contains(&format!("ERROR ~ {BLUE}boom")));
}

#[test]
fn level_color_is_the_ambient_restored_after_markers() {
    let console = ConsoleOutput::default();
    let out = console.render(&Record::new(Level::Error, "a *b* c"));
    assert!(out.ends_with(&format!("a {BOLD}b{RESET}{RED} c")));
}

#[test]
fn override_color_is_the_ambient_restored_after_markers() {
    let console = ConsoleOutput::default();
    let mut record = Record::new(Level::Warn, "*b*");
    record.color = Some(Ansi::Blue);
    let out = console.render(&record);
    assert!(out.ends_with(&format!("{BLUE}{BOLD}b{RESET}{BLUE}")));
}

#[test]
fn context_frames_the_line() {
    let console = ConsoleOutput::default();
    let mut record = Record::new(Level::Info, "msg");
    record.context = Some("Peer(42)".to_string());
    let out = console.render(&record);
    assert!(out.starts_with(&format!("{GRAY}-----\n")));
    assert!(out.contains(&format!("{GRAY}Peer(42)")));
    assert!(out.ends_with(&format!("{GRAY}\n-----{RESET}")));
}

#[test]
fn no_trailing_reset_without_context() {
    // The ambient color deliberately stays active at end of line.
    let console = ConsoleOutput::default();
    let out = console.render(&Record::new(Level::Warn, "plain"));
    assert!(!out.ends_with(RESET));
}

#[test]
fn extra_values_use_the_join_separator() {
    let console = ConsoleOutput::default();
    let mut record = Record::new(Level::Info, "one");
    record.extra = vec!["two".to_string(), "three".to_string()];
    record.join = ", ".to_string();
    let out = console.render(&record);
    assert!(out.ends_with("one, two, three"));
}

#[test]
fn bypass_message_renders_verbatim() {
    let console = ConsoleOutput::default();
    let out = console.render(&Record::new(Level::Info, "[nmd]*raw*"));
    assert!(out.ends_with(" ~ *raw*"));
}
