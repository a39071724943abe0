//! Tests for log level functionality.

use mdlog::fmt::Ansi;
use mdlog::Level;

#[test]
fn level_ordering() {
    assert!(Level::Info < Level::Debug);
    assert!(Level::Debug < Level::Warn);
    assert!(Level::Warn < Level::Error);
}

#[test]
fn level_labels_are_five_chars() {
    for level in Level::all() {
        assert_eq!(level.label().len(), 5, "label for {level}");
    }
    assert_eq!(Level::Info.label(), "INFO ");
    assert_eq!(Level::Debug.label(), "DEBUG");
    assert_eq!(Level::Warn.label(), "WARN ");
    assert_eq!(Level::Error.label(), "ERROR");
}

#[test]
fn level_colors() {
    assert_eq!(Level::Info.color(), None);
    assert_eq!(Level::Debug.color(), Some(Ansi::White));
    assert_eq!(Level::Warn.color(), Some(Ansi::Yellow));
    assert_eq!(Level::Error.color(), Some(Ansi::Red));
}

#[test]
fn level_display() {
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
}

#[test]
fn level_from_str() {
    assert_eq!("info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn level_from_str_invalid() {
    assert!("invalid".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Info);
}
