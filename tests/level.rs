//! Tests for the severity model.

use fanlog::{Color, Level};

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warn);
    assert!(Level::Warn < Level::Error);
    assert!(Level::Error < Level::Fatal);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "debug");
    assert_eq!(Level::Info.to_string(), "info");
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Error.to_string(), "error");
    assert_eq!(Level::Fatal.to_string(), "fatal");
}

#[test]
fn level_labels() {
    assert_eq!(Level::Debug.label(), "DEBUG");
    assert_eq!(Level::Info.label(), "INFO");
    assert_eq!(Level::Warn.label(), "WARN");
    assert_eq!(Level::Error.label(), "ERROR");
    assert_eq!(Level::Fatal.label(), "FATAL");
}

#[test]
fn level_colors() {
    assert_eq!(Level::Debug.color(), Color::Blue);
    assert_eq!(Level::Info.color(), Color::Green);
    assert_eq!(Level::Warn.color(), Color::Yellow);
    assert_eq!(Level::Error.color(), Color::Red);
    assert_eq!(Level::Fatal.color(), Color::Magenta);
}

#[test]
fn level_from_str() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("Info".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("ERR".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("fatal".parse::<Level>().unwrap(), Level::Fatal);
}

#[test]
fn level_from_str_invalid() {
    assert!("verbose".parse::<Level>().is_err());
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Debug);
}

#[test]
fn level_all_is_ordered() {
    let all = Level::all();
    assert_eq!(all.len(), 5);
    assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
}
