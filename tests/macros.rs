//! Tests for the call-site capturing macros.

use fanlog::{Logger, Settings, StreamHandle};
use std::cell::RefCell;
use std::rc::Rc;

fn capture_logger() -> (Rc<RefCell<Vec<u8>>>, Logger) {
    let buf = Rc::new(RefCell::new(Vec::new()));
    let handle: StreamHandle = buf.clone();

    let mut logger = Logger::new();
    logger.configure(Settings::new().timestamps(false).sink(handle, false));
    (buf, logger)
}

#[test]
fn macro_stamps_file_and_line() {
    let (buf, logger) = capture_logger();

    fanlog::info!(logger, "x={}", 1);

    let line = String::from_utf8(buf.borrow().clone()).unwrap();
    assert!(line.starts_with("INFO  "));
    assert!(line.contains("macros.rs:"));
    assert!(line.ends_with(": x=1\n"));
}

#[test]
fn macro_respects_threshold() {
    let (buf, mut logger) = capture_logger();
    let handle: StreamHandle = buf.clone();
    logger.configure(
        Settings::new()
            .level(fanlog::Level::Error)
            .timestamps(false)
            .sink(handle, false),
    );

    fanlog::debug!(logger, "dropped");
    fanlog::warn!(logger, "dropped too");
    assert!(buf.borrow().is_empty());

    fanlog::error!(logger, "kept");
    assert!(!buf.borrow().is_empty());
}

#[test]
fn all_severity_macros_render_their_label() {
    let (buf, logger) = capture_logger();

    fanlog::debug!(logger, "a");
    fanlog::info!(logger, "b");
    fanlog::warn!(logger, "c");
    fanlog::error!(logger, "d");
    fanlog::fatal!(logger, "e");

    let text = String::from_utf8(buf.borrow().clone()).unwrap();
    let labels: Vec<&str> = text
        .lines()
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(labels, vec!["DEBUG", "INFO", "WARN", "ERROR", "FATAL"]);
}
