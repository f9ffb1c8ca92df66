//! The logger's own diagnostics channel.
//!
//! Misconfiguration reports (full registry, downgraded colors) go to process
//! stderr, never to the configured sinks; a broken sink setup must still be
//! able to say so somewhere.

use chrono::Local;

/// Timestamped advisory on stderr. Write failures are ignored; diagnostics
/// must never take the caller down.
pub(crate) fn warn(msg: &str) {
    let timestamp = Local::now().format("%H:%M:%S");
    eprintln!("[{timestamp}] WARNING : {msg}");
}
