//! The logger object: severity threshold, presentation flags, and the sink
//! registry, with the fan-out writer that delivers each record to every sink.
//!
//! The message body is rendered exactly once per call; only the thin color
//! wrapping differs between sinks, so at most two full line variants (plain
//! and colored) are ever built no matter how many sinks are registered.

mod from_config;

use crate::color::Color;
use crate::level::Level;
use crate::registry::SinkRegistry;
use crate::sink::{self, StreamHandle};
use chrono::Local;
use std::fmt::{self, Write as _};

/// Rendered message bodies are capped at this many bytes; anything longer is
/// silently truncated (on a char boundary).
pub const MAX_MESSAGE_LEN: usize = 4096;

/// An owned logger instance. There is deliberately no ambient global: embed
/// one where your application composes its services, and share it explicitly.
///
/// All state is caller-thread-only (`Rc` handles, no internal locking). For
/// multi-threaded use, guard the whole logger with a mutex externally.
pub struct Logger {
    min_level: Level,
    show_timestamp: bool,
    show_call_site: bool,
    sinks: SinkRegistry,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// A logger in its initial state: everything from `Debug` up, timestamps
    /// and call-site tags on, one stdout sink with colors iff stdout is a
    /// terminal.
    #[must_use]
    pub fn new() -> Self {
        let mut logger = Self {
            min_level: Level::Debug,
            show_timestamp: true,
            show_call_site: true,
            sinks: SinkRegistry::new(),
        };
        logger.install_default_sink();
        logger
    }

    fn install_default_sink(&mut self) {
        let handle = sink::stdout();
        let colors = handle.borrow().is_terminal();
        self.sinks.add(handle, colors);
    }

    /// Restores the initial state described on [`Logger::new`]. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replaces threshold, flags, and the whole sink set at once.
    ///
    /// Every requested sink goes through the same validation as
    /// [`add_sink`](Self::add_sink), so color downgrading and the capacity
    /// bound apply identically. If no sink survives validation (or none was
    /// requested), the default stdout sink is installed instead, so a
    /// configured logger never ends up silently sinkless.
    pub fn configure(&mut self, settings: Settings) {
        self.min_level = settings.min_level;
        self.show_timestamp = settings.show_timestamp;
        self.show_call_site = settings.show_call_site;
        self.sinks = SinkRegistry::new();
        for (stream, colors) in settings.sinks {
            self.sinks.add(stream, colors);
        }
        if self.sinks.is_empty() {
            self.install_default_sink();
        }
    }

    /// Registers one more sink. Returns `false` when the registry is full;
    /// re-adding an existing handle is a successful no-op.
    pub fn add_sink(&mut self, stream: StreamHandle, colors: bool) -> bool {
        self.sinks.add(stream, colors)
    }

    /// Unregisters a sink by handle identity; unknown handles are ignored.
    /// Removing the last sink falls back to the default stdout sink, symmetric
    /// with [`configure`](Self::configure).
    pub fn remove_sink(&mut self, stream: &StreamHandle) {
        self.sinks.remove(stream);
        if self.sinks.is_empty() {
            self.install_default_sink();
        }
    }

    /// Core dispatch: filter by severity, render once, write to every sink.
    ///
    /// The severity check runs before any formatting so filtered-out calls
    /// cost nothing. Each sink is written and flushed in registration order; a
    /// failing sink is skipped over, never allowed to silence the others, and
    /// no error reaches the caller.
    ///
    /// An empty `call_site` suppresses the whole tag segment, including the
    /// `: ` separator, even when call-site rendering is enabled.
    pub fn log(&self, level: Level, call_site: &str, args: fmt::Arguments<'_>) {
        if level < self.min_level {
            return;
        }
        let body = render_body(args);
        self.write_record(level, call_site, &body);
    }

    /// Development-time diagnostics.
    pub fn debug(&self, call_site: &str, msg: &str) {
        self.log(Level::Debug, call_site, format_args!("{msg}"));
    }

    /// Normal operational milestones.
    pub fn info(&self, call_site: &str, msg: &str) {
        self.log(Level::Info, call_site, format_args!("{msg}"));
    }

    /// Non-fatal anomalies.
    pub fn warn(&self, call_site: &str, msg: &str) {
        self.log(Level::Warn, call_site, format_args!("{msg}"));
    }

    /// Unrecoverable failures.
    pub fn error(&self, call_site: &str, msg: &str) {
        self.log(Level::Error, call_site, format_args!("{msg}"));
    }

    /// Severity label only; does **not** terminate the process. Exiting after
    /// a fatal condition is the caller's responsibility.
    pub fn fatal(&self, call_site: &str, msg: &str) {
        self.log(Level::Fatal, call_site, format_args!("{msg}"));
    }

    fn write_record(&self, level: Level, call_site: &str, body: &str) {
        // One timestamp for the whole call, so every sink sees the same
        // second even if the clock ticks over mid-fan-out.
        let timestamp = self
            .show_timestamp
            .then(|| Local::now().format("%H:%M:%S").to_string());

        let plain = self.render_line(level, call_site, body, timestamp.as_deref(), false);
        let mut colored: Option<String> = None;

        for sink in &self.sinks {
            let line: &str = if sink.colors() {
                colored.get_or_insert_with(|| {
                    self.render_line(level, call_site, body, timestamp.as_deref(), true)
                })
            } else {
                &plain
            };
            let mut stream = sink.stream().borrow_mut();
            // Flush per line so a crash right after logging loses nothing.
            let _ = stream.write_all(line.as_bytes());
            let _ = stream.flush();
        }
    }

    fn render_line(
        &self,
        level: Level,
        call_site: &str,
        body: &str,
        timestamp: Option<&str>,
        colors: bool,
    ) -> String {
        let mut line = String::with_capacity(body.len() + 32);
        if let Some(ts) = timestamp {
            line.push_str(ts);
            line.push(' ');
        }
        if colors {
            let _ = write!(
                line,
                "{}{:<5}{} ",
                level.color().ansi(),
                level.label(),
                Color::RESET
            );
        } else {
            let _ = write!(line, "{:<5} ", level.label());
        }
        if self.show_call_site && !call_site.is_empty() {
            line.push_str(call_site);
            line.push_str(": ");
        }
        line.push_str(body);
        line.push('\n');
        line
    }

    /// The active severity threshold.
    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    /// Whether lines carry an `HH:MM:SS` prefix.
    #[must_use]
    pub const fn timestamps_enabled(&self) -> bool {
        self.show_timestamp
    }

    /// Whether lines carry the call-site tag.
    #[must_use]
    pub const fn call_sites_enabled(&self) -> bool {
        self.show_call_site
    }

    /// Number of registered sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }
}

/// A complete replacement configuration for [`Logger::configure`].
pub struct Settings {
    min_level: Level,
    show_timestamp: bool,
    show_call_site: bool,
    sinks: Vec<(StreamHandle, bool)>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    /// Starts from the logger's initial defaults, with no sinks requested.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_level: Level::Debug,
            show_timestamp: true,
            show_call_site: true,
            sinks: Vec::new(),
        }
    }

    /// Messages below this level are dropped before any formatting.
    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// Toggle the `HH:MM:SS` line prefix.
    #[must_use]
    pub const fn timestamps(mut self, enabled: bool) -> Self {
        self.show_timestamp = enabled;
        self
    }

    /// Toggle the call-site tag.
    #[must_use]
    pub const fn call_sites(mut self, enabled: bool) -> Self {
        self.show_call_site = enabled;
        self
    }

    /// Requests a sink, in fan-out order. The color flag is a request and is
    /// negotiated against the stream when the settings are applied.
    #[must_use]
    pub fn sink(mut self, stream: StreamHandle, colors: bool) -> Self {
        self.sinks.push((stream, colors));
        self
    }
}

fn render_body(args: fmt::Arguments<'_>) -> String {
    let mut body = fmt::format(args);
    if body.len() > MAX_MESSAGE_LEN {
        let mut cut = MAX_MESSAGE_LEN;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        body.truncate(cut);
    }
    body
}
