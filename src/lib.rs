//! `fanlog` - a minimal, embeddable fan-out logger.
//!
//! Formats leveled, timestamped, printf-style messages and delivers each one
//! to every registered output sink, with color negotiated per sink:
//! - Up to [`MAX_SINKS`] caller-owned stream handles (stdout, stderr, files,
//!   in-memory capture), removable by handle identity
//! - Per-sink color flag, downgraded automatically on non-terminal streams
//! - One render per call, no matter how many sinks are registered
//! - Optional TOML configuration surface
//!
//! # Example
//!
//! ```
//! use fanlog::{Level, Logger, Settings};
//!
//! let mut logger = Logger::new();
//! logger.configure(
//!     Settings::new()
//!         .level(Level::Info)
//!         .call_sites(false)
//!         .sink(fanlog::sink::stdout(), false),
//! );
//!
//! logger.info("main", "application started");
//! logger.debug("net", "filtered out below the threshold");
//! fanlog::warn!(logger, "disk usage at {}%", 93);
//! ```
//!
//! The logger is an owned object with no ambient global state and no internal
//! locking. Sink handles are `Rc`-based and single-threaded; if several
//! threads must log, wrap the whole `Logger` in a mutex.

pub mod color;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod registry;
pub mod sink;

mod internal;
mod macros;

// Re-exports for convenience
pub use color::Color;
pub use config::{Config, TargetConfig, TargetKind};
pub use error::Error;
pub use level::{Level, ParseLevelError};
pub use logger::{Logger, MAX_MESSAGE_LEN, Settings};
pub use registry::{MAX_SINKS, SinkRegistry};
pub use sink::{LogStream, Sink, StreamHandle};
