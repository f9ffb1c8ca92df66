//! Building a logger from a declarative [`Config`].

use super::{Logger, Settings};
use crate::config::{Config, TargetKind};
use crate::error::Error;
use crate::level::Level;
use crate::sink;
use std::fs::OpenOptions;

impl Logger {
    /// Builds a logger from a parsed config, opening any file targets.
    ///
    /// Targets are applied through [`Logger::configure`], so the usual rules
    /// hold: color requests are negotiated per stream, the capacity bound
    /// applies, and a config with zero targets yields the default stdout sink.
    ///
    /// # Errors
    /// [`Error::InvalidLevel`] for an unknown level string,
    /// [`Error::InvalidPath`] for a file target without a path,
    /// [`Error::Io`] if a log file can't be opened.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let level: Level = config
            .level
            .parse()
            .map_err(|_| Error::InvalidLevel(config.level.clone()))?;

        let mut settings = Settings::new()
            .level(level)
            .timestamps(config.timestamps)
            .call_sites(config.call_sites);

        for target in &config.targets {
            let handle = match target.kind {
                TargetKind::Stdout => sink::stdout(),
                TargetKind::Stderr => sink::stderr(),
                TargetKind::File => {
                    let path = target.path.as_deref().ok_or_else(|| {
                        Error::InvalidPath("file target requires a path".to_string())
                    })?;
                    let file = OpenOptions::new().create(true).append(true).open(path)?;
                    sink::file(file)
                }
            };
            settings = settings.sink(handle, target.colors);
        }

        let mut logger = Self::new();
        logger.configure(settings);
        Ok(logger)
    }
}
