//! Contains the logging setup of pointkit.
use std::{fmt::Display, fs::File, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::EnvFilter;

use crate::get_xdg;

pub const LOG_FILE: &str = "log.log";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Couldn't create the log file '{}': {source}", .path.display())]
    CreateLogFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("A global logger is already installed.")]
    AlreadyInitialised,
}

/// How verbose the log file is, set through `[log] level` in the config.
///
/// The names are the ones understood by `RUST_LOG`, so a level can be
/// copied from the config into the environment and back.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Error,
    Warn,
    Info,
    Debug,
    Trace,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
            LogLevel::Off => "off",
        }
    }

    /// The most verbose [`Level`] which still gets logged, `None` for [`LogLevel::Off`].
    pub fn max_level(&self) -> Option<Level> {
        Some(match self {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
            LogLevel::Off => return None,
        })
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        level.max_level().map_or(LevelFilter::OFF, LevelFilter::from_level)
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Installs the global subscriber which writes into the file at `path`.
///
/// *Note*: If the `RUST_LOG` environment variable is set, its directives are
/// used instead of `level`.
/// See https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html#directives
pub fn init_logging(level: LogLevel, path: &Path) -> Result<(), Error> {
    let log_file = File::create(path).map_err(|source| Error::CreateLogFile {
        path: path.to_path_buf(),
        source,
    })?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_max_level(LevelFilter::from(level))
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_file(true);

    let installed = if std::env::var_os("RUST_LOG").is_some() {
        subscriber_builder
            .with_env_filter(EnvFilter::from_default_env())
            .try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|_| Error::AlreadyInitialised)?;

    tracing::debug!("Logger initialised");
    Ok(())
}

/// Returns the path of the log file inside the XDG state directory.
pub fn default_log_path() -> Result<PathBuf, crate::Error> {
    get_xdg()?
        .place_state_file(LOG_FILE)
        .map_err(crate::Error::from)
}
