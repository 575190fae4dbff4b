//! Welcome to the code-documentation of pointkit!
//!
//! The heart of this crate is [`point::Point`], a small 2D value type with
//! arithmetic operators and a textual form which can be written to any
//! [`std::io::Write`] and read back from any [`std::io::BufRead`].

use std::{path::Path, sync::OnceLock};

use anyhow::Context;
use clap::crate_name;
use xdg::BaseDirectories;

pub mod config;
pub mod logging;
pub mod point;

pub use config::Config;
pub use point::{ParseError, Point};

static XDG: OnceLock<Option<BaseDirectories>> = OnceLock::new();

/// Errors while locating pointkit's files.
///
/// Reading a point fails with [`point::ParseError`], loading the config with
/// [`config::Error`] and installing the logger with [`logging::Error`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Couldn't access the XDG base directories.")]
    Xdg,
}

/// Returns the XDG base directories of pointkit or [`Error::Xdg`] if they
/// aren't accessible (for example if `$HOME` isn't set).
pub fn get_xdg() -> Result<&'static BaseDirectories, Error> {
    XDG.get_or_init(|| BaseDirectories::with_prefix(crate_name!()).ok())
        .as_ref()
        .ok_or(Error::Xdg)
}

/// Loads the config at `config_path` and installs the logger at `log_path`
/// with the configured level.
///
/// A missing or broken config file isn't fatal: the defaults are used instead.
pub fn setup(config_path: impl AsRef<Path>, log_path: impl AsRef<Path>) -> anyhow::Result<Config> {
    let config = Config::load_or_default(config_path);

    logging::init_logging(config.log.level, log_path.as_ref())
        .context("Couldn't initialise the logger")?;

    Ok(config)
}
