//! File logging for the terminal binary.
//!
//! The UI owns stdout and stderr is invisible in the alternate screen, so log
//! records go to a file or nowhere.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Target};

use crate::config::Config;

/// Install the global logger if `config.log_path` is set.
///
/// Returns true if a logger was installed.
pub fn init(config: &Config) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    Builder::new()
        .parse_filters(&config.log_level)
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;

    Ok(true)
}
