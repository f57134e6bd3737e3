use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::error::{Error, Result};

/// Send log output to `path`. The terminal belongs to the UI, so without a
/// log file nothing is installed and events are dropped.
pub fn init(path: Option<&Path>, level: Level) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging to {}", path.display());
    Ok(())
}
