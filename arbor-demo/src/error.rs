use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop the demo before or while it runs.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Args(#[from] clap::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid item data in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
