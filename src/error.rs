/// Error types
///
/// Only start-up can fail. Once the surface exists, the simulation has no
/// error paths.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(#[from] std::io::Error),

    #[error("terminal too small: {cols}x{rows} (need at least {min_cols}x{min_rows})")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
