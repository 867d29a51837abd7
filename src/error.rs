use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the canvas configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;
