use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TurnError {
    #[error("a corner turn is already in progress")]
    AlreadyActive,

    #[error("orientation cannot provide a reference frame (quaternion length {length})")]
    DegenerateFrame { length: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
