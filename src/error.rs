// ABOUTME: Application-wide error types for nexus-cleaner.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::nexus::GatewayError;
use crate::retention::AggregateError;
use crate::types::KeepCountError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("file already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("configuration file not found in {0}")]
    ConfigNotFound(PathBuf),

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    KeepCount(#[from] KeepCountError),

    #[error("nexus request failed: {0}")]
    Gateway(#[from] GatewayError),

    #[error("{name} is not a hosted {format} repository")]
    UnknownRepository { name: String, format: String },

    #[error("malformed listing in repository {repository}: {source}")]
    MalformedListing {
        repository: String,
        source: AggregateError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Whether the error was raised before any remote interaction.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::AlreadyExists(_)
                | Error::ConfigNotFound(_)
                | Error::MissingEnvVar(_)
                | Error::InvalidConfig(_)
                | Error::KeepCount(_)
                | Error::Yaml(_)
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
