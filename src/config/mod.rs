// ABOUTME: Configuration types and parsing for nexus-cleaner.yml.
// ABOUTME: Handles YAML parsing, file discovery, and secret resolution.

mod deserialize;
mod env_value;
mod init;
mod retention;

pub use env_value::EnvValue;
pub use init::init_config;
pub use retention::{PolicyOverrides, RetentionConfig};

use crate::error::{Error, Result};
use deserialize::{deserialize_non_empty, deserialize_url};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILENAME: &str = "nexus-cleaner.yml";
pub const CONFIG_FILENAME_ALT: &str = "nexus-cleaner.yaml";
pub const CONFIG_FILENAME_DIR: &str = ".nexus-cleaner/config.yml";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base URL of the Nexus instance, without the REST prefix.
    #[serde(deserialize_with = "deserialize_url")]
    pub url: String,

    #[serde(deserialize_with = "deserialize_non_empty")]
    pub login: String,

    pub password: EnvValue,

    /// Repository format to clean.
    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,

    #[serde(default)]
    pub retention: RetentionConfig,
}

fn default_format() -> String {
    "docker".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(Error::from)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn discover(dir: &Path) -> Result<Self> {
        let candidates = [
            dir.join(CONFIG_FILENAME),
            dir.join(CONFIG_FILENAME_ALT),
            dir.join(CONFIG_FILENAME_DIR),
        ];

        for path in &candidates {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config");
                return Self::load(path);
            }
        }

        Err(Error::ConfigNotFound(dir.to_path_buf()))
    }

    /// Load `explicit` when given, otherwise search `dir`.
    pub fn locate(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => Err(Error::ConfigNotFound(path.to_path_buf())),
            Some(path) => Self::load(path),
            None => Self::discover(dir),
        }
    }
}
