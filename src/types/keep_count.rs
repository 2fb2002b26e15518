// ABOUTME: Validated number of most-recent versions to keep per artifact.
// ABOUTME: Enforces the hard floor that guards against accidental mass deletion.

use serde::{Deserialize, Deserializer};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeepCountError {
    #[error("keep count must be at least {min}, got {0}", min = KeepCount::MIN)]
    BelowMinimum(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct KeepCount(usize);

impl KeepCount {
    /// Lowest keep count accepted from any configuration source.
    pub const MIN: usize = 10;

    /// Keep count used when neither the config file nor the CLI sets one.
    pub const DEFAULT: KeepCount = KeepCount(30);

    pub fn new(value: usize) -> Result<Self, KeepCountError> {
        if value < Self::MIN {
            return Err(KeepCountError::BelowMinimum(value));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for KeepCount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for KeepCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for KeepCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = usize::deserialize(deserializer)?;
        KeepCount::new(value).map_err(serde::de::Error::custom)
    }
}
