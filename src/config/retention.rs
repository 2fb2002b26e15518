// ABOUTME: Retention settings from the config file and their command-line overrides.
// ABOUTME: Resolves both into the RetentionPolicy used by the engine.

use super::deserialize::deserialize_names_option;
use crate::error::{Error, Result};
use crate::retention::RetentionPolicy;
use crate::types::KeepCount;
use nonempty::NonEmpty;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RetentionConfig {
    #[serde(default)]
    pub keep: KeepCount,

    #[serde(default, with = "humantime_serde")]
    pub max_age: Option<Duration>,

    #[serde(default, deserialize_with = "deserialize_names_option")]
    pub names: Option<NonEmpty<String>>,
}

/// Policy values given on the command line. Each one set replaces the
/// config file's value.
#[derive(Debug, Clone, Default)]
pub struct PolicyOverrides {
    pub count: Option<usize>,
    pub days: Option<u32>,
    pub names: Vec<String>,
}

impl RetentionConfig {
    pub fn policy(&self, overrides: &PolicyOverrides) -> Result<RetentionPolicy> {
        let keep = match overrides.count {
            Some(count) => KeepCount::new(count)?,
            None => self.keep,
        };

        let max_age = match (overrides.days, self.max_age) {
            (Some(days), _) => Some(chrono::Duration::days(i64::from(days))),
            (None, Some(age)) => Some(chrono::Duration::from_std(age).map_err(|_| {
                Error::InvalidConfig(format!("retention.max_age is too large: {age:?}"))
            })?),
            (None, None) => None,
        };

        let mut policy = RetentionPolicy::new(keep);
        if let Some(age) = max_age {
            policy = policy.with_max_age(age);
        }

        if !overrides.names.is_empty() {
            policy = policy.with_names(overrides.names.iter().cloned());
        } else if let Some(names) = &self.names {
            policy = policy.with_names(names.iter().cloned());
        }

        Ok(policy)
    }
}
