// ABOUTME: Wire types for the Nexus REST API (search, assets, repositories).
// ABOUTME: Only the fields the cleaner reads are modelled; the rest are ignored.

use crate::types::{AssetId, RepositoryName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One component returned by the search endpoint: a single version of an artifact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawItem {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub assets: Vec<RawAsset>,
}

/// A stored blob belonging to a component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAsset {
    pub id: AssetId,
    pub last_modified: DateTime<Utc>,
}

/// One page of search results.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub items: Vec<RawItem>,
    #[serde(default)]
    pub continuation_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: RepositoryName,
    pub format: String,
    #[serde(rename = "type")]
    pub kind: RepositoryKind,
    #[serde(default)]
    pub url: Option<String>,
}

impl Repository {
    /// Whether the cleaner may delete from this repository.
    ///
    /// Proxy and group repositories are read-only views, so only hosted
    /// repositories of the requested format qualify.
    pub fn is_cleanable(&self, format: &str) -> bool {
        self.kind == RepositoryKind::Hosted && self.format == format
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepositoryKind {
    Hosted,
    Proxy,
    Group,
    #[serde(other)]
    Other,
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RepositoryKind::Hosted => "hosted",
            RepositoryKind::Proxy => "proxy",
            RepositoryKind::Group => "group",
            RepositoryKind::Other => "other",
        };
        f.write_str(s)
    }
}
