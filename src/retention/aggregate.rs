// ABOUTME: Groups raw search items by artifact and resolves one record per version.
// ABOUTME: A version's timestamp and deletion handle come from its newest asset.

use crate::nexus::{RawAsset, RawItem};
use crate::types::AssetId;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Canonical view of one (artifact, version) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    pub name: String,
    pub version: String,
    pub last_modified: DateTime<Utc>,
    /// Id of the asset that carries `last_modified`; deleting it removes the version.
    pub handle: AssetId,
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} ({})",
            self.name,
            self.version,
            self.last_modified.to_rfc3339()
        )
    }
}

/// Artifact name to its versions, oldest first.
pub type NameGroup = BTreeMap<String, Vec<VersionRecord>>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregateError {
    #[error("version {name}:{version} has no assets")]
    EmptyVersion { name: String, version: String },
}

/// Group `items` by artifact name and sort each group by version timestamp.
///
/// Ties keep the order in which the items were listed, both when choosing the
/// newest asset of a version and when ordering versions of an artifact.
pub fn aggregate<I>(items: I) -> Result<NameGroup, AggregateError>
where
    I: IntoIterator<Item = RawItem>,
{
    let mut groups = NameGroup::new();

    for item in items {
        let newest = newest_asset(&item.assets).ok_or_else(|| AggregateError::EmptyVersion {
            name: item.name.clone(),
            version: item.version.clone(),
        })?;

        let record = VersionRecord {
            last_modified: newest.last_modified,
            handle: newest.id.clone(),
            name: item.name.clone(),
            version: item.version,
        };
        groups.entry(item.name).or_default().push(record);
    }

    for versions in groups.values_mut() {
        // sort_by_key is stable
        versions.sort_by_key(|record| record.last_modified);
    }

    Ok(groups)
}

/// First asset holding the maximum timestamp.
fn newest_asset(assets: &[RawAsset]) -> Option<&RawAsset> {
    assets.iter().fold(None, |best, asset| match best {
        Some(best) if best.last_modified >= asset.last_modified => Some(best),
        _ => Some(asset),
    })
}
