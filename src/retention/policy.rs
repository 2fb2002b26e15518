// ABOUTME: Retention policy engine deciding which versions to delete.
// ABOUTME: Keeps the newest versions of every artifact, then applies an optional age cutoff.

use super::aggregate::{NameGroup, VersionRecord};
use super::audit::{ArtifactAudit, AuditEntry, AuditView, Verdict};
use crate::types::KeepCount;
use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, BTreeSet};

/// Artifact name to the versions selected for deletion, oldest first.
/// Artifacts with nothing to delete are absent.
pub type DeletionPlan = BTreeMap<String, Vec<VersionRecord>>;

/// Which versions survive a cleaning run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPolicy {
    keep: KeepCount,
    max_age: Option<Duration>,
    names: Option<BTreeSet<String>>,
}

/// Result of applying a policy to one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub deletions: DeletionPlan,
    pub audit: Option<AuditView>,
}

impl Plan {
    /// Number of versions selected for deletion across all artifacts.
    pub fn len(&self) -> usize {
        self.deletions.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty()
    }
}

impl RetentionPolicy {
    /// Count-only policy: everything outside the newest `keep` versions goes.
    pub fn new(keep: KeepCount) -> Self {
        Self {
            keep,
            max_age: None,
            names: None,
        }
    }

    /// Only delete versions older than `max_age` at planning time.
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = Some(max_age);
        self
    }

    /// Restrict the policy to the given artifact names. Others are left alone.
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn keep(&self) -> KeepCount {
        self.keep
    }

    pub fn max_age(&self) -> Option<Duration> {
        self.max_age
    }

    pub fn names(&self) -> Option<&BTreeSet<String>> {
        self.names.as_ref()
    }

    /// Whether `name` falls under this policy's name filter.
    pub fn applies_to(&self, name: &str) -> bool {
        self.names.as_ref().is_none_or(|names| names.contains(name))
    }

    /// Versions modified before this instant are old enough to delete.
    ///
    /// An age reaching back past the earliest representable instant clamps to
    /// it, so nothing qualifies.
    pub fn cutoff(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.max_age
            .map(|age| now.checked_sub_signed(age).unwrap_or(DateTime::<Utc>::MIN_UTC))
    }

    /// Decide what to delete in `groups` as of `now`.
    ///
    /// The newest `keep` versions of each artifact are never selected. With an
    /// age limit, the remaining versions are selected only when strictly older
    /// than the cutoff. When `audit` is set, the plan also carries every
    /// considered version marked keep or delete.
    pub fn plan(&self, groups: &NameGroup, now: DateTime<Utc>, audit: bool) -> Plan {
        let cutoff = self.cutoff(now);
        let mut deletions = DeletionPlan::new();
        let mut artifacts = Vec::new();

        for (name, versions) in groups {
            if !self.applies_to(name) {
                continue;
            }

            let window = versions.len().saturating_sub(self.keep.get());
            let doomed: Vec<bool> = versions
                .iter()
                .enumerate()
                .map(|(index, record)| {
                    index < window && cutoff.is_none_or(|cutoff| record.last_modified < cutoff)
                })
                .collect();

            let selected: Vec<VersionRecord> = versions
                .iter()
                .zip(&doomed)
                .filter(|(_, delete)| **delete)
                .map(|(record, _)| record.clone())
                .collect();

            if audit {
                artifacts.push(ArtifactAudit {
                    name: name.clone(),
                    entries: versions
                        .iter()
                        .zip(&doomed)
                        .map(|(record, delete)| AuditEntry {
                            record: record.clone(),
                            verdict: if *delete { Verdict::Delete } else { Verdict::Keep },
                        })
                        .collect(),
                });
            }

            if !selected.is_empty() {
                deletions.insert(name.clone(), selected);
            }
        }

        Plan {
            deletions,
            audit: audit.then(|| AuditView { artifacts }),
        }
    }
}
