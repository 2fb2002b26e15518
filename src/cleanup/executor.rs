// ABOUTME: Deletion executor issuing one delete call per planned version.
// ABOUTME: Failures are recorded per item and never abort the batch.

use super::observer::CleanupObserver;
use crate::nexus::Gateway;
use crate::retention::{DeletionPlan, VersionRecord};
use crate::types::RepositoryName;
use serde::Serialize;
use std::fmt;

/// Whether deletions are actually sent to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Compute and report, but never call the delete endpoint.
    DryRun,
    #[default]
    Live,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Deleted,
    DryRun,
    Failed,
}

impl fmt::Display for OutcomeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutcomeStatus::Deleted => "deleted",
            OutcomeStatus::DryRun => "dry run",
            OutcomeStatus::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// What happened to one planned version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletionOutcome {
    pub repository: RepositoryName,
    #[serde(flatten)]
    pub record: VersionRecord,
    pub status: OutcomeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl fmt::Display for DeletionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "deleting {} .. {}", self.record, self.status)?;
        if let Some(error) = &self.error {
            write!(f, " ({error})")?;
        }
        Ok(())
    }
}

pub struct Executor<'a, G: ?Sized> {
    gateway: &'a G,
    mode: Mode,
}

impl<'a, G> Executor<'a, G>
where
    G: Gateway + ?Sized,
{
    pub fn new(gateway: &'a G, mode: Mode) -> Self {
        Self { gateway, mode }
    }

    /// Delete a single version by its handle.
    pub async fn delete(
        &self,
        repository: &RepositoryName,
        record: &VersionRecord,
    ) -> DeletionOutcome {
        let (status, error) = match self.mode {
            Mode::DryRun => (OutcomeStatus::DryRun, None),
            Mode::Live => match self.gateway.delete_asset(&record.handle).await {
                Ok(()) => (OutcomeStatus::Deleted, None),
                Err(e) => (OutcomeStatus::Failed, Some(e.to_string())),
            },
        };

        match &error {
            None => tracing::info!(
                repository = %repository,
                artifact = %record.name,
                version = %record.version,
                last_modified = %record.last_modified.to_rfc3339(),
                status = %status,
                "{record}: {status}"
            ),
            Some(error) => tracing::warn!(
                repository = %repository,
                artifact = %record.name,
                version = %record.version,
                last_modified = %record.last_modified.to_rfc3339(),
                status = %status,
                error = %error,
                "failed to delete {record}"
            ),
        }

        DeletionOutcome {
            repository: repository.clone(),
            record: record.clone(),
            status,
            error,
        }
    }

    /// Work through `plan` artifact by artifact, oldest version first.
    pub async fn execute(
        &self,
        repository: &RepositoryName,
        plan: &DeletionPlan,
        observer: &mut dyn CleanupObserver,
    ) -> Vec<DeletionOutcome> {
        let mut outcomes = Vec::with_capacity(plan.values().map(Vec::len).sum());

        for records in plan.values() {
            for record in records {
                let outcome = self.delete(repository, record).await;
                observer.outcome(&outcome);
                outcomes.push(outcome);
            }
        }

        outcomes
    }
}
