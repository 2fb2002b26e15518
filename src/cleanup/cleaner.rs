// ABOUTME: Cleanup orchestration across every hosted repository of the target format.
// ABOUTME: Lists, aggregates, plans, and executes one repository at a time.

use super::executor::{DeletionOutcome, Executor, Mode, OutcomeStatus};
use super::observer::CleanupObserver;
use crate::error::{Error, Result};
use crate::nexus::{Gateway, Repository, collect_items};
use crate::retention::{RetentionPolicy, aggregate};
use crate::types::RepositoryName;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeSet;

/// Totals for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryReport {
    pub repository: RepositoryName,
    pub artifacts: usize,
    pub versions: usize,
    pub outcomes: Vec<DeletionOutcome>,
}

impl RepositoryReport {
    pub fn count(&self, status: OutcomeStatus) -> usize {
        self.outcomes.iter().filter(|o| o.status == status).count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub repositories: Vec<RepositoryReport>,
}

impl CleanupReport {
    pub fn count(&self, status: OutcomeStatus) -> usize {
        self.repositories.iter().map(|r| r.count(status)).sum()
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &DeletionOutcome> {
        self.repositories.iter().flat_map(|r| r.outcomes.iter())
    }

    pub fn has_failures(&self) -> bool {
        self.count(OutcomeStatus::Failed) > 0
    }
}

/// Applies one retention policy to a Nexus instance.
pub struct Cleaner<'a, G: ?Sized> {
    gateway: &'a G,
    policy: RetentionPolicy,
    format: String,
    mode: Mode,
    full_info: bool,
    only: Option<BTreeSet<String>>,
}

impl<'a, G> Cleaner<'a, G>
where
    G: Gateway + ?Sized,
{
    pub fn new(gateway: &'a G, policy: RetentionPolicy) -> Self {
        Self {
            gateway,
            policy,
            format: "docker".to_string(),
            mode: Mode::Live,
            full_info: false,
            only: None,
        }
    }

    /// Repository format to clean (`docker` unless set).
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Report every considered version with its verdict before deleting.
    pub fn full_info(mut self, full_info: bool) -> Self {
        self.full_info = full_info;
        self
    }

    /// Restrict the run to the named repositories.
    pub fn only<I, S>(mut self, repositories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: BTreeSet<String> = repositories.into_iter().map(Into::into).collect();
        self.only = (!names.is_empty()).then_some(names);
        self
    }

    /// Hosted repositories of the configured format, in server order.
    ///
    /// # Errors
    ///
    /// Fails when the listing fails, or when a repository requested with
    /// [`Cleaner::only`] is not among them.
    pub async fn repositories(&self) -> Result<Vec<Repository>> {
        let cleanable: Vec<Repository> = self
            .gateway
            .list_repositories()
            .await?
            .into_iter()
            .filter(|r| r.is_cleanable(&self.format))
            .collect();

        let Some(only) = &self.only else {
            return Ok(cleanable);
        };

        if let Some(missing) = only
            .iter()
            .find(|name| !cleanable.iter().any(|r| r.name.as_str() == name.as_str()))
        {
            return Err(Error::UnknownRepository {
                name: missing.clone(),
                format: self.format.clone(),
            });
        }

        Ok(cleanable
            .into_iter()
            .filter(|r| only.contains(r.name.as_str()))
            .collect())
    }

    /// Clean a single repository as of `now`.
    ///
    /// # Errors
    ///
    /// Listing failures and malformed listings abort before anything is
    /// deleted. Failed deletions are reported in the outcome list instead.
    pub async fn clean_repository(
        &self,
        repository: &RepositoryName,
        now: DateTime<Utc>,
        observer: &mut dyn CleanupObserver,
    ) -> Result<RepositoryReport> {
        observer.repository_started(repository);

        let items = collect_items(self.gateway, repository).await?;
        let groups = aggregate(items).map_err(|source| Error::MalformedListing {
            repository: repository.to_string(),
            source,
        })?;

        let plan = self.policy.plan(&groups, now, self.full_info);
        tracing::debug!(
            repository = %repository,
            artifacts = groups.len(),
            to_delete = plan.len(),
            "planned cleanup"
        );

        if let Some(view) = &plan.audit {
            observer.audit(repository, view);
        }

        let outcomes = Executor::new(self.gateway, self.mode)
            .execute(repository, &plan.deletions, observer)
            .await;

        Ok(RepositoryReport {
            repository: repository.clone(),
            artifacts: groups.len(),
            versions: groups.values().map(Vec::len).sum(),
            outcomes,
        })
    }

    /// Clean every selected repository in turn. The first listing failure
    /// stops the run.
    pub async fn run(
        &self,
        now: DateTime<Utc>,
        observer: &mut dyn CleanupObserver,
    ) -> Result<CleanupReport> {
        let mut report = CleanupReport::default();

        for repository in self.repositories().await? {
            let repo_report = self.clean_repository(&repository.name, now, observer).await?;
            report.repositories.push(repo_report);
        }

        Ok(report)
    }
}
