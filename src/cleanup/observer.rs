// ABOUTME: Hook for reporting cleanup progress as it happens.
// ABOUTME: The CLI's Output implements it; tests record events with it.

use super::executor::DeletionOutcome;
use crate::retention::AuditView;
use crate::types::RepositoryName;

/// Receives progress events from a cleanup run. Every method defaults to a no-op.
pub trait CleanupObserver {
    fn repository_started(&mut self, _repository: &RepositoryName) {}

    fn audit(&mut self, _repository: &RepositoryName, _view: &AuditView) {}

    fn outcome(&mut self, _outcome: &DeletionOutcome) {}
}

impl CleanupObserver for () {}
