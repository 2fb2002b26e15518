// ABOUTME: Deletion execution and per-repository cleanup orchestration.
// ABOUTME: Connects the gateway, the retention engine, and progress reporting.

mod cleaner;
mod executor;
mod observer;

pub use cleaner::{Cleaner, CleanupReport, RepositoryReport};
pub use executor::{DeletionOutcome, Executor, Mode, OutcomeStatus};
pub use observer::CleanupObserver;
