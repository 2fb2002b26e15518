// ABOUTME: Retention decision engine: aggregation, policy, and audit view.
// ABOUTME: Pure computation over in-memory listings; no I/O happens here.

mod aggregate;
mod audit;
mod policy;

pub use aggregate::{AggregateError, NameGroup, VersionRecord, aggregate};
pub use audit::{ArtifactAudit, AuditEntry, AuditView, Verdict};
pub use policy::{DeletionPlan, Plan, RetentionPolicy};
