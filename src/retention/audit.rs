// ABOUTME: Audit view listing every considered version with its keep/delete verdict.
// ABOUTME: Rendered by the CLI when a full listing is requested.

use super::aggregate::VersionRecord;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Keep,
    Delete,
}

impl Verdict {
    /// Check mark for kept versions, cross for deleted ones.
    pub fn mark(self) -> char {
        match self {
            Verdict::Keep => '\u{2714}',
            Verdict::Delete => '\u{2715}',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    #[serde(flatten)]
    pub record: VersionRecord,
    pub verdict: Verdict,
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [keep: {}]", self.record, self.verdict.mark())
    }
}

/// All versions of one artifact, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactAudit {
    pub name: String,
    pub entries: Vec<AuditEntry>,
}

impl ArtifactAudit {
    pub fn kept(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter().filter(|e| e.verdict == Verdict::Keep)
    }

    pub fn deleted(&self) -> impl Iterator<Item = &AuditEntry> {
        self.entries.iter().filter(|e| e.verdict == Verdict::Delete)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AuditView {
    pub artifacts: Vec<ArtifactAudit>,
}
