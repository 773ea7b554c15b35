//! Audit status lifecycle.

use serde::{Deserialize, Serialize};

/// Audit engagement status.
///
/// The wire encoding uses the backend's display literals (`"In Progress"`,
/// not `in_progress`); every screen, payload and comparison goes through this
/// enum rather than the strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditStatus {
    Planned,
    Approved,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "Execution Finished")]
    ExecutionFinished,
    Finalized,
    #[serde(rename = "Reviewed by Owner")]
    ReviewedByOwner,
    Closed,
    Rejected,
}

impl AuditStatus {
    /// Every status, primary sequence first, then the rejection branch.
    pub const ALL: [AuditStatus; 9] = [
        AuditStatus::Planned,
        AuditStatus::Approved,
        AuditStatus::InProgress,
        AuditStatus::UnderReview,
        AuditStatus::ExecutionFinished,
        AuditStatus::Finalized,
        AuditStatus::ReviewedByOwner,
        AuditStatus::Closed,
        AuditStatus::Rejected,
    ];

    /// The ordered primary sequence, as rendered by progress steppers.
    ///
    /// `Rejected` is not part of the progression; it branches off `Planned`.
    pub const fn progression() -> &'static [AuditStatus; 8] {
        &[
            AuditStatus::Planned,
            AuditStatus::Approved,
            AuditStatus::InProgress,
            AuditStatus::UnderReview,
            AuditStatus::ExecutionFinished,
            AuditStatus::Finalized,
            AuditStatus::ReviewedByOwner,
            AuditStatus::Closed,
        ]
    }

    /// Zero-based position in the primary sequence; `None` for `Rejected`.
    pub fn progress_index(&self) -> Option<usize> {
        Self::progression().iter().position(|s| s == self)
    }

    /// Terminal statuses admit no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AuditStatus::Closed | AuditStatus::Rejected)
    }

    /// Canonical display spelling (matches the wire encoding).
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Planned => "Planned",
            AuditStatus::Approved => "Approved",
            AuditStatus::InProgress => "In Progress",
            AuditStatus::UnderReview => "Under Review",
            AuditStatus::ExecutionFinished => "Execution Finished",
            AuditStatus::Finalized => "Finalized",
            AuditStatus::ReviewedByOwner => "Reviewed by Owner",
            AuditStatus::Closed => "Closed",
            AuditStatus::Rejected => "Rejected",
        }
    }
}

impl core::fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
