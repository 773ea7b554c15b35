//! Audit entity snapshot and evidence items, as served by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use auditdesk_core::{AuditId, EvidenceId, ProgramId, UserId};

use crate::AuditStatus;

/// One audit engagement, as last seen from the backend.
///
/// The console reads many fields and writes exactly one: `status`, and only
/// through a confirmed transition. Everything the backend sends that this
/// layer does not model rides along in `extra`, so re-serializing a snapshot
/// loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Audit {
    pub id: AuditId,
    pub name: String,
    pub status: AuditStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assigned_auditors: Vec<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager: Option<UserId>,
    /// Program the audit executes; evidence hangs off this, not the audit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub program_id: Option<ProgramId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Audit {
    /// Minimal snapshot; the optional fields start empty.
    pub fn new(id: AuditId, name: impl Into<String>, status: AuditStatus) -> Self {
        Self {
            id,
            name: name.into(),
            status,
            audit_type: None,
            assigned_auditors: Vec::new(),
            manager: None,
            program_id: None,
            start_date: None,
            end_date: None,
            extra: Map::new(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Stepper position of the current status; `None` once rejected.
    pub fn progress_index(&self) -> Option<usize> {
        self.status.progress_index()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Evidence
// ─────────────────────────────────────────────────────────────────────────────

/// One evidence item attached to an audit program.
///
/// Only the list's non-emptiness feeds authorization; the rest is display
/// data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvidenceItem {
    pub id: EvidenceId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
