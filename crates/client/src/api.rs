//! The backend surface the console talks to.
//!
//! [`AuditApi`] is the seam between the workflow screens and the REST
//! backend. Production code goes through [`HttpAuditApi`](crate::http::HttpAuditApi);
//! tests substitute spies or a stub server behind the same trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use auditdesk_auth::Role;
use auditdesk_core::{AuditId, ProgramId};
use auditdesk_workflow::{Audit, AuditStatus, EvidenceItem};

/// Errors surfaced by backend calls.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("API error ({0}): {1}")]
    Api(u16, String),

    /// The response arrived but its body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Body of `POST /audits/{id}/transition`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    pub to_status: AuditStatus,
    pub user_role: Role,
}

/// Remote operations the console needs from the audit service.
#[async_trait]
pub trait AuditApi: Send + Sync {
    /// `GET /audits/{id}`.
    async fn fetch_audit(&self, id: AuditId) -> Result<Audit, ApiError>;

    /// `POST /audits/{id}/transition`; returns the updated snapshot.
    async fn submit_transition(
        &self,
        id: AuditId,
        to: AuditStatus,
        role: Role,
    ) -> Result<Audit, ApiError>;

    /// `GET /audits/{id}/allowed-transitions`.
    async fn allowed_transitions(&self, id: AuditId) -> Result<Vec<AuditStatus>, ApiError>;

    /// `GET /audit-programs/{programId}/evidence`.
    async fn fetch_evidence(&self, program_id: ProgramId) -> Result<Vec<EvidenceItem>, ApiError>;
}
