//! Role-gated dispatch of status transitions.
//!
//! Every request re-validates against the local rule table before anything
//! touches the network, so denials resolve entirely in memory. Cached state
//! is only replaced by server-confirmed snapshots: a rejected or failed
//! submission leaves the console exactly where it was.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use auditdesk_auth::Role;
use auditdesk_core::{AuditId, ProgramId};
use auditdesk_workflow::{
    Audit, AuditStatus, Precondition, Preconditions, TransitionDenied, allowed_transitions,
    authorize_transition,
};

use crate::api::{ApiError, AuditApi};
use crate::cache::AuditCache;

/// Why a requested transition did not commit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The local rule table has no row granting this role the move.
    #[error("{role} may not move an audit from {from} to {to}")]
    NotAuthorized {
        role: Role,
        from: AuditStatus,
        to: AuditStatus,
    },

    /// The rule exists but its precondition does not hold.
    #[error("precondition not met: {0}")]
    PreconditionFailed(Precondition),

    /// A submission for the same audit is still awaiting its response.
    #[error("a transition for audit {audit_id} is already pending")]
    AlreadyPending { audit_id: AuditId },

    /// The backend rejected the submission, or it never arrived.
    #[error("{0}")]
    Remote(#[from] ApiError),
}

impl From<TransitionDenied> for TransitionError {
    fn from(denied: TransitionDenied) -> Self {
        match denied {
            TransitionDenied::NotAuthorized { role, from, to } => {
                TransitionError::NotAuthorized { role, from, to }
            }
            TransitionDenied::PreconditionFailed(precondition) => {
                TransitionError::PreconditionFailed(precondition)
            }
        }
    }
}

/// Dispatches transitions for one session's role.
///
/// The role is fixed at construction; changing users means building a new
/// dispatcher from the freshly resolved session.
pub struct TransitionDispatcher {
    role: Role,
    api: Arc<dyn AuditApi>,
    cache: AuditCache,
    in_flight: Mutex<HashSet<AuditId>>,
}

/// Clears the in-flight marker once a submission settles, on every path.
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<AuditId>>,
    audit_id: AuditId,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set.lock().unwrap().remove(&self.audit_id);
    }
}

impl TransitionDispatcher {
    pub fn new(role: Role, api: Arc<dyn AuditApi>) -> Self {
        Self {
            role,
            api,
            cache: AuditCache::new(),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn cache(&self) -> &AuditCache {
        &self.cache
    }

    /// Is a submission for this audit still awaiting its response?
    ///
    /// Screens use this to disable the action buttons while a click is in
    /// flight.
    pub fn pending(&self, audit_id: AuditId) -> bool {
        self.in_flight.lock().unwrap().contains(&audit_id)
    }

    /// Fetch the latest snapshot from the backend and cache it.
    pub async fn refresh_audit(&self, audit_id: AuditId) -> Result<Audit, TransitionError> {
        let audit = self.api.fetch_audit(audit_id).await?;
        self.cache.put(audit.clone());
        Ok(audit)
    }

    /// Snapshot of the evidence facts for an audit program.
    pub async fn evidence_facts(
        &self,
        program_id: ProgramId,
    ) -> Result<Preconditions, TransitionError> {
        let items = self.api.fetch_evidence(program_id).await?;
        Ok(Preconditions::none().with_evidence_count(items.len()))
    }

    /// Re-validate and, only if the local table allows the move, submit it.
    ///
    /// Denials resolve without a single backend call. On success the cache
    /// is replaced with the server-confirmed snapshot; on failure it is left
    /// untouched.
    pub async fn request_transition(
        &self,
        audit_id: AuditId,
        to: AuditStatus,
        facts: Preconditions,
    ) -> Result<Audit, TransitionError> {
        let _guard = self.begin(audit_id)?;

        let current = match self.cache.get(audit_id) {
            Some(audit) => audit,
            None => self.refresh_audit(audit_id).await?,
        };

        authorize_transition(self.role, current.status, to, |p| facts.holds(p))?;

        tracing::info!(
            %audit_id,
            from = %current.status,
            to = %to,
            role = %self.role,
            "submitting status transition"
        );

        let updated = self
            .api
            .submit_transition(audit_id, to, self.role)
            .await
            .map_err(|err| {
                tracing::warn!(%audit_id, error = %err, "transition was not confirmed by the backend");
                TransitionError::Remote(err)
            })?;

        self.cache.put(updated.clone());
        Ok(updated)
    }

    /// Ask the backend which moves it would accept, and compare with the
    /// local table.
    ///
    /// The server's answer is returned as-is; a mismatch with the local
    /// table is logged, not healed, since it means the two rule tables have
    /// drifted and someone should look.
    pub async fn reconcile_allowed_transitions(
        &self,
        audit_id: AuditId,
    ) -> Result<Vec<AuditStatus>, TransitionError> {
        let server = self.api.allowed_transitions(audit_id).await?;

        if let Some(status) = self.cache.status_of(audit_id) {
            let local = allowed_transitions(self.role, status);
            let server_set: HashSet<AuditStatus> = server.iter().copied().collect();
            let local_set: HashSet<AuditStatus> = local.iter().copied().collect();
            if server_set != local_set {
                tracing::warn!(
                    %audit_id,
                    role = %self.role,
                    status = %status,
                    local = ?local,
                    server = ?server,
                    "allowed transitions diverge from the backend"
                );
            }
        }

        Ok(server)
    }

    fn begin(&self, audit_id: AuditId) -> Result<InFlightGuard<'_>, TransitionError> {
        let mut in_flight = self.in_flight.lock().unwrap();
        if !in_flight.insert(audit_id) {
            tracing::debug!(%audit_id, "duplicate submission; one is already pending");
            return Err(TransitionError::AlreadyPending { audit_id });
        }
        Ok(InFlightGuard {
            set: &self.in_flight,
            audit_id,
        })
    }
}
