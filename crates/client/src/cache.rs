//! Last confirmed audit snapshots, keyed by id.
//!
//! The cache only ever holds server-confirmed state: the dispatcher writes
//! to it after a successful fetch or transition, never before. Screens read
//! from it so a failed submission leaves them showing exactly what the
//! backend last confirmed.

use std::collections::HashMap;
use std::sync::Mutex;

use auditdesk_core::AuditId;
use auditdesk_workflow::{Audit, AuditStatus};

#[derive(Debug, Default)]
pub struct AuditCache {
    inner: Mutex<HashMap<AuditId, Audit>>,
}

impl AuditCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone out the confirmed snapshot, if one is cached.
    pub fn get(&self, id: AuditId) -> Option<Audit> {
        self.inner.lock().unwrap().get(&id).cloned()
    }

    pub fn put(&self, audit: Audit) {
        self.inner.lock().unwrap().insert(audit.id, audit);
    }

    pub fn status_of(&self, id: AuditId) -> Option<AuditStatus> {
        self.inner.lock().unwrap().get(&id).map(|audit| audit.status)
    }

    /// Drop everything, e.g. on logout.
    pub fn clear(&self) {
        self.inner.lock().unwrap().clear();
    }
}
