//! One facade over the whole console: session, navigation, and dispatch.

use std::sync::Arc;

use auditdesk_auth::Role;
use auditdesk_core::{AuditId, ProgramId};
use auditdesk_navigation::{
    ActionId, NavChrome, NavLayout, chrome_for_width, visible_actions, visible_navigation,
};
use auditdesk_workflow::{
    Audit, AuditStatus, Preconditions, TransitionRuleView, workflow_configuration,
};

use crate::api::AuditApi;
use crate::config::ClientConfig;
use crate::dispatch::{TransitionDispatcher, TransitionError};
use crate::http::HttpAuditApi;
use crate::session::{Session, SessionStore};

/// Entry point tying a resolved [`Session`] to navigation and dispatch.
///
/// The console is built once per login; its role, and with it everything the
/// user can see or do, does not change until a new session is resolved.
pub struct AuditConsole {
    session: Session,
    dispatcher: TransitionDispatcher,
}

impl AuditConsole {
    pub fn new(session: Session, api: Arc<dyn AuditApi>) -> Self {
        let dispatcher = TransitionDispatcher::new(session.role, api);
        Self {
            session,
            dispatcher,
        }
    }

    /// Resolve the stored session and connect to the configured backend.
    ///
    /// A token from the store wins over `AUDITDESK_AUTH_TOKEN` when both are
    /// present.
    pub fn connect(store: &dyn SessionStore, config: &ClientConfig) -> Self {
        let session = Session::resolve(store);
        let token = session.token.clone().or_else(|| config.auth_token.clone());
        let api = match token {
            Some(token) => HttpAuditApi::with_token(config.api_url.clone(), token),
            None => HttpAuditApi::new(config.api_url.clone()),
        };
        Self::new(session, Arc::new(api))
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn role(&self) -> Role {
        self.session.role
    }

    /// Navigation tree for this session's role, after page gating.
    pub fn navigation(&self) -> NavLayout {
        visible_navigation(self.role())
    }

    /// Drawer below the mobile breakpoint, persistent top bar otherwise.
    pub fn chrome_for_width(&self, viewport_px: u32) -> NavChrome {
        chrome_for_width(viewport_px)
    }

    /// Workflow buttons to render on an audit's detail screen.
    pub fn actions_for(&self, audit: &Audit) -> Vec<ActionId> {
        visible_actions(self.role(), audit.status)
    }

    /// Read-only rule table for the configuration screen.
    pub fn workflow_configuration(&self) -> Vec<TransitionRuleView> {
        workflow_configuration()
    }

    pub fn dispatcher(&self) -> &TransitionDispatcher {
        &self.dispatcher
    }

    /// Fetch an audit for its detail screen, caching the snapshot.
    pub async fn open_audit(&self, audit_id: AuditId) -> Result<Audit, TransitionError> {
        self.dispatcher.refresh_audit(audit_id).await
    }

    pub async fn request_transition(
        &self,
        audit_id: AuditId,
        to: AuditStatus,
        facts: Preconditions,
    ) -> Result<Audit, TransitionError> {
        self.dispatcher.request_transition(audit_id, to, facts).await
    }

    pub async fn evidence_facts(
        &self,
        program_id: ProgramId,
    ) -> Result<Preconditions, TransitionError> {
        self.dispatcher.evidence_facts(program_id).await
    }

    pub async fn allowed_transitions(
        &self,
        audit_id: AuditId,
    ) -> Result<Vec<AuditStatus>, TransitionError> {
        self.dispatcher.reconcile_allowed_transitions(audit_id).await
    }
}
