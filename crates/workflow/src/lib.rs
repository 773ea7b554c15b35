//! `auditdesk-workflow` — the audit status lifecycle and who may move it.
//!
//! Pure domain: a status registry, a declarative transition rule table, and
//! an authorizer over the two. Collaborator IO stays in `auditdesk-client`;
//! rendering stays outside the workspace entirely.

pub mod audit;
pub mod authorize;
pub mod precondition;
pub mod rules;
pub mod status;

pub use audit::{Audit, EvidenceItem};
pub use authorize::{TransitionDenied, authorize_transition, is_transition_allowed};
pub use precondition::{Precondition, Preconditions};
pub use rules::{
    TransitionRule, TransitionRuleView, allowed_transitions, configured_rules, rule_for,
    transitions_from, workflow_configuration,
};
pub use status::AuditStatus;
