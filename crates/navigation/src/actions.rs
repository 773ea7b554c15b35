//! Workflow actions and their per-role visibility.
//!
//! An action is a button that requests one status transition. Visibility is
//! answered by the workflow rule table — this module maps actions to target
//! statuses and carries their display strings, nothing more. Adding a rule to
//! the table makes the matching button appear; there is no second list to
//! keep in sync.

use serde::{Deserialize, Serialize};

use auditdesk_auth::Role;
use auditdesk_workflow::{AuditStatus, is_transition_allowed};

/// Every transition-requesting control in the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionId {
    ApprovePlan,
    RejectPlan,
    StartFieldwork,
    SubmitForReview,
    FinishExecution,
    FinalizeAudit,
    MarkOwnerReviewed,
    CloseAudit,
}

impl ActionId {
    /// Every action, in lifecycle order.
    pub const ALL: [ActionId; 8] = [
        ActionId::ApprovePlan,
        ActionId::RejectPlan,
        ActionId::StartFieldwork,
        ActionId::SubmitForReview,
        ActionId::FinishExecution,
        ActionId::FinalizeAudit,
        ActionId::MarkOwnerReviewed,
        ActionId::CloseAudit,
    ];

    /// The status this action requests.
    pub fn target(&self) -> AuditStatus {
        match self {
            ActionId::ApprovePlan => AuditStatus::Approved,
            ActionId::RejectPlan => AuditStatus::Rejected,
            ActionId::StartFieldwork => AuditStatus::InProgress,
            ActionId::SubmitForReview => AuditStatus::UnderReview,
            ActionId::FinishExecution => AuditStatus::ExecutionFinished,
            ActionId::FinalizeAudit => AuditStatus::Finalized,
            ActionId::MarkOwnerReviewed => AuditStatus::ReviewedByOwner,
            ActionId::CloseAudit => AuditStatus::Closed,
        }
    }

    /// The action requesting the given target status, if any.
    ///
    /// Targets are unique per action; only `Planned` has no action, because
    /// nothing transitions into it.
    pub fn for_target(to: AuditStatus) -> Option<ActionId> {
        Self::ALL.into_iter().find(|a| a.target() == to)
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            ActionId::ApprovePlan => "Approve Plan",
            ActionId::RejectPlan => "Reject Plan",
            ActionId::StartFieldwork => "Start Fieldwork",
            ActionId::SubmitForReview => "Submit for Review",
            ActionId::FinishExecution => "Mark Execution Finished",
            ActionId::FinalizeAudit => "Finalize Audit",
            ActionId::MarkOwnerReviewed => "Mark Reviewed by Owner",
            ActionId::CloseAudit => "Close Audit",
        }
    }

    /// Prompt shown by the confirm dialog before the transition is submitted.
    pub fn confirmation_prompt(&self) -> &'static str {
        match self {
            ActionId::ApprovePlan => "Approve this audit plan?",
            ActionId::RejectPlan => "Reject this audit plan? The audit cannot be reopened.",
            ActionId::StartFieldwork => "Start fieldwork for this audit?",
            ActionId::SubmitForReview => "Submit this audit for review?",
            ActionId::FinishExecution => "Mark execution as finished?",
            ActionId::FinalizeAudit => "Finalize this audit?",
            ActionId::MarkOwnerReviewed => "Confirm the process owner has reviewed this audit?",
            ActionId::CloseAudit => "Close this audit? Closed audits cannot be reopened.",
        }
    }
}

/// The actions the role may trigger on an audit in `status`.
///
/// Exactly the rule table's answer, rendered as buttons: an action appears
/// precisely when `(role, status, target)` is a granted edge. An unmet
/// precondition does not hide the button; the click explains the denial.
pub fn visible_actions(role: Role, status: AuditStatus) -> Vec<ActionId> {
    ActionId::ALL
        .into_iter()
        .filter(|action| is_transition_allowed(role, status, action.target()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditdesk_workflow::allowed_transitions;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn executive_on_planned_sees_approve_and_reject_only() {
        let actions = visible_actions(Role::ChiefAuditExecutive, AuditStatus::Planned);
        assert_eq!(actions, vec![ActionId::ApprovePlan, ActionId::RejectPlan]);
        assert!(!actions.contains(&ActionId::CloseAudit));
    }

    #[test]
    fn auditor_on_planned_sees_nothing() {
        assert!(visible_actions(Role::Auditor, AuditStatus::Planned).is_empty());
    }

    #[test]
    fn auditor_can_start_and_submit_fieldwork() {
        assert_eq!(
            visible_actions(Role::Auditor, AuditStatus::Approved),
            vec![ActionId::StartFieldwork]
        );
        assert_eq!(
            visible_actions(Role::Auditor, AuditStatus::InProgress),
            vec![ActionId::SubmitForReview]
        );
    }

    #[test]
    fn terminal_statuses_offer_no_actions() {
        for role in Role::ALL {
            for status in [AuditStatus::Closed, AuditStatus::Rejected] {
                assert!(visible_actions(role, status).is_empty(), "{role} {status}");
            }
        }
    }

    #[test]
    fn every_target_except_planned_has_exactly_one_action() {
        assert_eq!(ActionId::for_target(AuditStatus::Planned), None);
        for status in AuditStatus::ALL {
            if status == AuditStatus::Planned {
                continue;
            }
            let action = ActionId::for_target(status).unwrap();
            assert_eq!(action.target(), status);
        }
    }

    fn any_role() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    fn any_status() -> impl Strategy<Value = AuditStatus> {
        prop::sample::select(AuditStatus::ALL.to_vec())
    }

    proptest! {
        /// Button targets and the rule table's allowed set are the same set,
        /// for every role and status.
        #[test]
        fn buttons_mirror_the_rule_table(role in any_role(), status in any_status()) {
            let targets: HashSet<AuditStatus> = visible_actions(role, status)
                .into_iter()
                .map(|a| a.target())
                .collect();
            let allowed: HashSet<AuditStatus> =
                allowed_transitions(role, status).into_iter().collect();
            prop_assert_eq!(targets, allowed);
        }
    }
}
