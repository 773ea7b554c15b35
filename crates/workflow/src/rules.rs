//! The transition rule table.
//!
//! One table owns the entire workflow: which status moves to which, who may
//! perform the move, and which precondition gates it. Screens, menus and the
//! dispatcher all query this table; none of them carry a copy.

use serde::Serialize;

use auditdesk_auth::Role;

use crate::{AuditStatus, Precondition};

/// One edge of the workflow graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    pub from: AuditStatus,
    pub to: AuditStatus,
    /// Roles allowed to perform this move. Anything not listed is denied.
    pub roles: &'static [Role],
    pub precondition: Option<Precondition>,
}

/// The workflow, in lifecycle order.
///
/// `Planned` is the sole entry point, `Closed` the primary sink, `Rejected`
/// the short rejection branch off `Planned`. The invariants are pinned by
/// tests below.
pub const TRANSITION_RULES: [TransitionRule; 10] = [
    TransitionRule {
        from: AuditStatus::Planned,
        to: AuditStatus::Approved,
        roles: &[Role::ChiefAuditExecutive],
        precondition: None,
    },
    TransitionRule {
        from: AuditStatus::Planned,
        to: AuditStatus::Rejected,
        roles: &[Role::ChiefAuditExecutive],
        precondition: None,
    },
    TransitionRule {
        from: AuditStatus::Approved,
        to: AuditStatus::InProgress,
        roles: &[Role::Auditor, Role::AuditManager],
        precondition: None,
    },
    TransitionRule {
        from: AuditStatus::InProgress,
        to: AuditStatus::UnderReview,
        roles: &[Role::Auditor],
        precondition: Some(Precondition::EvidenceAttached),
    },
    TransitionRule {
        from: AuditStatus::UnderReview,
        to: AuditStatus::ExecutionFinished,
        roles: &[Role::AuditManager],
        precondition: None,
    },
    TransitionRule {
        from: AuditStatus::UnderReview,
        to: AuditStatus::Finalized,
        roles: &[Role::ChiefAuditExecutive],
        precondition: None,
    },
    TransitionRule {
        from: AuditStatus::ExecutionFinished,
        to: AuditStatus::Finalized,
        roles: &[Role::ChiefAuditExecutive],
        precondition: None,
    },
    TransitionRule {
        from: AuditStatus::Finalized,
        to: AuditStatus::ReviewedByOwner,
        roles: &[Role::ProcessOwner],
        precondition: None,
    },
    TransitionRule {
        from: AuditStatus::Finalized,
        to: AuditStatus::Closed,
        roles: &[Role::ChiefAuditExecutive],
        precondition: None,
    },
    TransitionRule {
        from: AuditStatus::ReviewedByOwner,
        to: AuditStatus::Closed,
        roles: &[Role::ChiefAuditExecutive],
        precondition: None,
    },
];

/// The full rule table, for display surfaces (read-only).
pub fn configured_rules() -> &'static [TransitionRule] {
    &TRANSITION_RULES
}

/// Look up the rule for a `(from, to)` edge, if the workflow has one.
pub fn rule_for(from: AuditStatus, to: AuditStatus) -> Option<&'static TransitionRule> {
    TRANSITION_RULES.iter().find(|r| r.from == from && r.to == to)
}

/// Statuses reachable from `from` in one step, regardless of role.
pub fn transitions_from(from: AuditStatus) -> Vec<AuditStatus> {
    TRANSITION_RULES
        .iter()
        .filter(|r| r.from == from)
        .map(|r| r.to)
        .collect()
}

/// Statuses the given role may move an audit in `from` to.
pub fn allowed_transitions(role: Role, from: AuditStatus) -> Vec<AuditStatus> {
    TRANSITION_RULES
        .iter()
        .filter(|r| r.from == from && r.roles.contains(&role))
        .map(|r| r.to)
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Workflow Configuration view
// ─────────────────────────────────────────────────────────────────────────────

/// Serializable rendering of one rule, for the workflow-configuration screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRuleView {
    pub from: AuditStatus,
    pub to: AuditStatus,
    pub roles: Vec<Role>,
    pub requires_evidence: bool,
}

/// The whole table as display rows, in lifecycle order.
pub fn workflow_configuration() -> Vec<TransitionRuleView> {
    TRANSITION_RULES
        .iter()
        .map(|r| TransitionRuleView {
            from: r.from,
            to: r.to,
            roles: r.roles.to_vec(),
            requires_evidence: r.precondition == Some(Precondition::EvidenceAttached),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn planned_is_the_unique_source() {
        for rule in configured_rules() {
            assert_ne!(rule.to, AuditStatus::Planned, "no rule may target Planned");
        }
        assert!(!transitions_from(AuditStatus::Planned).is_empty());
    }

    #[test]
    fn terminal_statuses_have_no_outgoing_rules() {
        for status in AuditStatus::ALL {
            if status.is_terminal() {
                assert!(
                    transitions_from(status).is_empty(),
                    "terminal status {status} must not have outgoing rules"
                );
            }
        }
    }

    #[test]
    fn rejected_is_reachable_only_from_planned() {
        for rule in configured_rules() {
            if rule.to == AuditStatus::Rejected {
                assert_eq!(rule.from, AuditStatus::Planned);
            }
        }
    }

    #[test]
    fn every_status_is_reachable_from_planned() {
        let mut seen: HashSet<AuditStatus> = HashSet::from([AuditStatus::Planned]);
        let mut frontier = vec![AuditStatus::Planned];
        while let Some(status) = frontier.pop() {
            for next in transitions_from(status) {
                if seen.insert(next) {
                    frontier.push(next);
                }
            }
        }
        for status in AuditStatus::ALL {
            assert!(seen.contains(&status), "{status} unreachable from Planned");
        }
    }

    #[test]
    fn the_graph_is_acyclic() {
        // Walk forward from every status; a cycle would revisit its origin.
        for origin in AuditStatus::ALL {
            let mut seen = HashSet::new();
            let mut frontier = transitions_from(origin);
            while let Some(status) = frontier.pop() {
                assert_ne!(status, origin, "cycle through {origin}");
                if seen.insert(status) {
                    frontier.extend(transitions_from(status));
                }
            }
        }
    }

    #[test]
    fn every_rule_names_at_least_one_role() {
        for rule in configured_rules() {
            assert!(
                !rule.roles.is_empty(),
                "rule {} -> {} grants no role",
                rule.from,
                rule.to
            );
        }
    }

    #[test]
    fn evidence_gate_sits_on_fieldwork_submission_only() {
        for rule in configured_rules() {
            let gated = rule.precondition == Some(Precondition::EvidenceAttached);
            let is_submission =
                rule.from == AuditStatus::InProgress && rule.to == AuditStatus::UnderReview;
            assert_eq!(gated, is_submission, "rule {} -> {}", rule.from, rule.to);
        }
    }

    #[test]
    fn allowed_transitions_filters_by_role() {
        assert_eq!(
            allowed_transitions(Role::ChiefAuditExecutive, AuditStatus::Planned),
            vec![AuditStatus::Approved, AuditStatus::Rejected]
        );
        assert_eq!(
            allowed_transitions(Role::Auditor, AuditStatus::Planned),
            Vec::<AuditStatus>::new()
        );
        assert_eq!(
            allowed_transitions(Role::ProcessOwner, AuditStatus::Finalized),
            vec![AuditStatus::ReviewedByOwner]
        );
    }

    #[test]
    fn configuration_view_mirrors_the_table() {
        let view = workflow_configuration();
        assert_eq!(view.len(), configured_rules().len());
        let gated: Vec<_> = view.iter().filter(|r| r.requires_evidence).collect();
        assert_eq!(gated.len(), 1);
        assert_eq!(gated[0].from, AuditStatus::InProgress);
        assert_eq!(gated[0].to, AuditStatus::UnderReview);
    }
}
