//! Transition authorization.

use thiserror::Error;

use auditdesk_auth::Role;

use crate::{AuditStatus, Precondition, rules};

/// Why a transition was denied.
///
/// The two variants are deliberately distinct all the way up to the UI: a
/// role problem and a missing precondition call for different explanations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDenied {
    #[error("{role} may not move an audit from {from} to {to}")]
    NotAuthorized {
        role: Role,
        from: AuditStatus,
        to: AuditStatus,
    },

    #[error("precondition not met: {0}")]
    PreconditionFailed(Precondition),
}

/// Is `(role, from, to)` an edge of the rule table?
///
/// Role gate only; preconditions deliberately do not affect this answer.
/// Rendering uses it to decide whether a control exists at all, and a control
/// whose precondition is unmet still renders — the click explains the denial.
pub fn is_transition_allowed(role: Role, from: AuditStatus, to: AuditStatus) -> bool {
    rules::rule_for(from, to).is_some_and(|rule| rule.roles.contains(&role))
}

/// Full transition decision.
///
/// - No IO
/// - No panics
/// - Total over all `(role, from, to)` triples; anything outside the rule
///   table is denied, which also covers every move out of a terminal status.
///
/// `check` evaluates the rule's precondition (if any) against facts the
/// caller already holds. It is only invoked once the role gate has passed.
pub fn authorize_transition(
    role: Role,
    from: AuditStatus,
    to: AuditStatus,
    check: impl Fn(Precondition) -> bool,
) -> Result<(), TransitionDenied> {
    let Some(rule) = rules::rule_for(from, to) else {
        tracing::debug!(%role, %from, %to, "transition not in rule table");
        return Err(TransitionDenied::NotAuthorized { role, from, to });
    };

    if !rule.roles.contains(&role) {
        tracing::debug!(%role, %from, %to, "role not granted for transition");
        return Err(TransitionDenied::NotAuthorized { role, from, to });
    }

    if let Some(precondition) = rule.precondition {
        if !check(precondition) {
            tracing::debug!(%role, %from, %to, %precondition, "transition precondition unmet");
            return Err(TransitionDenied::PreconditionFailed(precondition));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Preconditions;
    use proptest::prelude::*;

    #[test]
    fn every_rule_row_authorizes_its_roles() {
        for rule in rules::configured_rules() {
            for role in rule.roles {
                assert!(
                    is_transition_allowed(*role, rule.from, rule.to),
                    "{role} {} -> {}",
                    rule.from,
                    rule.to
                );
                let result = authorize_transition(*role, rule.from, rule.to, |_| true);
                assert_eq!(result, Ok(()));
            }
        }
    }

    #[test]
    fn everything_outside_the_table_is_denied() {
        for role in Role::ALL {
            for from in AuditStatus::ALL {
                for to in AuditStatus::ALL {
                    let in_table = rules::rule_for(from, to)
                        .is_some_and(|rule| rule.roles.contains(&role));
                    if in_table {
                        continue;
                    }
                    let err = authorize_transition(role, from, to, |_| true).unwrap_err();
                    assert_eq!(err, TransitionDenied::NotAuthorized { role, from, to });
                }
            }
        }
    }

    #[test]
    fn terminal_statuses_admit_no_moves() {
        for role in Role::ALL {
            for to in AuditStatus::ALL {
                for from in [AuditStatus::Closed, AuditStatus::Rejected] {
                    assert!(!is_transition_allowed(role, from, to));
                }
            }
        }
    }

    #[test]
    fn board_viewer_and_admin_hold_no_transition_grants() {
        // Neither role appears in the table: the admin works through
        // configuration screens, the board viewer is read-only.
        for role in [Role::SystemAdministrator, Role::BoardViewer] {
            for from in AuditStatus::ALL {
                assert!(rules::allowed_transitions(role, from).is_empty(), "{role}");
            }
        }
    }

    #[test]
    fn submission_without_evidence_fails_the_precondition() {
        let facts = Preconditions::none();
        let err = authorize_transition(
            Role::Auditor,
            AuditStatus::InProgress,
            AuditStatus::UnderReview,
            |p| facts.holds(p),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TransitionDenied::PreconditionFailed(Precondition::EvidenceAttached)
        );
    }

    #[test]
    fn submission_with_evidence_passes() {
        let facts = Preconditions::none().with_evidence_count(1);
        let result = authorize_transition(
            Role::Auditor,
            AuditStatus::InProgress,
            AuditStatus::UnderReview,
            |p| facts.holds(p),
        );
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn role_gate_is_checked_before_the_precondition() {
        // A manager may not submit fieldwork at all; the denial must be the
        // role, not the missing evidence.
        let err = authorize_transition(
            Role::AuditManager,
            AuditStatus::InProgress,
            AuditStatus::UnderReview,
            |_| false,
        )
        .unwrap_err();
        assert!(matches!(err, TransitionDenied::NotAuthorized { .. }));
    }

    fn any_role() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::ALL.to_vec())
    }

    fn any_status() -> impl Strategy<Value = AuditStatus> {
        prop::sample::select(AuditStatus::ALL.to_vec())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(512))]

        /// With a vacuous precondition check, the full decision agrees with
        /// plain table membership on every triple.
        #[test]
        fn decision_agrees_with_table_membership(
            role in any_role(),
            from in any_status(),
            to in any_status(),
        ) {
            let table = is_transition_allowed(role, from, to);
            let decision = authorize_transition(role, from, to, |_| true);
            prop_assert_eq!(table, decision.is_ok());
        }

        /// A failing precondition check can only ever tighten the decision,
        /// and only on the evidence-gated edge.
        #[test]
        fn failing_check_only_affects_gated_edges(
            role in any_role(),
            from in any_status(),
            to in any_status(),
        ) {
            let open = authorize_transition(role, from, to, |_| true);
            let strict = authorize_transition(role, from, to, |_| false);
            match (open, strict) {
                (Ok(()), Err(TransitionDenied::PreconditionFailed(_))) => {
                    prop_assert!(rules::rule_for(from, to)
                        .is_some_and(|r| r.precondition.is_some()));
                }
                (open, strict) => prop_assert_eq!(open, strict),
            }
        }
    }
}
