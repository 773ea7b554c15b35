//! Transition preconditions and the local facts that satisfy them.

use serde::{Deserialize, Serialize};

/// A fact that must hold before a gated transition may run.
///
/// Preconditions are declared in the rule table; *evaluating* them is the
/// caller's job, supplied to the authorizer as a predicate over this enum.
/// That keeps evidence fetching (and whatever future facts get added) out of
/// the policy check itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Precondition {
    /// At least one evidence item is attached to the audit's program.
    EvidenceAttached,
}

impl core::fmt::Display for Precondition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Precondition::EvidenceAttached => {
                f.write_str("at least one evidence item must be attached")
            }
        }
    }
}

/// Snapshot of the local facts a caller already holds.
///
/// Assembled from state the screen has in hand (the evidence list it is
/// displaying); checking it never performs IO.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preconditions {
    evidence_items: usize,
}

impl Preconditions {
    /// A snapshot in which nothing is satisfied.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_evidence_count(mut self, count: usize) -> Self {
        self.evidence_items = count;
        self
    }

    /// Does the snapshot satisfy the given precondition?
    pub fn holds(&self, precondition: Precondition) -> bool {
        match precondition {
            Precondition::EvidenceAttached => self.evidence_items > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_snapshot_satisfies_nothing() {
        assert!(!Preconditions::none().holds(Precondition::EvidenceAttached));
    }

    #[test]
    fn evidence_count_satisfies_attachment() {
        let facts = Preconditions::none().with_evidence_count(3);
        assert!(facts.holds(Precondition::EvidenceAttached));
    }
}
