//! The closed set of console roles.

use serde::{Deserialize, Serialize};

/// Role a session acts under.
///
/// The backend stores role names as free-form strings; this layer works only
/// with the closed set below. Mapping raw strings into the set is the
/// classifier's job (see [`crate::classify_role`]); past that boundary a role
/// is always one of these variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "System Administrator")]
    SystemAdministrator,
    #[serde(rename = "Chief Audit Executive")]
    ChiefAuditExecutive,
    #[serde(rename = "Audit Manager")]
    AuditManager,
    #[serde(rename = "Auditor")]
    Auditor,
    #[serde(rename = "Process Owner")]
    ProcessOwner,
    #[serde(rename = "Board Viewer")]
    BoardViewer,
}

impl Role {
    /// Every role, in seniority order. Useful for exhaustive policy checks.
    pub const ALL: [Role; 6] = [
        Role::SystemAdministrator,
        Role::ChiefAuditExecutive,
        Role::AuditManager,
        Role::Auditor,
        Role::ProcessOwner,
        Role::BoardViewer,
    ];

    /// Canonical display spelling (matches the wire encoding).
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SystemAdministrator => "System Administrator",
            Role::ChiefAuditExecutive => "Chief Audit Executive",
            Role::AuditManager => "Audit Manager",
            Role::Auditor => "Auditor",
            Role::ProcessOwner => "Process Owner",
            Role::BoardViewer => "Board Viewer",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
