//! The page catalog and its role gates.

use serde::{Deserialize, Serialize};

use auditdesk_auth::Role;

/// Every screen the console can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageId {
    Dashboard,
    MyAudits,
    AuditPlanning,
    Fieldwork,
    Evidence,
    Findings,
    Remediation,
    Compliance,
    Reports,
    WorkflowConfiguration,
    UserAdministration,
    Comments,
}

impl PageId {
    pub const ALL: [PageId; 12] = [
        PageId::Dashboard,
        PageId::MyAudits,
        PageId::AuditPlanning,
        PageId::Fieldwork,
        PageId::Evidence,
        PageId::Findings,
        PageId::Remediation,
        PageId::Compliance,
        PageId::Reports,
        PageId::WorkflowConfiguration,
        PageId::UserAdministration,
        PageId::Comments,
    ];

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            PageId::Dashboard => "Dashboard",
            PageId::MyAudits => "My Audits",
            PageId::AuditPlanning => "Audit Planning",
            PageId::Fieldwork => "Fieldwork",
            PageId::Evidence => "Evidence",
            PageId::Findings => "Findings",
            PageId::Remediation => "Remediation",
            PageId::Compliance => "Compliance",
            PageId::Reports => "Reports",
            PageId::WorkflowConfiguration => "Workflow Configuration",
            PageId::UserAdministration => "User Administration",
            PageId::Comments => "Comments",
        }
    }

    /// Roles allowed to open the page.
    ///
    /// This gate is checked again when layouts are composed, so a layout
    /// mistake can hide a page but never expose one.
    pub fn required_roles(&self) -> &'static [Role] {
        use Role::*;
        match self {
            PageId::Dashboard => &[
                SystemAdministrator,
                ChiefAuditExecutive,
                AuditManager,
                Auditor,
                ProcessOwner,
                BoardViewer,
            ],
            PageId::MyAudits => &[Auditor],
            PageId::AuditPlanning => &[SystemAdministrator, ChiefAuditExecutive],
            PageId::Fieldwork => &[SystemAdministrator, ChiefAuditExecutive, AuditManager],
            PageId::Evidence => &[ChiefAuditExecutive, AuditManager],
            PageId::Findings => &[
                SystemAdministrator,
                ChiefAuditExecutive,
                AuditManager,
                ProcessOwner,
            ],
            PageId::Remediation => &[
                SystemAdministrator,
                ChiefAuditExecutive,
                AuditManager,
                ProcessOwner,
            ],
            PageId::Compliance => &[SystemAdministrator, ChiefAuditExecutive, BoardViewer],
            PageId::Reports => &[
                SystemAdministrator,
                ChiefAuditExecutive,
                AuditManager,
                BoardViewer,
            ],
            PageId::WorkflowConfiguration => &[SystemAdministrator, ChiefAuditExecutive],
            PageId::UserAdministration => &[SystemAdministrator, ChiefAuditExecutive],
            PageId::Comments => &[
                SystemAdministrator,
                ChiefAuditExecutive,
                AuditManager,
                Auditor,
                ProcessOwner,
            ],
        }
    }

    pub fn allows(&self, role: Role) -> bool {
        self.required_roles().contains(&role)
    }
}
