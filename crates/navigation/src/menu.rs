//! Per-role navigation layouts and viewport chrome.
//!
//! Each role gets its own named layout — a deliberately distinct construction
//! per role, not one master menu filtered down. An auditor's flat three-item
//! menu and the executive's grouped tree are different shapes, and keeping
//! them separate keeps each one readable. The page-level role gate is applied
//! on top when a layout is composed, so the two mechanisms back each other.

use serde::Serialize;

use auditdesk_auth::Role;

use crate::PageId;

/// One menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub page: PageId,
    pub label: &'static str,
}

impl NavEntry {
    fn page(page: PageId) -> Self {
        Self {
            page,
            label: page.label(),
        }
    }
}

/// A labelled submenu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavGroup {
    pub label: &'static str,
    pub entries: Vec<NavEntry>,
}

/// The navigation shape a role sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "items")]
pub enum NavLayout {
    /// Top-level items, no grouping.
    Flat(Vec<NavEntry>),
    /// Top-level groups, each opening a submenu.
    Grouped(Vec<NavGroup>),
}

impl NavLayout {
    /// All entries in render order, regardless of grouping.
    pub fn entries(&self) -> Vec<NavEntry> {
        match self {
            NavLayout::Flat(items) => items.clone(),
            NavLayout::Grouped(groups) => {
                groups.iter().flat_map(|g| g.entries.clone()).collect()
            }
        }
    }

    /// Does any entry route to `page`?
    pub fn contains(&self, page: PageId) -> bool {
        self.entries().iter().any(|e| e.page == page)
    }
}

/// Compose the navigation the given role sees.
///
/// The role's layout, re-filtered through each page's own role gate; groups
/// whose entries all drop out disappear entirely.
pub fn visible_navigation(role: Role) -> NavLayout {
    match layout_for(role) {
        NavLayout::Flat(items) => NavLayout::Flat(
            items
                .into_iter()
                .filter(|entry| entry.page.allows(role))
                .collect(),
        ),
        NavLayout::Grouped(groups) => NavLayout::Grouped(
            groups
                .into_iter()
                .map(|group| NavGroup {
                    label: group.label,
                    entries: group
                        .entries
                        .into_iter()
                        .filter(|entry| entry.page.allows(role))
                        .collect(),
                })
                .filter(|group| !group.entries.is_empty())
                .collect(),
        ),
    }
}

/// The named layout for each role.
fn layout_for(role: Role) -> NavLayout {
    match role {
        Role::Auditor => auditor_layout(),
        Role::ChiefAuditExecutive => chief_audit_executive_layout(),
        Role::AuditManager => audit_manager_layout(),
        Role::ProcessOwner => process_owner_layout(),
        Role::BoardViewer => board_viewer_layout(),
        Role::SystemAdministrator => system_administrator_layout(),
    }
}

/// Auditors get a flat menu with their day-to-day three screens.
fn auditor_layout() -> NavLayout {
    NavLayout::Flat(vec![
        NavEntry::page(PageId::Dashboard),
        NavEntry::page(PageId::MyAudits),
        NavEntry::page(PageId::Comments),
    ])
}

/// The executive oversees everything: six groups, each with a submenu.
fn chief_audit_executive_layout() -> NavLayout {
    NavLayout::Grouped(vec![
        NavGroup {
            label: "Overview",
            entries: vec![
                NavEntry::page(PageId::Dashboard),
                NavEntry::page(PageId::Reports),
            ],
        },
        NavGroup {
            label: "Planning",
            entries: vec![
                NavEntry::page(PageId::AuditPlanning),
                NavEntry::page(PageId::WorkflowConfiguration),
            ],
        },
        NavGroup {
            label: "Fieldwork",
            entries: vec![
                NavEntry::page(PageId::Fieldwork),
                NavEntry::page(PageId::Evidence),
            ],
        },
        NavGroup {
            label: "Findings",
            entries: vec![
                NavEntry::page(PageId::Findings),
                NavEntry::page(PageId::Remediation),
            ],
        },
        NavGroup {
            label: "Compliance",
            entries: vec![NavEntry::page(PageId::Compliance)],
        },
        NavGroup {
            label: "Administration",
            entries: vec![
                NavEntry::page(PageId::UserAdministration),
                NavEntry::page(PageId::Comments),
            ],
        },
    ])
}

fn audit_manager_layout() -> NavLayout {
    NavLayout::Grouped(vec![
        NavGroup {
            label: "Overview",
            entries: vec![
                NavEntry::page(PageId::Dashboard),
                NavEntry::page(PageId::Reports),
            ],
        },
        NavGroup {
            label: "Fieldwork",
            entries: vec![
                NavEntry::page(PageId::Fieldwork),
                NavEntry::page(PageId::Evidence),
            ],
        },
        NavGroup {
            label: "Findings",
            entries: vec![
                NavEntry::page(PageId::Findings),
                NavEntry::page(PageId::Remediation),
            ],
        },
        NavGroup {
            label: "Collaboration",
            entries: vec![NavEntry::page(PageId::Comments)],
        },
    ])
}

fn process_owner_layout() -> NavLayout {
    NavLayout::Flat(vec![
        NavEntry::page(PageId::Dashboard),
        NavEntry::page(PageId::Findings),
        NavEntry::page(PageId::Remediation),
        NavEntry::page(PageId::Comments),
    ])
}

fn board_viewer_layout() -> NavLayout {
    NavLayout::Flat(vec![
        NavEntry::page(PageId::Dashboard),
        NavEntry::page(PageId::Reports),
        NavEntry::page(PageId::Compliance),
    ])
}

fn system_administrator_layout() -> NavLayout {
    NavLayout::Grouped(vec![
        NavGroup {
            label: "Overview",
            entries: vec![
                NavEntry::page(PageId::Dashboard),
                NavEntry::page(PageId::Reports),
            ],
        },
        NavGroup {
            label: "Audit Operations",
            entries: vec![
                NavEntry::page(PageId::AuditPlanning),
                NavEntry::page(PageId::Fieldwork),
                NavEntry::page(PageId::Findings),
                NavEntry::page(PageId::Remediation),
                NavEntry::page(PageId::Compliance),
            ],
        },
        NavGroup {
            label: "Administration",
            entries: vec![
                NavEntry::page(PageId::UserAdministration),
                NavEntry::page(PageId::WorkflowConfiguration),
                NavEntry::page(PageId::Comments),
            ],
        },
    ])
}

// ─────────────────────────────────────────────────────────────────────────────
// Viewport chrome
// ─────────────────────────────────────────────────────────────────────────────

/// Below this width the menu collapses into a drawer.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// How the navigation is presented at a given viewport width.
///
/// Chrome only: both presentations render the same layout for the same role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavChrome {
    TopBar,
    Drawer,
}

pub fn chrome_for_width(width_px: u32) -> NavChrome {
    if width_px < MOBILE_BREAKPOINT_PX {
        NavChrome::Drawer
    } else {
        NavChrome::TopBar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auditor_menu_is_flat_with_three_items() {
        let NavLayout::Flat(items) = visible_navigation(Role::Auditor) else {
            panic!("expected a flat layout for auditors");
        };
        let pages: Vec<_> = items.iter().map(|e| e.page).collect();
        assert_eq!(
            pages,
            vec![PageId::Dashboard, PageId::MyAudits, PageId::Comments]
        );
    }

    #[test]
    fn chief_audit_executive_menu_has_six_groups_with_submenus() {
        let NavLayout::Grouped(groups) = visible_navigation(Role::ChiefAuditExecutive) else {
            panic!("expected a grouped layout for the executive");
        };
        assert_eq!(groups.len(), 6);
        for group in &groups {
            assert!(!group.entries.is_empty(), "group: {}", group.label);
        }
        let labels: Vec<_> = groups.iter().map(|g| g.label).collect();
        assert_eq!(
            labels,
            vec![
                "Overview",
                "Planning",
                "Fieldwork",
                "Findings",
                "Compliance",
                "Administration"
            ]
        );
    }

    #[test]
    fn every_layout_passes_its_own_page_gates() {
        // The double gate must be invisible in practice: no role's layout may
        // reference a page the role cannot open.
        for role in Role::ALL {
            for entry in layout_for(role).entries() {
                assert!(
                    entry.page.allows(role),
                    "{role} layout references gated page {:?}",
                    entry.page
                );
            }
        }
    }

    #[test]
    fn composed_navigation_never_shows_a_gated_page() {
        for role in Role::ALL {
            for entry in visible_navigation(role).entries() {
                assert!(entry.page.allows(role));
            }
        }
    }

    #[test]
    fn layouts_are_distinct_shapes_per_role() {
        assert_ne!(
            visible_navigation(Role::Auditor),
            visible_navigation(Role::ProcessOwner)
        );
        assert!(matches!(
            visible_navigation(Role::AuditManager),
            NavLayout::Grouped(_)
        ));
        assert!(matches!(
            visible_navigation(Role::BoardViewer),
            NavLayout::Flat(_)
        ));
    }

    #[test]
    fn entries_carry_display_labels() {
        for entry in visible_navigation(Role::ChiefAuditExecutive).entries() {
            assert_eq!(entry.label, entry.page.label());
        }
    }

    #[test]
    fn drawer_below_breakpoint_top_bar_at_and_above() {
        assert_eq!(chrome_for_width(320), NavChrome::Drawer);
        assert_eq!(chrome_for_width(MOBILE_BREAKPOINT_PX - 1), NavChrome::Drawer);
        assert_eq!(chrome_for_width(MOBILE_BREAKPOINT_PX), NavChrome::TopBar);
        assert_eq!(chrome_for_width(1920), NavChrome::TopBar);
    }
}
