//! Raw role-string classification.
//!
//! Role names arrive from the backend (and from persisted sessions) as
//! free-form strings: historical spellings, abbreviations, parenthesized
//! suffixes. Everything downstream — transition checks, navigation, action
//! visibility — consumes the closed [`Role`] set, so every raw string must
//! classify to exactly one variant. An unrecognized string fails closed to
//! [`Role::Auditor`], the least-privileged operational role: a
//! misconfigured account may see too little, never too much.

use crate::Role;

/// Classify a raw role string, failing closed to [`Role::Auditor`].
///
/// - No IO
/// - No panics (total over all inputs)
/// - The fallback is deliberately silent towards the user; it leaves a
///   `debug` record for operators.
pub fn classify_role(raw: &str) -> Role {
    match try_classify_role(raw) {
        Some(role) => role,
        None => {
            let shown: String = raw.chars().take(64).collect();
            tracing::debug!(raw = %shown, "unrecognized role string, defaulting to Auditor");
            Role::Auditor
        }
    }
}

/// Classify an optional raw role string (absent sessions fail closed too).
pub fn classify_optional_role(raw: Option<&str>) -> Role {
    match raw {
        Some(raw) => classify_role(raw),
        None => {
            tracing::debug!("session carries no role string, defaulting to Auditor");
            Role::Auditor
        }
    }
}

/// Non-defaulting lookup. `None` means the string is not a known alias.
pub fn try_classify_role(raw: &str) -> Option<Role> {
    let role = match normalize(raw).as_str() {
        "systemadministrator" | "admin" => Role::SystemAdministrator,
        "chiefauditexecutive" | "chiefauditexecutivecae" | "cae" => Role::ChiefAuditExecutive,
        "auditmanager" | "manager" => Role::AuditManager,
        "auditor" => Role::Auditor,
        "processowner" => Role::ProcessOwner,
        "executiveboardviewer" | "boardviewer" | "executive" => Role::BoardViewer,
        _ => return None,
    };
    Some(role)
}

/// Lowercase and strip everything that is not ASCII alphanumeric, so that
/// `"Chief Audit Executive (CAE)"`, `"chief_audit_executive"` and
/// `"ChiefAuditExecutive"` all collapse to the same key.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
