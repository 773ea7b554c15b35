//! Session payload shapes handed over by the host shell's login flow.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use auditdesk_core::{DomainError, DomainResult};

use crate::{Role, classify_optional_role};

/// Role record nested inside the backend's user payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRecord {
    pub role_name: String,
}

/// One role grant attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRoleGrant {
    pub role: RoleRecord,
}

/// The user object the login flow persists alongside the token.
///
/// The shape tracks the backend response; fields this layer does not read are
/// preserved verbatim in `extra` so a round-trip loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub user_roles: Vec<UserRoleGrant>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SessionUser {
    /// Parse the persisted user blob.
    ///
    /// The store is written by the login flow, but it is still external state;
    /// anything unparseable surfaces as a validation error for the caller to
    /// log or drop.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| DomainError::validation(format!("session user payload: {e}")))
    }

    /// Resolve the user's effective console role.
    ///
    /// The first grant wins. An absent grant list, like an unrecognized role
    /// name, fails closed to [`Role::Auditor`].
    pub fn primary_role(&self) -> Role {
        classify_optional_role(self.user_roles.first().map(|g| g.role.role_name.as_str()))
    }

    /// Name to show in chrome, when the payload carries one.
    pub fn display_name(&self) -> Option<String> {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.to_string()),
            (None, Some(last)) => Some(last.to_string()),
            (None, None) => self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_shape_and_resolves_role() {
        let json = r#"{
            "id": 42,
            "email": "lena@example.com",
            "firstName": "Lena",
            "lastName": "Vogel",
            "userRoles": [
                { "role": { "roleName": "Chief Audit Executive (CAE)" } },
                { "role": { "roleName": "Auditor" } }
            ]
        }"#;

        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.primary_role(), Role::ChiefAuditExecutive);
        assert_eq!(user.display_name().as_deref(), Some("Lena Vogel"));
        // Fields we do not model survive in the passthrough map.
        assert_eq!(user.extra["id"], serde_json::json!(42));
    }

    #[test]
    fn missing_grants_fail_closed() {
        let user: SessionUser = serde_json::from_str(r#"{"email":"x@example.com"}"#).unwrap();
        assert_eq!(user.primary_role(), Role::Auditor);
    }

    #[test]
    fn malformed_payload_is_a_validation_error() {
        let err = SessionUser::from_json("{ definitely not json").unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("session user payload")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_grant_fails_closed() {
        let json = r#"{ "userRoles": [ { "role": { "roleName": "Intern" } } ] }"#;
        let user: SessionUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.primary_role(), Role::Auditor);
    }

    #[test]
    fn display_name_falls_back_to_email() {
        let user: SessionUser = serde_json::from_str(r#"{"email":"x@example.com"}"#).unwrap();
        assert_eq!(user.display_name().as_deref(), Some("x@example.com"));
    }

    #[test]
    fn roundtrip_preserves_unknown_fields() {
        let json = serde_json::json!({
            "email": "a@b.c",
            "department": "Internal Audit",
            "userRoles": []
        });
        let user: SessionUser = serde_json::from_value(json.clone()).unwrap();
        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back["department"], json["department"]);
    }
}
