//! Session state persisted by the host shell.
//!
//! The login flow stores three conventional keys: the bearer `token`, the
//! serialized `user` object, and the resolved `userRole` display string.
//! The console reads them once, classifies the role, and treats the result
//! as immutable until the next resolve.

use std::collections::HashMap;
use std::sync::Mutex;

use auditdesk_auth::{Role, SessionUser, classify_optional_role};

/// Conventional keys in the host key-value store.
pub mod keys {
    /// Bearer token for backend calls.
    pub const TOKEN: &str = "token";
    /// Serialized user payload (JSON).
    pub const USER: &str = "user";
    /// Display string of the resolved role.
    pub const USER_ROLE: &str = "userRole";
}

/// Key-value storage owned by the embedding shell.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests and headless use.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.inner
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.inner.lock().unwrap().remove(key);
    }
}

/// A resolved session: token, user payload, and the role driving every gate.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    pub role: Role,
}

impl Session {
    /// Read and classify the stored session.
    ///
    /// The user payload's first role grant wins; without one the stored
    /// `userRole` string is classified instead. Malformed user JSON is
    /// logged and ignored rather than propagated, so the worst a corrupted
    /// store can do is land the session on [`Role::Auditor`].
    pub fn resolve(store: &dyn SessionStore) -> Self {
        let token = store.get(keys::TOKEN);

        let user = store
            .get(keys::USER)
            .and_then(|raw| match SessionUser::from_json(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    tracing::warn!(error = %err, "stored session user is malformed; ignoring it");
                    None
                }
            });

        let role = match &user {
            Some(user) if !user.user_roles.is_empty() => user.primary_role(),
            _ => classify_optional_role(store.get(keys::USER_ROLE).as_deref()),
        };

        tracing::debug!(%role, authenticated = token.is_some(), "session resolved");

        Self { token, user, role }
    }

    /// Session with no stored state; everything fails closed.
    pub fn anonymous() -> Self {
        Self {
            token: None,
            user: None,
            role: Role::Auditor,
        }
    }

    /// Session pinned to a role, with no token or user payload.
    pub fn for_role(role: Role) -> Self {
        Self {
            token: None,
            user: None,
            role,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Name to show in the chrome header.
    pub fn display_name(&self) -> Option<String> {
        self.user.as_ref().and_then(|user| user.display_name())
    }

    /// Wipe the conventional keys (logout).
    pub fn clear(store: &dyn SessionStore) {
        store.remove(keys::TOKEN);
        store.remove(keys::USER);
        store.remove(keys::USER_ROLE);
    }
}
