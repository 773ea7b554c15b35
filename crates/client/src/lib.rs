//! `auditdesk-client` — the console runtime.
//!
//! Composes the policy crates into a working session: resolve the stored
//! login, build the role's navigation, and dispatch role-gated transitions
//! against the REST backend. Policy decisions live in `auditdesk-workflow`
//! and `auditdesk-navigation`; this crate wires them to IO and keeps local
//! state strictly server-confirmed.

pub mod api;
pub mod cache;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod http;
pub mod session;

pub use api::{ApiError, AuditApi, TransitionRequest};
pub use cache::AuditCache;
pub use config::ClientConfig;
pub use console::AuditConsole;
pub use dispatch::{TransitionDispatcher, TransitionError};
pub use http::HttpAuditApi;
pub use session::{MemorySessionStore, Session, SessionStore, keys};
