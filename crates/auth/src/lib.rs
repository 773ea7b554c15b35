//! `auditdesk-auth` — pure role model and classification boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage: it turns the
//! free-form role strings a session carries into the closed [`Role`] set the
//! rest of the console trusts.

pub mod classify;
pub mod role;
pub mod session;

pub use classify::{classify_optional_role, classify_role, try_classify_role};
pub use role::Role;
pub use session::{RoleRecord, SessionUser, UserRoleGrant};
