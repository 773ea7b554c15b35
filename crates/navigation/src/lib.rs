//! `auditdesk-navigation` — what each role sees.
//!
//! Pure view composition: per-role menu layouts, page gates, workflow action
//! visibility and viewport chrome, all as data. Rendering is the embedding
//! shell's concern; authorization truth lives in `auditdesk-workflow` and is
//! queried, never copied.

pub mod actions;
pub mod menu;
pub mod pages;

pub use actions::{ActionId, visible_actions};
pub use menu::{
    MOBILE_BREAKPOINT_PX, NavChrome, NavEntry, NavGroup, NavLayout, chrome_for_width,
    visible_navigation,
};
pub use pages::PageId;
