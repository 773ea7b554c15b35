//! Tracing/logging initialization.
//!
//! The console runs embedded in a host shell, so logs go to stderr as JSON
//! lines the shell can collect. Authorization denials are logged at `debug`;
//! raise the filter to see every decision the policy layer makes.

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process, honoring `RUST_LOG`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with_filter("info");
}

/// Initialize with an explicit default filter, still overridable via
/// `RUST_LOG`. Embeddings that want the full decision trail pass something
/// like `"info,auditdesk_workflow=debug,auditdesk_client=debug"`.
pub fn init_with_filter(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .try_init();
}
