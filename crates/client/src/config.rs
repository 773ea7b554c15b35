//! Client configuration from the environment.

/// Base URL used when `AUDITDESK_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Connection settings for the audit backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    /// Static token for headless use; a stored session token wins over this.
    pub auth_token: Option<String>,
}

impl ClientConfig {
    /// Read `AUDITDESK_API_URL` and `AUDITDESK_AUTH_TOKEN`.
    pub fn from_env() -> Self {
        let api_url = std::env::var("AUDITDESK_API_URL").unwrap_or_else(|_| {
            tracing::warn!("AUDITDESK_API_URL not set; using {}", DEFAULT_API_URL);
            DEFAULT_API_URL.to_string()
        });
        let auth_token = std::env::var("AUDITDESK_AUTH_TOKEN").ok();

        Self {
            api_url,
            auth_token,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            auth_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_dev() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.auth_token.is_none());
    }
}
