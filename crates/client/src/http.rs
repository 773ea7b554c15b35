//! HTTP implementation of [`AuditApi`] against the audit REST service.

use async_trait::async_trait;

use auditdesk_auth::Role;
use auditdesk_core::{AuditId, ProgramId};
use auditdesk_workflow::{Audit, AuditStatus, EvidenceItem};

use crate::api::{ApiError, AuditApi, TransitionRequest};
use crate::config::ClientConfig;

/// REST client for the audit service.
///
/// Every call is a single attempt: the dispatcher surfaces failures to the
/// screen instead of retrying, so a slow backend never multiplies requests.
pub struct HttpAuditApi {
    api_url: String,
    token: Option<String>,
}

impl HttpAuditApi {
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            token: None,
        }
    }

    pub fn with_token(api_url: String, token: String) -> Self {
        Self {
            api_url,
            token: Some(token),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            token: config.auth_token.clone(),
        }
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let client = reqwest::Client::new();
        let mut req = client.get(url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        let client = reqwest::Client::new();
        let mut req = client.post(url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }
}

#[async_trait]
impl AuditApi for HttpAuditApi {
    async fn fetch_audit(&self, id: AuditId) -> Result<Audit, ApiError> {
        let url = format!("{}/audits/{}", self.api_url, id);
        let resp = self
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ApiError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn submit_transition(
        &self,
        id: AuditId,
        to: AuditStatus,
        role: Role,
    ) -> Result<Audit, ApiError> {
        let url = format!("{}/audits/{}/transition", self.api_url, id);
        let body = TransitionRequest {
            to_status: to,
            user_role: role,
        };
        let resp = self
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ApiError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn allowed_transitions(&self, id: AuditId) -> Result<Vec<AuditStatus>, ApiError> {
        let url = format!("{}/audits/{}/allowed-transitions", self.api_url, id);
        let resp = self
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ApiError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }

    async fn fetch_evidence(&self, program_id: ProgramId) -> Result<Vec<EvidenceItem>, ApiError> {
        let url = format!("{}/audit-programs/{}/evidence", self.api_url, program_id);
        let resp = self
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ApiError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
}
