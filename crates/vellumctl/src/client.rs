//! HTTP client for the document-QA backend.
//!
//! Thin reqwest wrapper around the five API endpoints. No retries and no
//! client-side timeout: failures are reported once and the caller decides
//! what to show; a hung backend hangs the request for as long as the
//! transport allows.

use anyhow::{Context, Result};
use async_trait::async_trait;
use vellum_common::wire::{
    AnalyzeRequest, AnalyzeResponse, AskRequest, AskResponse, DocumentListResponse,
    HealthResponse, ReloadResponse,
};
use vellum_common::ClientConfig;

use crate::backend::DocumentBackend;

/// reqwest-backed [`DocumentBackend`].
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.backend_base().to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl DocumentBackend for HttpBackend {
    async fn health(&self) -> Result<HealthResponse> {
        let response = self
            .client
            .get(self.endpoint("/api/health"))
            .send()
            .await
            .context("cannot connect to backend server")?;

        response
            .json()
            .await
            .context("invalid health response from backend")
    }

    async fn list_documents(&self) -> Result<DocumentListResponse> {
        let response = self
            .client
            .get(self.endpoint("/api/pdfs"))
            .send()
            .await
            .context("failed to fetch document list")?;

        response
            .json()
            .await
            .context("invalid document list from backend")
    }

    async fn reload(&self) -> Result<ReloadResponse> {
        let response = self
            .client
            .post(self.endpoint("/api/reload"))
            .send()
            .await
            .context("failed to request document reload")?;

        response
            .json()
            .await
            .context("invalid reload response from backend")
    }

    async fn ask(&self, request: &AskRequest) -> Result<AskResponse> {
        let response = self
            .client
            .post(self.endpoint("/api/ask"))
            .json(request)
            .send()
            .await
            .context("failed to submit question")?;

        // The backend answers rejections with 4xx plus a JSON error body,
        // so decode the body regardless of status.
        response
            .json()
            .await
            .context("invalid ask response from backend")
    }

    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        let response = self
            .client
            .post(self.endpoint("/api/analyze"))
            .json(request)
            .send()
            .await
            .context("failed to submit analysis request")?;

        response
            .json()
            .await
            .context("invalid analysis response from backend")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_and_path() {
        let config = ClientConfig {
            backend_url: "http://localhost:5000/".to_string(),
        };
        let backend = HttpBackend::new(&config);
        assert_eq!(backend.base_url(), "http://localhost:5000");
        assert_eq!(
            backend.endpoint("/api/health"),
            "http://localhost:5000/api/health"
        );
    }
}
