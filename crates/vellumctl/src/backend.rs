//! Backend abstraction.
//!
//! The controller and managers talk to the document-QA service through this
//! trait so tests can swap in a scripted backend without a running server.
//! The real implementation lives in [`crate::client`].

use anyhow::Result;
use async_trait::async_trait;
use vellum_common::wire::{
    AnalyzeRequest, AnalyzeResponse, AskRequest, AskResponse, DocumentListResponse,
    HealthResponse, ReloadResponse,
};

/// Async interface to the document-QA backend.
///
/// Transport and decode failures surface as errors; application-level
/// rejections come back as a parsed response with `success == false`.
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Probe the health endpoint.
    async fn health(&self) -> Result<HealthResponse>;

    /// Fetch the current document listing.
    async fn list_documents(&self) -> Result<DocumentListResponse>;

    /// Ask the backend to re-scan its source folder.
    async fn reload(&self) -> Result<ReloadResponse>;

    /// Submit a question against the selected documents.
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse>;

    /// Run a whole-collection analysis.
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse>;
}
