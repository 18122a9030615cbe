//! Scripted backend for unit tests.
//!
//! Each endpoint pops responses from its own queue; calling an endpoint
//! with an empty queue fails the way an unreachable server would. The call
//! log lets tests assert ordering, e.g. that a failed re-scan never reaches
//! the listing endpoint.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use vellum_common::wire::{
    AnalyzeRequest, AnalyzeResponse, AskRequest, AskResponse, DocumentListResponse,
    HealthResponse, ReloadResponse,
};

use crate::backend::DocumentBackend;

#[derive(Default)]
pub struct ScriptedBackend {
    health: Mutex<VecDeque<Result<HealthResponse>>>,
    list: Mutex<VecDeque<Result<DocumentListResponse>>>,
    reload: Mutex<VecDeque<Result<ReloadResponse>>>,
    ask: Mutex<VecDeque<Result<AskResponse>>>,
    analyze: Mutex<VecDeque<Result<AnalyzeResponse>>>,
    calls: Mutex<Vec<&'static str>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_health(self, response: Result<HealthResponse>) -> Self {
        self.health.lock().unwrap().push_back(response);
        self
    }

    pub fn with_list(self, response: Result<DocumentListResponse>) -> Self {
        self.list.lock().unwrap().push_back(response);
        self
    }

    pub fn with_reload(self, response: Result<ReloadResponse>) -> Self {
        self.reload.lock().unwrap().push_back(response);
        self
    }

    pub fn with_ask(self, response: Result<AskResponse>) -> Self {
        self.ask.lock().unwrap().push_back(response);
        self
    }

    pub fn with_analyze(self, response: Result<AnalyzeResponse>) -> Self {
        self.analyze.lock().unwrap().push_back(response);
        self
    }

    /// Endpoints hit so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn pop<T>(&self, queue: &Mutex<VecDeque<Result<T>>>, endpoint: &'static str) -> Result<T> {
        self.calls.lock().unwrap().push(endpoint);
        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("no scripted response for {endpoint}")))
    }
}

#[async_trait]
impl DocumentBackend for ScriptedBackend {
    async fn health(&self) -> Result<HealthResponse> {
        self.pop(&self.health, "health")
    }

    async fn list_documents(&self) -> Result<DocumentListResponse> {
        self.pop(&self.list, "list")
    }

    async fn reload(&self) -> Result<ReloadResponse> {
        self.pop(&self.reload, "reload")
    }

    async fn ask(&self, _request: &AskRequest) -> Result<AskResponse> {
        self.pop(&self.ask, "ask")
    }

    async fn analyze(&self, _request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        self.pop(&self.analyze, "analyze")
    }
}
