//! Session controller.
//!
//! Single owner of the registry, the conversation and the session status.
//! Every user action goes through here: the controller runs the guards
//! (non-empty question, non-empty selection, no ask in flight), drives the
//! backend, and funnels every failure into the session's latest-error slot
//! while leaving prior state untouched.

use thiserror::Error;
use vellum_common::wire::{AnalysisKind, AnalyzeRequest, AskMode};

use crate::backend::DocumentBackend;
use crate::conversation::{AskError, ConversationManager, Entry};
use crate::quick_actions::QuickAction;
use crate::registry::DocumentRegistry;
use crate::session::{Connectivity, SessionState};

/// Why a controller operation did not complete.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("failed to load documents: {0}")]
    Listing(String),
    #[error("failed to reload documents: {0}")]
    Reload(String),
    #[error("failed to analyze documents: {0}")]
    Analysis(String),
    #[error(transparent)]
    Ask(#[from] AskError),
    #[error("question is empty")]
    EmptyQuestion,
    #[error("no documents selected")]
    EmptySelection,
    #[error("a question is already in flight")]
    Busy,
}

/// Wires user actions to the two state managers and the backend.
pub struct Controller<B: DocumentBackend> {
    backend: B,
    registry: DocumentRegistry,
    conversation: ConversationManager,
    session: SessionState,
}

impl<B: DocumentBackend> Controller<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            registry: DocumentRegistry::new(),
            conversation: ConversationManager::new(),
            session: SessionState::new(),
        }
    }

    pub fn registry(&self) -> &DocumentRegistry {
        &self.registry
    }

    pub fn conversation(&self) -> &ConversationManager {
        &self.conversation
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn transcript(&self) -> &[Entry] {
        self.conversation.entries()
    }

    /// Probe the backend health endpoint and record the result.
    ///
    /// An unreachable backend sets the error slot; a reachable but
    /// unhealthy one only flips connectivity. The registry is never touched.
    pub async fn check_connectivity(&mut self) -> Connectivity {
        let connectivity = match self.backend.health().await {
            Ok(health) if health.is_healthy() => {
                self.session.clear_error();
                Connectivity::Connected
            }
            Ok(_) => Connectivity::Disconnected,
            Err(err) => {
                tracing::debug!(error = %err, "health probe failed");
                self.session.record_error("Cannot connect to backend server");
                Connectivity::Disconnected
            }
        };
        self.session.set_connectivity(connectivity);
        connectivity
    }

    /// Fetch the document listing and replace the registry atomically.
    ///
    /// On success the selection resets to every returned document. On any
    /// failure the previous registry and selection stay as they were.
    pub async fn load_documents(&mut self) -> Result<usize, ControllerError> {
        match self.backend.list_documents().await {
            Ok(listing) if listing.success => {
                let count = listing.pdfs.len();
                self.registry.replace_documents(listing.pdfs);
                self.session.clear_error();
                Ok(count)
            }
            Ok(listing) => {
                let reason = listing
                    .error
                    .unwrap_or_else(|| "backend reported failure".to_string());
                self.session.record_error("Failed to load documents");
                Err(ControllerError::Listing(reason))
            }
            Err(err) => {
                self.session.record_error("Failed to load documents");
                Err(ControllerError::Listing(err.to_string()))
            }
        }
    }

    /// Ask the backend to re-scan its sources, then pick up the new listing.
    ///
    /// Strictly sequential: when the re-scan fails the listing fetch is not
    /// attempted and no state changes. On success a system notice with the
    /// reloaded count is appended and the count returned.
    pub async fn reload_documents(&mut self) -> Result<usize, ControllerError> {
        let count = match self.backend.reload().await {
            Ok(reload) if reload.success => reload.count,
            Ok(reload) => {
                let reason = reload
                    .error
                    .unwrap_or_else(|| "backend reported failure".to_string());
                self.session.record_error("Failed to reload documents");
                return Err(ControllerError::Reload(reason));
            }
            Err(err) => {
                self.session.record_error("Failed to reload documents");
                return Err(ControllerError::Reload(err.to_string()));
            }
        };

        self.load_documents().await?;
        self.conversation
            .add_system_notice(format!("Successfully reloaded {count} documents"));
        Ok(count)
    }

    pub fn toggle_document(&mut self, name: &str) {
        self.registry.toggle_selection(name);
    }

    pub fn select_all(&mut self) {
        self.registry.select_all();
    }

    pub fn deselect_all(&mut self) {
        self.registry.deselect_all();
    }

    /// Submit a question with the current selection as context.
    ///
    /// Guards run before anything is appended, so a rejected submit leaves
    /// the transcript untouched.
    pub async fn submit_question(
        &mut self,
        question: &str,
        mode: AskMode,
    ) -> Result<(), ControllerError> {
        if self.conversation.is_in_flight() {
            return Err(ControllerError::Busy);
        }
        if question.trim().is_empty() {
            return Err(ControllerError::EmptyQuestion);
        }
        if self.registry.selection_is_empty() {
            return Err(ControllerError::EmptySelection);
        }

        let snapshot = self.registry.selected_names();
        match self
            .conversation
            .ask(&self.backend, question, snapshot, mode)
            .await
        {
            Ok(()) => {
                self.session.clear_error();
                Ok(())
            }
            Err(err) => {
                self.session.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Run one of the canned prompts, always in analysis mode.
    pub async fn run_quick_action(&mut self, action: QuickAction) -> Result<(), ControllerError> {
        self.submit_question(action.prompt(), AskMode::Analysis).await
    }

    /// Whole-collection analysis via the dedicated endpoint.
    ///
    /// The backend analyzes everything it has loaded, so no selection
    /// snapshot applies; the result lands as one assistant entry without
    /// sources.
    pub async fn run_analysis(&mut self, kind: AnalysisKind) -> Result<(), ControllerError> {
        if self.conversation.is_in_flight() {
            return Err(ControllerError::Busy);
        }

        let request = AnalyzeRequest { kind };
        match self.backend.analyze(&request).await {
            Ok(result) if result.success => {
                self.conversation
                    .add_assistant_answer(result.analysis, Vec::new(), AskMode::Analysis);
                self.session.clear_error();
                Ok(())
            }
            Ok(result) => {
                let reason = result
                    .error
                    .unwrap_or_else(|| "backend reported failure".to_string());
                self.session.record_error("Failed to analyze documents");
                Err(ControllerError::Analysis(reason))
            }
            Err(err) => {
                self.session.record_error("Failed to analyze documents");
                Err(ControllerError::Analysis(err.to_string()))
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn conversation_mut(&mut self) -> &mut ConversationManager {
        &mut self.conversation
    }
}
