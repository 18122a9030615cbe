//! Conversation transcript and the ask state machine.
//!
//! The transcript is append-only and creation-ordered; entries are never
//! edited or removed. A single ask may be in flight at a time, modeled as
//! an explicit Idle/InFlight phase rather than an ad-hoc boolean, so a
//! second submit is a checked precondition failure instead of a convention.

use anyhow::Result;
use chrono::{DateTime, Utc};
use thiserror::Error;
use vellum_common::wire::{AskMode, AskRequest};

use crate::backend::DocumentBackend;

/// One transcript entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A question the user submitted, with the selection active at ask time.
    /// The snapshot is preserved for audit even if the selection changes.
    User {
        text: String,
        selection: Vec<String>,
        at: DateTime<Utc>,
    },
    /// An answer from the backend with its citation sources.
    Assistant {
        text: String,
        sources: Vec<String>,
        mode: AskMode,
        at: DateTime<Utc>,
    },
    /// Out-of-band notice (reload confirmations and the like).
    System { text: String, at: DateTime<Utc> },
}

/// Phase of the single ask operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AskPhase {
    #[default]
    Idle,
    InFlight,
}

/// Why an ask did not produce an answer entry.
#[derive(Debug, Error)]
pub enum AskError {
    /// A previous ask has not settled yet; nothing was appended.
    #[error("a question is already in flight")]
    Busy,
    /// The backend was unreachable or returned garbage.
    #[error("{0}")]
    Transport(#[source] anyhow::Error),
    /// The backend answered but rejected the question.
    #[error("backend rejected the question: {0}")]
    Rejected(String),
}

/// Owner of the transcript and the single asynchronous exchange.
#[derive(Debug, Default)]
pub struct ConversationManager {
    entries: Vec<Entry>,
    phase: AskPhase,
    revision: u64,
}

impl ConversationManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn phase(&self) -> AskPhase {
        self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.phase == AskPhase::InFlight
    }

    /// Bumped on every append; the presentation layer polls this to learn
    /// the transcript changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Submit a question and wait for the answer.
    ///
    /// Exactly one user entry is appended before the request goes out. On
    /// success exactly one assistant entry is appended; on any failure the
    /// transcript is left with the unanswered question — the user should
    /// still see what was asked. Either way the phase returns to Idle.
    pub async fn ask(
        &mut self,
        backend: &dyn DocumentBackend,
        question: &str,
        selection: Vec<String>,
        mode: AskMode,
    ) -> Result<(), AskError> {
        if self.phase == AskPhase::InFlight {
            return Err(AskError::Busy);
        }

        self.push(Entry::User {
            text: question.to_string(),
            selection: selection.clone(),
            at: Utc::now(),
        });
        self.phase = AskPhase::InFlight;

        let request = AskRequest {
            question: question.to_string(),
            mode,
            selected_pdfs: selection,
        };
        let outcome = backend.ask(&request).await;
        self.phase = AskPhase::Idle;

        match outcome {
            Ok(response) if response.success => {
                self.push(Entry::Assistant {
                    text: response.answer,
                    sources: response.sources,
                    mode,
                    at: Utc::now(),
                });
                Ok(())
            }
            Ok(response) => Err(AskError::Rejected(
                response
                    .error
                    .unwrap_or_else(|| "no answer returned".to_string()),
            )),
            Err(err) => Err(AskError::Transport(err)),
        }
    }

    /// Append a system notice.
    pub fn add_system_notice(&mut self, text: impl Into<String>) {
        self.push(Entry::System {
            text: text.into(),
            at: Utc::now(),
        });
    }

    /// Record an already-produced assistant answer (used by the
    /// whole-collection analysis path, which bypasses the ask endpoint).
    pub fn add_assistant_answer(&mut self, text: String, sources: Vec<String>, mode: AskMode) {
        self.push(Entry::Assistant {
            text,
            sources,
            mode,
            at: Utc::now(),
        });
    }

    fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.revision += 1;
    }

    #[cfg(test)]
    pub(crate) fn force_phase(&mut self, phase: AskPhase) {
        self.phase = phase;
    }
}
