//! Shared library for the vellum client.
//!
//! Holds everything both the CLI and any future frontends need: the wire
//! types for the backend HTTP API, client configuration, terminal display
//! helpers and the answer text formatter.

pub mod config;
pub mod display;
pub mod format;
pub mod wire;

pub use config::ClientConfig;
pub use display::Ui;
pub use format::{format_answer, Block};
pub use wire::{
    AnalysisKind, AnalyzeRequest, AnalyzeResponse, AskMode, AskRequest, AskResponse,
    DocumentEntry, DocumentListResponse, HealthResponse, ReloadResponse,
};
