//! vellum client library.
//!
//! The pieces behind the `vellumctl` binary: the document registry and
//! conversation state managers, the session controller that wires them to
//! the backend, the reqwest client, and the terminal front ends.

pub mod backend;
pub mod cli;
pub mod client;
pub mod commands;
pub mod controller;
pub mod conversation;
pub mod output;
pub mod quick_actions;
pub mod registry;
pub mod repl;
pub mod session;

#[cfg(test)]
mod testing;

pub use backend::DocumentBackend;
pub use client::HttpBackend;
pub use controller::{Controller, ControllerError};
pub use conversation::{AskError, AskPhase, ConversationManager, Entry};
pub use quick_actions::QuickAction;
pub use registry::DocumentRegistry;
pub use session::{Connectivity, SessionState};
