//! One-shot command handlers.
//!
//! Each handler builds a controller against the real backend, performs a
//! single operation and prints the result. The interactive session lives
//! in [`crate::repl`].

use anyhow::{bail, Result};
use vellum_common::wire::{AnalysisKind, AskMode};
use vellum_common::{ClientConfig, Ui};

use crate::backend::DocumentBackend;
use crate::client::HttpBackend;
use crate::controller::Controller;
use crate::output;
use crate::session::Connectivity;

/// `vellumctl status` — connectivity and what the backend has loaded.
pub async fn status(config: &ClientConfig) -> Result<()> {
    let ui = Ui::auto();
    let backend = HttpBackend::new(config);
    ui.info(&format!("Backend: {}", backend.base_url()));

    match backend.health().await {
        Ok(health) if health.is_healthy() => {
            ui.success("Backend is healthy");
            ui.detail(&format!("{} document(s) loaded", health.pdfs_loaded));
            if !health.api_configured {
                ui.warning("Backend has no answer API configured");
            }
            Ok(())
        }
        Ok(health) => {
            ui.warning(&format!("Backend reports status {:?}", health.status));
            Ok(())
        }
        Err(err) => {
            ui.error("Cannot connect to backend server");
            Err(err)
        }
    }
}

/// `vellumctl docs` — fetch and print the registry listing.
pub async fn docs(config: &ClientConfig) -> Result<()> {
    let mut controller = Controller::new(HttpBackend::new(config));
    controller.load_documents().await?;

    let registry = controller.registry();
    output::print_document_list(registry.documents(), |name| registry.is_selected(name));
    Ok(())
}

/// `vellumctl reload` — re-scan, then report the fresh count.
pub async fn reload(config: &ClientConfig) -> Result<()> {
    let ui = Ui::auto();
    let mut controller = Controller::new(HttpBackend::new(config));
    let count = controller.reload_documents().await?;
    ui.success(&format!("Reloaded {count} document(s)"));
    Ok(())
}

/// `vellumctl ask` — one question against every document.
pub async fn ask(config: &ClientConfig, question: &str, mode: AskMode) -> Result<()> {
    let mut controller = Controller::new(HttpBackend::new(config));

    if controller.check_connectivity().await != Connectivity::Connected {
        bail!("cannot connect to backend server");
    }
    let count = controller.load_documents().await?;
    if count == 0 {
        bail!("the backend has no documents loaded");
    }

    controller.submit_question(question, mode).await?;
    for entry in controller.transcript() {
        output::print_entry(entry);
    }
    Ok(())
}

/// `vellumctl analyze` — whole-collection analysis.
pub async fn analyze(config: &ClientConfig, kind: AnalysisKind) -> Result<()> {
    let mut controller = Controller::new(HttpBackend::new(config));
    controller.run_analysis(kind).await?;
    for entry in controller.transcript() {
        output::print_entry(entry);
    }
    Ok(())
}
