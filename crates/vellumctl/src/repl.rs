//! Interactive REPL.
//!
//! Plain text submits a question against the current selection; slash
//! commands drive the registry and session. The loop prints whatever the
//! transcript gained after each action, using the conversation revision
//! counter to notice changes.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use indicatif::ProgressBar;
use vellum_common::wire::{AnalysisKind, AskMode};
use vellum_common::{ClientConfig, Ui};

use crate::backend::DocumentBackend;
use crate::client::HttpBackend;
use crate::controller::{Controller, ControllerError};
use crate::output;
use crate::quick_actions::QuickAction;
use crate::session::Connectivity;

/// Start the interactive session.
pub async fn run(config: ClientConfig) -> Result<()> {
    let ui = Ui::auto();
    let backend = HttpBackend::new(&config);
    let base_url = backend.base_url().to_string();
    let mut controller = Controller::new(backend);

    ui.section_header("vellum — document analysis assistant");
    ui.info(&format!("Backend: {}", base_url));

    // Same startup as the web frontend: probe health, then load the
    // registry with everything selected.
    if controller.check_connectivity().await == Connectivity::Connected {
        ui.success("Connected to backend");
    } else {
        ui.warning("Backend unreachable; commands will keep failing until it is up");
    }
    match controller.load_documents().await {
        Ok(count) => ui.info(&format!("{count} document(s) available, all selected")),
        Err(err) => ui.error(&err.to_string()),
    }
    ui.info("Type a question, /help for commands, /quit to exit");

    let mut loop_state = ReplLoop::new(controller, ui);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\nvellum> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            Some(Err(err)) => {
                loop_state.ui.error(&format!("Error reading input: {err}"));
                continue;
            }
            None => break,
        };

        if line.is_empty() {
            continue;
        }
        if !loop_state.handle(&line).await {
            break;
        }
    }

    Ok(())
}

struct ReplLoop<B: DocumentBackend> {
    controller: Controller<B>,
    ui: Ui,
    printed: usize,
}

impl<B: DocumentBackend> ReplLoop<B> {
    fn new(controller: Controller<B>, ui: Ui) -> Self {
        Self {
            controller,
            ui,
            printed: 0,
        }
    }

    /// Handle one input line; returns false when the session should end.
    async fn handle(&mut self, line: &str) -> bool {
        if let Some(command) = line.strip_prefix('/') {
            let mut parts = command.splitn(2, char::is_whitespace);
            let name = parts.next().unwrap_or_default();
            let argument = parts.next().map(str::trim).unwrap_or_default();

            match name {
                "quit" | "exit" => {
                    self.ui.info("Goodbye!");
                    return false;
                }
                "help" => self.print_help(),
                "docs" => self.print_documents(),
                "select" => self.toggle(argument),
                "all" => {
                    self.controller.select_all();
                    self.print_selection_count();
                }
                "none" => {
                    self.controller.deselect_all();
                    self.print_selection_count();
                }
                "status" => {
                    self.controller.check_connectivity().await;
                    output::print_session_status(self.controller.session());
                }
                "reload" => self.reload().await,
                "analyze" => self.analyze(argument).await,
                _ => match QuickAction::parse(name) {
                    Some(action) => self.quick_action(action).await,
                    None => self
                        .ui
                        .warning(&format!("Unknown command /{name}; try /help")),
                },
            }
        } else {
            self.ask(line).await;
        }
        true
    }

    fn print_help(&self) {
        self.ui.section_header("Commands");
        self.ui.bullet_list(&[
            "/docs              list documents and selection",
            "/select <name>     toggle a document in or out of context",
            "/all               select every document",
            "/none              clear the selection",
            "/reload            re-scan the backend's source folder",
            "/status            backend connectivity",
            "/connections       quick action: find connections",
            "/summary           quick action: summarize selection",
            "/insights          quick action: key insights",
            "/analyze <kind>    whole-collection analysis (connections, insights, themes)",
            "/quit              exit",
        ]);
        self.ui
            .info("Anything else is asked as a question about the selected documents.");
    }

    fn print_documents(&self) {
        let registry = self.controller.registry();
        output::print_document_list(registry.documents(), |name| registry.is_selected(name));
        self.print_selection_count();
    }

    fn print_selection_count(&self) {
        let registry = self.controller.registry();
        self.ui.info(&format!(
            "{} of {} selected",
            registry.selected_count(),
            registry.document_count()
        ));
    }

    fn toggle(&mut self, name: &str) {
        if name.is_empty() {
            self.ui.warning("Usage: /select <document name>");
            return;
        }
        if !self.controller.registry().contains(name) {
            self.ui
                .warning(&format!("No document named {name:?} in the registry"));
            return;
        }
        self.controller.toggle_document(name);
        self.print_selection_count();
    }

    async fn reload(&mut self) {
        let spinner = thinking_spinner("Reloading documents...");
        let result = self.controller.reload_documents().await;
        spinner.finish_and_clear();

        match result {
            Ok(_) => self.print_new_entries(),
            Err(err) => self.ui.error(&err.to_string()),
        }
    }

    async fn ask(&mut self, question: &str) {
        let spinner = thinking_spinner("Thinking...");
        let result = self.controller.submit_question(question, AskMode::Normal).await;
        spinner.finish_and_clear();
        self.report_ask(result);
    }

    async fn quick_action(&mut self, action: QuickAction) {
        let spinner = thinking_spinner(action.label());
        let result = self.controller.run_quick_action(action).await;
        spinner.finish_and_clear();
        self.report_ask(result);
    }

    async fn analyze(&mut self, kind: &str) {
        let kind = match kind {
            "connections" => AnalysisKind::Connections,
            "insights" => AnalysisKind::Insights,
            "themes" => AnalysisKind::Themes,
            other => {
                self.ui.warning(&format!(
                    "Unknown analysis {other:?}; expected connections, insights or themes"
                ));
                return;
            }
        };
        let spinner = thinking_spinner("Analyzing collection...");
        let result = self.controller.run_analysis(kind).await;
        spinner.finish_and_clear();

        match result {
            Ok(()) => self.print_new_entries(),
            Err(err) => self.ui.error(&err.to_string()),
        }
    }

    fn report_ask(&mut self, result: Result<(), ControllerError>) {
        match result {
            Ok(()) => self.print_new_entries(),
            Err(ControllerError::EmptySelection) => {
                self.ui
                    .warning("Please select at least one document from the library");
            }
            Err(ControllerError::EmptyQuestion) => {
                self.ui.warning("Please enter a question.");
            }
            Err(ControllerError::Busy) => {
                self.ui.warning("Still waiting on the previous question.");
            }
            Err(err) => {
                // The question stays in the transcript without an answer.
                self.print_new_entries();
                self.ui.error(&err.to_string());
            }
        }
    }

    /// Print every transcript entry appended since the last print.
    fn print_new_entries(&mut self) {
        let transcript = self.controller.transcript();
        for entry in &transcript[self.printed..] {
            output::print_entry(entry);
        }
        self.printed = transcript.len();
    }
}

fn thinking_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(120));
    spinner
}
