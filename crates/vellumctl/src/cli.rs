//! Command-line interface.
//!
//! `vellumctl` with no subcommand starts the interactive session; the
//! subcommands cover the one-shot equivalents of everything the REPL does.

use clap::{Parser, Subcommand, ValueEnum};
use vellum_common::wire::{AnalysisKind, AskMode};

#[derive(Parser)]
#[command(name = "vellumctl")]
#[command(about = "Chat with a document question-answering backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Backend base URL, overriding config and environment.
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check backend connectivity
    Status,

    /// List the documents the backend serves
    Docs,

    /// Ask the backend to re-scan its source folder
    Reload,

    /// Ask a one-shot question against all documents
    Ask {
        /// The question text
        question: Vec<String>,

        /// Question mode
        #[arg(long, value_enum, default_value_t = ModeArg::Normal)]
        mode: ModeArg,
    },

    /// Run a whole-collection analysis
    Analyze {
        /// Analysis flavor
        #[arg(value_enum)]
        kind: AnalysisArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Normal,
    Analysis,
}

impl From<ModeArg> for AskMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Normal => AskMode::Normal,
            ModeArg::Analysis => AskMode::Analysis,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AnalysisArg {
    Connections,
    Insights,
    Themes,
}

impl From<AnalysisArg> for AnalysisKind {
    fn from(kind: AnalysisArg) -> Self {
        match kind {
            AnalysisArg::Connections => AnalysisKind::Connections,
            AnalysisArg::Insights => AnalysisKind::Insights,
            AnalysisArg::Themes => AnalysisKind::Themes,
        }
    }
}
