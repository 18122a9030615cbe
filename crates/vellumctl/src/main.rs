//! vellumctl — terminal client for a document question-answering backend.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vellum_common::ClientConfig;

use vellumctl::cli::{Cli, Commands};
use vellumctl::{commands, repl};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with transcript output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::load();
    if let Some(url) = cli.backend_url {
        config.backend_url = url;
    }

    match cli.command {
        None => repl::run(config).await,
        Some(Commands::Status) => commands::status(&config).await,
        Some(Commands::Docs) => commands::docs(&config).await,
        Some(Commands::Reload) => commands::reload(&config).await,
        Some(Commands::Ask { question, mode }) => {
            commands::ask(&config, &question.join(" "), mode.into()).await
        }
        Some(Commands::Analyze { kind }) => commands::analyze(&config, kind.into()).await,
    }
}
