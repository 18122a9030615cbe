//! Transcript rendering.
//!
//! Turns transcript entries and formatted answer blocks into terminal
//! output. All styling decisions live here so the managers stay free of
//! presentation concerns.

use owo_colors::OwoColorize;
use vellum_common::format::{format_answer, Block};
use vellum_common::wire::DocumentEntry;

use crate::conversation::Entry;
use crate::session::{Connectivity, SessionState};

/// Print one transcript entry.
pub fn print_entry(entry: &Entry) {
    match entry {
        Entry::User { text, selection, .. } => {
            println!();
            println!("{} {}", "you:".bold().blue(), text);
            if !selection.is_empty() {
                println!(
                    "{}",
                    format!("     ({} document(s) in context)", selection.len()).dimmed()
                );
            }
        }
        Entry::Assistant { text, sources, .. } => {
            println!();
            print_answer(text);
            print_sources(sources);
        }
        Entry::System { text, .. } => {
            println!();
            println!("{} {}", "--".dimmed(), text.green());
        }
    }
}

/// Print a raw answer through the block formatter.
pub fn print_answer(raw: &str) {
    for block in format_answer(raw) {
        print_block(&block);
    }
}

fn print_block(block: &Block) {
    match block {
        Block::Heading { level, text } => match level {
            1 => println!("{}", text.bold().underline()),
            2 => println!("{}", text.bold()),
            _ => println!("{}", text.italic()),
        },
        Block::NumberedItem(text) => println!("  {} {}", "·".dimmed(), text),
        Block::BulletItem(text) => println!("  • {}", text),
        Block::Bold(text) => println!("{}", text.bold()),
        Block::Paragraph(text) => println!("{}", text),
        Block::Blank => println!(),
    }
}

fn print_sources(sources: &[String]) {
    if sources.is_empty() {
        return;
    }
    println!();
    println!("{}", "Sources:".dimmed());
    for source in sources {
        println!("  {} {}", "▪".dimmed(), source.cyan());
    }
}

/// Print the document listing with selection markers.
pub fn print_document_list(documents: &[DocumentEntry], is_selected: impl Fn(&str) -> bool) {
    if documents.is_empty() {
        println!("No documents loaded.");
        return;
    }
    for doc in documents {
        let marker = if is_selected(&doc.name) { "[x]" } else { "[ ]" };
        match doc.size {
            Some(size) => println!(
                "  {} {}  {}",
                marker,
                doc.name,
                format!("({} pages, {} chars)", doc.pages, size).dimmed()
            ),
            None => println!(
                "  {} {}  {}",
                marker,
                doc.name,
                format!("({} pages)", doc.pages).dimmed()
            ),
        }
    }
}

/// Print connectivity plus the latest error, if any.
pub fn print_session_status(session: &SessionState) {
    let status = match session.connectivity() {
        Connectivity::Connected => "connected".green().to_string(),
        Connectivity::Disconnected => "disconnected".red().to_string(),
        Connectivity::Unknown => "unknown".yellow().to_string(),
    };
    println!("Backend: {}", status);
    if let Some(error) = session.last_error() {
        println!("{} {}", "Last error:".dimmed(), error.red());
    }
}
