//! Terminal display helpers.
//!
//! Every user-facing message goes through this module so the client keeps a
//! consistent voice: colored output on a TTY, plain labels when piped.

use console::Term;
use owo_colors::OwoColorize;

/// Terminal output helper.
#[derive(Debug, Clone, Copy)]
pub struct Ui {
    use_color: bool,
}

impl Ui {
    /// Detect color support from the attached terminal.
    pub fn auto() -> Self {
        Self {
            use_color: Term::stdout().features().colors_supported(),
        }
    }

    /// Force plain output, used for piped/JSON-adjacent modes and tests.
    pub fn plain() -> Self {
        Self { use_color: false }
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    pub fn info(&self, message: &str) {
        println!("{}", message);
    }

    pub fn success(&self, message: &str) {
        if self.use_color {
            println!("{} {}", "✓".green(), message);
        } else {
            println!("OK {}", message);
        }
    }

    pub fn warning(&self, message: &str) {
        if self.use_color {
            println!("{} {}", "⚠".yellow(), message.yellow());
        } else {
            println!("WARNING {}", message);
        }
    }

    pub fn error(&self, message: &str) {
        if self.use_color {
            eprintln!("{} {}", "✗".red(), message.red());
        } else {
            eprintln!("ERROR {}", message);
        }
    }

    /// Section header with a leading blank line for breathing room.
    pub fn section_header(&self, title: &str) {
        println!();
        if self.use_color {
            println!("{}", title.bold());
        } else {
            println!("{}", title);
        }
    }

    pub fn bullet(&self, text: &str) {
        println!("  • {}", text);
    }

    pub fn bullet_list(&self, items: &[&str]) {
        for item in items {
            self.bullet(item);
        }
    }

    /// Dimmed detail line, indented under its parent.
    pub fn detail(&self, text: &str) {
        if self.use_color {
            println!("    {}", text.dimmed());
        } else {
            println!("    {}", text);
        }
    }
}
