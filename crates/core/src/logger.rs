//! User-facing status reporting
//!
//! Adapters report progress through the [`Reporter`] port. [`ConsoleReporter`]
//! is the terminal implementation; diagnostic detail goes to `tracing` instead.

use colored::*;

pub trait Reporter {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn success(&self, message: &str);
}

/// Colored terminal output
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{} {}", "-->".cyan().bold(), message.cyan());
    }

    fn warn(&self, message: &str) {
        println!("{}", message.yellow());
    }

    fn success(&self, message: &str) {
        println!("{} {}", "✓".green().bold(), message.green());
    }
}
