//! Terminal yes/no confirmation.

use console::{style, Term};

use crate::selection::ConfirmPrompt;

/// Asks on the terminal; anything but "y"/"yes" means no.
pub struct ConsolePrompt {
    term: Term,
}

impl ConsolePrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmPrompt for ConsolePrompt {
    fn confirm(&mut self, message: &str) -> bool {
        if !self.term.is_term() {
            tracing::warn!("No terminal to ask for confirmation, answering no");
            return false;
        }

        let question = format!("{} {} [y/N] ", style("CONFIRM").yellow().bold(), message);
        if let Err(e) = self.term.write_str(&question) {
            tracing::warn!("Failed to write prompt: {}", e);
            return false;
        }

        match self.term.read_line() {
            Ok(answer) => is_yes(&answer),
            Err(e) => {
                tracing::warn!("Failed to read answer: {}", e);
                false
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
