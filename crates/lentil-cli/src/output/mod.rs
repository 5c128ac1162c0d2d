//! Terminal output formatting.
//!
//! Keeps command output consistent across subcommands: status glyphs are
//! colored when both stdout and stderr are terminals, plain otherwise, and
//! the NO_COLOR environment variable is always respected.

use std::env;
use std::io::{self, IsTerminal};

/// Output handler for consistent terminal formatting
pub struct OutputHandler {
    colored: bool,
}

impl OutputHandler {
    /// Create a handler with automatic color detection
    pub fn new() -> Self {
        Self {
            colored: detect_colors(),
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        println!("{}", self.paint("2", message));
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {}", self.paint("32", "✓"), message);
    }

    /// Print an error message
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", self.paint("31", "✗"), message);
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.colored {
            format!("\x1b[{}m{}\x1b[0m", code, text)
        } else {
            text.to_string()
        }
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Colors are off when NO_COLOR is set or either stream is not a terminal
fn detect_colors() -> bool {
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    io::stderr().is_terminal() && io::stdout().is_terminal()
}
