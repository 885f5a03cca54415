//! Non-interactive UI for CI and headless environments.
//!
//! Plain line-oriented output with no styling: status to stdout, errors to
//! stderr.

use super::{OutputMode, UserInterface};

/// UI implementation for non-interactive contexts.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn key_value(&mut self, key: &str, value: &str) {
        if self.mode.shows_status() {
            println!("{}: {}", key, value);
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n=== {} ===\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
