//! Readiness check command implementation.
//!
//! The `paramkit check` command runs the environment readiness check against
//! the real process environment and displays the result. It is the CLI
//! rendition of the toolkit's diagnostic graph: one synchronous check, one
//! textual status.

use crate::cli::args::CheckArgs;
use crate::environment::{run_check, ProcessEnv, SearchPath};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // The search path lives for the process; the CLI process ends right
        // after the check, so a fresh one per invocation is equivalent to the
        // host-session behavior.
        let mut search_path = SearchPath::new();
        let report = run_check(&ProcessEnv, &mut search_path);

        if self.args.json {
            ui.message(&serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?);
            return if report.is_ready() {
                Ok(CommandResult::success())
            } else {
                Ok(CommandResult::failure(1))
            };
        }

        if report.is_ready() {
            ui.success(&report.message);
            if let Some(root) = &report.path_value {
                ui.key_value("Toolkit root", &root.display().to_string());
            }
            if ui.output_mode().shows_detail() {
                ui.show_header("Tool modules");
                for name in &report.tools {
                    ui.message(name);
                }
            } else {
                ui.message(&format!(
                    "Tool modules: {} ({})",
                    report.tools.len(),
                    report.tools.join(", ")
                ));
            }
            Ok(CommandResult::success())
        } else {
            ui.error(&report.message);
            Ok(CommandResult::failure(1))
        }
    }
}
