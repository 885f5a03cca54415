//! List command implementation.
//!
//! The `paramkit list` command shows the tool modules in a toolkit project.

use std::path::PathBuf;

use serde_json::json;

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::registry::ToolRegistry;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    root: PathBuf,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(root: PathBuf, args: ListArgs) -> Self {
        Self { root, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = match ToolRegistry::resolve(&self.root, crate::TOOLKIT_VERSION) {
            Ok(r) => r,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        if self.args.json {
            let tools: Vec<_> = registry
                .iter()
                .map(|t| {
                    json!({
                        "name": t.manifest.name,
                        "entry": t.manifest.entry,
                        "version": t.manifest.version,
                        "description": t.manifest.description,
                    })
                })
                .collect();
            ui.message(
                &serde_json::to_string_pretty(&json!({ "tools": tools }))
                    .map_err(anyhow::Error::from)?,
            );
            return Ok(CommandResult::success());
        }

        if registry.is_empty() {
            ui.warning(&format!(
                "No tool modules found under {}",
                self.root.join("tools").display()
            ));
            ui.message("Run `paramkit init` to scaffold the built-in tools.");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["Name", "Version", "Entry", "Description"]);
        for tool in registry.iter() {
            table.add_row(vec![
                &tool.manifest.name,
                &tool.manifest.version,
                &tool.manifest.entry,
                &tool.manifest.description,
            ]);
        }
        ui.message(&table.render());

        Ok(CommandResult::success())
    }
}
