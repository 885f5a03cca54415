//! Run command implementation.
//!
//! The `paramkit run` command executes one tool module through the standard
//! runner and prints its JSON output.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::cli::args::RunArgs;
use crate::error::{ParamkitError, Result};
use crate::registry::ToolRegistry;
use crate::tools::run_tool;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    root: PathBuf,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(root: PathBuf, args: RunArgs) -> Self {
        Self { root, args }
    }

    /// Load tool parameters from `--params`, `--params-file`, or default to
    /// an empty object.
    fn load_params(&self) -> Result<Value> {
        let raw = if let Some(inline) = &self.args.params {
            inline.clone()
        } else if let Some(path) = &self.args.params_file {
            fs::read_to_string(path)?
        } else {
            "{}".to_string()
        };

        serde_json::from_str(&raw).map_err(|e| ParamkitError::InvalidParams {
            tool: self.args.tool.clone(),
            message: format!("parameters are not valid JSON: {}", e),
        })
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = match ToolRegistry::resolve(&self.root, crate::TOOLKIT_VERSION) {
            Ok(r) => r,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        let registered = match registry.get(&self.args.tool) {
            Ok(t) => t,
            Err(e) => {
                ui.error(&e.to_string());
                if !registry.is_empty() {
                    let names: Vec<_> = registry.names().collect();
                    ui.message(&format!("Available tools: {}", names.join(", ")));
                }
                return Ok(CommandResult::failure(1));
            }
        };

        let params = match self.load_params() {
            Ok(p) => p,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
        };

        tracing::debug!(tool = %self.args.tool, "running tool");
        let run = run_tool(registered.tool.as_ref(), params);

        match run.output {
            Some(output) => {
                ui.message(&serde_json::to_string_pretty(&output).map_err(anyhow::Error::from)?);
                Ok(CommandResult::success())
            }
            None => {
                for error in &run.errors {
                    ui.error(error);
                }
                Ok(CommandResult::failure(1))
            }
        }
    }
}
