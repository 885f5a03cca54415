//! Init command implementation.
//!
//! The `paramkit init` command scaffolds a toolkit project: one manifest per
//! built-in tool under `tools/`.

use std::fs;
use std::path::PathBuf;

use crate::cli::args::InitArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Manifests written by `paramkit init`: (directory, content).
const SCAFFOLD: &[(&str, &str)] = &[
    (
        "facade_panelizer",
        "name: facade-panelizer\n\
         entry: panelizer\n\
         version: \"0.1.0\"\n\
         description: Generate facade panel IDs in row-major order\n\
         requires:\n\
         \x20 toolkit: \">=0.2\"\n",
    ),
    (
        "adaptive_fenestration",
        "name: adaptive-fenestration\n\
         entry: fenestration\n\
         version: \"0.1.0\"\n\
         description: Size facade openings from per-panel data values\n\
         requires:\n\
         \x20 toolkit: \">=0.2\"\n",
    ),
    (
        "tower_twister",
        "name: tower-twister\n\
         entry: twister\n\
         version: \"0.1.0\"\n\
         description: Create twisted tower floor rings from a closed base polygon\n\
         requires:\n\
         \x20 toolkit: \">=0.2\"\n",
    ),
];

/// The init command implementation.
pub struct InitCommand {
    root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(root: PathBuf, args: InitArgs) -> Self {
        Self { root, args }
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let tools_dir = self.root.join("tools");

        if !self.args.force {
            let existing: Vec<_> = SCAFFOLD
                .iter()
                .map(|(dir, _)| tools_dir.join(dir).join("tool.yml"))
                .filter(|p| p.exists())
                .collect();
            if !existing.is_empty() {
                ui.error(&format!(
                    "Manifests already exist (first: {}). Use --force to overwrite.",
                    existing[0].display()
                ));
                return Ok(CommandResult::failure(1));
            }
        }

        for (dir, content) in SCAFFOLD {
            let tool_dir = tools_dir.join(dir);
            fs::create_dir_all(&tool_dir)?;
            fs::write(tool_dir.join("tool.yml"), content)?;
            ui.message(&format!("Created tools/{}/tool.yml", dir));
        }

        ui.success(&format!(
            "Scaffolded {} tool modules under {}",
            SCAFFOLD.len(),
            tools_dir.display()
        ));
        ui.message("Run `paramkit check` to verify the environment.");

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ToolRegistry;
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn init_scaffolds_resolvable_manifests() {
        let temp = TempDir::new().unwrap();
        let cmd = InitCommand::new(temp.path().to_path_buf(), InitArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Scaffolded 3 tool modules"));

        // Scaffolded manifests must resolve against the current toolkit
        let registry = ToolRegistry::resolve(temp.path(), crate::TOOLKIT_VERSION).unwrap();
        assert_eq!(registry.len(), 3);
        let names: Vec<_> = registry.names().collect();
        assert!(names.contains(&"facade-panelizer"));
        assert!(names.contains(&"adaptive-fenestration"));
        assert!(names.contains(&"tower-twister"));
    }

    #[test]
    fn init_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let cmd = InitCommand::new(temp.path().to_path_buf(), InitArgs::default());
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert!(ui.has_error("already exist"));
    }

    #[test]
    fn init_force_overwrites() {
        let temp = TempDir::new().unwrap();
        let cmd = InitCommand::new(temp.path().to_path_buf(), InitArgs::default());
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        let cmd = InitCommand::new(temp.path().to_path_buf(), InitArgs { force: true });
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
    }
}
