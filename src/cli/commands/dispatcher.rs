//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::environment::{EnvSource, ProcessEnv, TOOLKIT_HOME_VAR};
use crate::error::{ParamkitError, Result};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_override: Option<PathBuf>,
}

impl CommandDispatcher {
    /// Create a new dispatcher. `project_override` takes precedence over the
    /// toolkit path variable for commands that need a project root.
    pub fn new(project_override: Option<PathBuf>) -> Self {
        Self { project_override }
    }

    /// Resolve the toolkit project root for list/run/init.
    ///
    /// The `--project` flag wins; otherwise the toolkit path variable is
    /// consulted, with the same failure classes as the readiness check.
    pub fn resolve_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.project_override {
            if root.is_dir() {
                return Ok(root.clone());
            }
            return Err(ParamkitError::PathNotFound { path: root.clone() });
        }

        let value = ProcessEnv
            .get(TOOLKIT_HOME_VAR)
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ParamkitError::MissingVariable {
                variable: TOOLKIT_HOME_VAR.to_string(),
            })?;

        let root = PathBuf::from(value);
        if root.is_dir() {
            Ok(root)
        } else {
            Err(ParamkitError::PathNotFound { path: root })
        }
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                let cmd = super::check::CheckCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(self.resolve_root()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Run(args)) => {
                let cmd = super::run::RunCommand::new(self.resolve_root()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Init(args)) => {
                let cmd = super::init::InitCommand::new(self.resolve_root()?, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                // Default to the readiness check
                let cmd = super::check::CheckCommand::new(CheckArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
