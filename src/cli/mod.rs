//! Command-line interface.
//!
//! This module provides:
//! - [`Cli`] and [`Commands`] argument definitions
//! - [`CommandDispatcher`] for routing subcommands

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
pub use commands::dispatcher::{Command, CommandDispatcher, CommandResult};
