//! Built-in tools.
//!
//! This module provides:
//! - [`Tool`] trait for tool implementations
//! - [`run_tool`] standard runner that converts failures to messages
//! - The built-in entry point table used by manifest resolution
//!
//! Tools are geometry-agnostic by design: they produce IDs, scale factors,
//! and transform data that the host environment wires to real geometry.

pub mod fenestration;
pub mod panelizer;
pub mod twister;

use serde_json::Value;

use crate::error::Result;

/// A runnable tool with JSON parameters and output.
pub trait Tool {
    /// Entry point identifier, as referenced by manifests.
    fn entry(&self) -> &'static str;

    /// One-line summary of what the tool does.
    fn summary(&self) -> &'static str;

    /// Run the tool. Implementations validate their own parameters and
    /// return `InvalidParams` rather than panicking on bad input.
    fn run(&self, params: Value) -> Result<Value>;
}

/// Entry points with built-in implementations, in stable order.
pub const BUILTIN_ENTRIES: &[&str] = &["fenestration", "panelizer", "twister"];

/// Look up the built-in implementation for an entry point.
pub fn builtin(entry: &str) -> Option<Box<dyn Tool>> {
    match entry {
        "fenestration" => Some(Box::new(fenestration::Fenestration)),
        "panelizer" => Some(Box::new(panelizer::Panelizer)),
        "twister" => Some(Box::new(twister::Twister)),
        _ => None,
    }
}

/// Outcome of running a tool through the standard runner.
#[derive(Debug, Clone)]
pub struct ToolRun {
    /// Tool output on success.
    pub output: Option<Value>,
    /// Rendered errors on failure; empty on success.
    pub errors: Vec<String>,
}

impl ToolRun {
    /// Whether the run produced output.
    pub fn succeeded(&self) -> bool {
        self.output.is_some() && self.errors.is_empty()
    }
}

/// Standard runner for tools.
///
/// Success gives the output and an empty error list; failure gives no output
/// and the error rendered as text. Nothing escapes the runner boundary.
pub fn run_tool(tool: &dyn Tool, params: Value) -> ToolRun {
    match tool.run(params) {
        Ok(output) => ToolRun {
            output: Some(output),
            errors: Vec::new(),
        },
        Err(err) => {
            tracing::debug!(tool = tool.entry(), error = %err, "tool run failed");
            ToolRun {
                output: None,
                errors: vec![err.to_string()],
            }
        }
    }
}
