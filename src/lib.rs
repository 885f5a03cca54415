//! Paramkit - Environment diagnostics and tool runner for parametric design toolkits.
//!
//! Paramkit verifies that a parametric-design toolkit is correctly wired into
//! the shell environment (the `PARAMKIT_HOME` variable, the project directory
//! it points at, and the tool modules under it) and runs the toolkit's
//! geometry-agnostic tools from the command line.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`environment`] - Readiness check, environment sources, search path
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Tool manifest discovery and resolution
//! - [`tools`] - Built-in tools (panelizer, fenestration, twister)
//! - [`ui`] - Terminal output, themes, and tables
//!
//! # Example
//!
//! ```
//! use paramkit::environment::{run_check, MapEnv, SearchPath};
//!
//! // An empty environment fails the check with an actionable message
//! let env = MapEnv::default();
//! let mut search_path = SearchPath::new();
//! let report = run_check(&env, &mut search_path);
//! assert!(!report.path_found);
//! assert!(report.message.contains("PARAMKIT_HOME"));
//! ```

pub mod cli;
pub mod environment;
pub mod error;
pub mod registry;
pub mod tools;
pub mod ui;

pub use error::{ParamkitError, Result};

/// The toolkit version manifests are resolved against.
pub const TOOLKIT_VERSION: &str = env!("CARGO_PKG_VERSION");
