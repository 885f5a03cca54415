//! Tool manifest discovery and resolution.
//!
//! Each tool module in a toolkit project is a directory under `<root>/tools/`
//! carrying a `tool.yml` manifest. Resolution parses the manifests, gates
//! them on the toolkit version they require, and binds each entry point to
//! its built-in implementation.

pub mod discovery;
pub mod manifest;
pub mod resolver;

pub use discovery::discover_manifests;
pub use manifest::{ToolManifest, MANIFEST_FILE};
pub use resolver::{RegisteredTool, ToolRegistry};
