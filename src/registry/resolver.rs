//! Manifest resolution.
//!
//! Resolution turns discovered manifests into a [`ToolRegistry`]: each
//! manifest is parsed, gated on the toolkit version it requires, and bound to
//! the built-in implementation behind its entry point. The first error aborts
//! resolution; the readiness check surfaces it as an import failure.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{ParamkitError, Result};
use crate::registry::discovery::discover_manifests;
use crate::registry::manifest::ToolManifest;
use crate::tools::{self, Tool};

/// A resolved tool: manifest plus its built-in implementation.
pub struct RegisteredTool {
    /// The parsed manifest.
    pub manifest: ToolManifest,
    /// Where the manifest was found.
    pub manifest_path: PathBuf,
    /// The implementation bound to the manifest's entry point.
    pub tool: Box<dyn Tool>,
}

// Box<dyn Tool> rules out derive; render the entry point instead.
impl fmt::Debug for RegisteredTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredTool")
            .field("manifest", &self.manifest)
            .field("manifest_path", &self.manifest_path)
            .field("entry", &self.tool.entry())
            .finish()
    }
}

/// The resolved set of tools for a toolkit project.
pub struct ToolRegistry {
    entries: Vec<RegisteredTool>,
}

impl fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("entries", &self.entries)
            .finish()
    }
}

impl ToolRegistry {
    /// Discover and resolve all tool modules under `root`.
    pub fn resolve(root: &Path, toolkit_version: &str) -> Result<Self> {
        let mut entries: Vec<RegisteredTool> = Vec::new();

        for manifest_path in discover_manifests(root)? {
            let manifest = ToolManifest::load(&manifest_path)?;
            manifest.check_toolkit_version(toolkit_version)?;

            if entries.iter().any(|e| e.manifest.name == manifest.name) {
                return Err(ParamkitError::DuplicateTool {
                    name: manifest.name,
                    path: manifest_path,
                });
            }

            let Some(tool) = tools::builtin(&manifest.entry) else {
                return Err(ParamkitError::UnknownEntry {
                    path: manifest_path,
                    entry: manifest.entry,
                });
            };

            tracing::debug!(
                name = %manifest.name,
                entry = %manifest.entry,
                "tool module loaded"
            );
            entries.push(RegisteredTool {
                manifest,
                manifest_path,
                tool,
            });
        }

        Ok(Self { entries })
    }

    /// Look up a tool by its manifest name.
    pub fn get(&self, name: &str) -> Result<&RegisteredTool> {
        self.entries
            .iter()
            .find(|e| e.manifest.name == name)
            .ok_or_else(|| ParamkitError::UnknownTool {
                name: name.to_string(),
            })
    }

    /// Tool names in discovery order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.manifest.name.as_str())
    }

    /// Resolved tools in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredTool> {
        self.entries.iter()
    }

    /// Number of resolved tools.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tools were resolved.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn add_manifest(root: &Path, dir: &str, content: &str) {
        let tool_dir = root.join("tools").join(dir);
        fs::create_dir_all(&tool_dir).unwrap();
        fs::write(tool_dir.join("tool.yml"), content).unwrap();
    }

    fn manifest(name: &str, entry: &str) -> String {
        format!("name: {}\nentry: {}\nversion: \"0.1.0\"\n", name, entry)
    }

    #[test]
    fn resolves_all_builtin_entries() {
        let temp = TempDir::new().unwrap();
        add_manifest(temp.path(), "fen", &manifest("fenestration", "fenestration"));
        add_manifest(temp.path(), "pan", &manifest("facade-panelizer", "panelizer"));
        add_manifest(temp.path(), "twist", &manifest("tower-twister", "twister"));

        let registry = ToolRegistry::resolve(temp.path(), "0.2.0").unwrap();
        assert_eq!(registry.len(), 3);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["fenestration", "facade-panelizer", "tower-twister"]);
    }

    #[test]
    fn empty_project_resolves_to_empty_registry() {
        let temp = TempDir::new().unwrap();
        let registry = ToolRegistry::resolve(temp.path(), "0.2.0").unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn unknown_entry_aborts_resolution() {
        let temp = TempDir::new().unwrap();
        add_manifest(temp.path(), "bad", &manifest("bad-tool", "mystery"));

        let err = ToolRegistry::resolve(temp.path(), "0.2.0").unwrap_err();
        assert!(matches!(err, ParamkitError::UnknownEntry { .. }));
    }

    #[test]
    fn duplicate_names_abort_resolution() {
        let temp = TempDir::new().unwrap();
        add_manifest(temp.path(), "a", &manifest("twin", "panelizer"));
        add_manifest(temp.path(), "b", &manifest("twin", "twister"));

        let err = ToolRegistry::resolve(temp.path(), "0.2.0").unwrap_err();
        assert!(matches!(err, ParamkitError::DuplicateTool { .. }));
    }

    #[test]
    fn version_gate_aborts_resolution() {
        let temp = TempDir::new().unwrap();
        add_manifest(
            temp.path(),
            "future",
            "name: future\nentry: twister\nversion: \"1.0.0\"\nrequires:\n  toolkit: \">=9.0\"\n",
        );

        let err = ToolRegistry::resolve(temp.path(), "0.2.0").unwrap_err();
        assert!(matches!(err, ParamkitError::IncompatibleToolkit { .. }));
    }

    #[test]
    fn get_finds_tool_by_manifest_name() {
        let temp = TempDir::new().unwrap();
        add_manifest(temp.path(), "pan", &manifest("facade-panelizer", "panelizer"));

        let registry = ToolRegistry::resolve(temp.path(), "0.2.0").unwrap();
        let registered = registry.get("facade-panelizer").unwrap();
        assert_eq!(registered.tool.entry(), "panelizer");
        assert!(registered.manifest_path.ends_with("pan/tool.yml"));
    }

    #[test]
    fn registry_debug_output_names_entries() {
        let temp = TempDir::new().unwrap();
        add_manifest(temp.path(), "pan", &manifest("facade-panelizer", "panelizer"));

        let registry = ToolRegistry::resolve(temp.path(), "0.2.0").unwrap();
        let rendered = format!("{:?}", registry);
        assert!(rendered.contains("facade-panelizer"));
        assert!(rendered.contains("panelizer"));
    }

    #[test]
    fn get_unknown_name_is_error() {
        let temp = TempDir::new().unwrap();
        let registry = ToolRegistry::resolve(temp.path(), "0.2.0").unwrap();
        let err = registry.get("ghost").unwrap_err();
        assert!(matches!(err, ParamkitError::UnknownTool { .. }));
    }
}
