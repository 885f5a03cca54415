//! The environment readiness check.
//!
//! Verifies that the toolkit path variable is set, that it points at a
//! readable project directory, and that the tool modules under it can be
//! loaded. Every failure mode is caught at this boundary and folded into the
//! returned [`ReadinessReport`]; nothing propagates past the check.
//!
//! The check is terminal per invocation (no retry) and idempotent: an
//! unchanged environment produces an identical report.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::environment::search_path::SearchPath;
use crate::environment::source::EnvSource;
use crate::error::ParamkitError;
use crate::registry::ToolRegistry;

/// The environment variable holding the toolkit project root.
pub const TOOLKIT_HOME_VAR: &str = "PARAMKIT_HOME";

/// Success message, kept stable for host-side string matching.
const INITIALISED: &str = "Toolkit initialised";

/// Which of the three check conditions failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessFailure {
    /// Variable unset or empty.
    MissingVariable,
    /// Variable set, but the path is not a readable directory.
    PathNotFound,
    /// Directory exists, but tool modules could not be loaded.
    ImportFailure,
}

/// Result of one readiness check invocation.
///
/// Created fresh each run and discarded after display; never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessReport {
    /// Whether the variable was set and the path resolved to a directory.
    pub path_found: bool,
    /// The resolved toolkit root, when the variable was set.
    pub path_value: Option<PathBuf>,
    /// Whether the tool modules under the root loaded cleanly.
    pub modules_importable: bool,
    /// Human-readable status, shown verbatim to the user.
    pub message: String,
    /// Failure classification, `None` on success.
    pub failure: Option<ReadinessFailure>,
    /// Names of the tools that loaded, in discovery order.
    pub tools: Vec<String>,
}

impl ReadinessReport {
    /// Whether the check passed.
    pub fn is_ready(&self) -> bool {
        self.failure.is_none()
    }

    fn missing_variable() -> Self {
        let err = ParamkitError::MissingVariable {
            variable: TOOLKIT_HOME_VAR.to_string(),
        };
        Self {
            path_found: false,
            path_value: None,
            modules_importable: false,
            message: err.to_string(),
            failure: Some(ReadinessFailure::MissingVariable),
            tools: Vec::new(),
        }
    }

    fn path_not_found(path: PathBuf) -> Self {
        let err = ParamkitError::PathNotFound { path: path.clone() };
        Self {
            path_found: false,
            path_value: Some(path),
            modules_importable: false,
            message: err.to_string(),
            failure: Some(ReadinessFailure::PathNotFound),
            tools: Vec::new(),
        }
    }

    fn import_failure(path: PathBuf, underlying: &ParamkitError) -> Self {
        Self {
            path_found: true,
            path_value: Some(path),
            modules_importable: false,
            message: underlying.to_string(),
            failure: Some(ReadinessFailure::ImportFailure),
            tools: Vec::new(),
        }
    }

    fn ready(path: PathBuf, tools: Vec<String>) -> Self {
        Self {
            path_found: true,
            path_value: Some(path),
            modules_importable: true,
            message: INITIALISED.to_string(),
            failure: None,
            tools,
        }
    }
}

/// Run the readiness check.
///
/// Reads [`TOOLKIT_HOME_VAR`] from `env`, verifies the path, front-inserts it
/// into `search_path`, and resolves the tool modules under it. The search
/// path mutation sticks for the life of the process and is not rolled back on
/// import failure, matching the host-session semantics of the original
/// toolkit.
pub fn run_check(env: &dyn EnvSource, search_path: &mut SearchPath) -> ReadinessReport {
    let Some(raw) = env.get(TOOLKIT_HOME_VAR) else {
        tracing::debug!(variable = TOOLKIT_HOME_VAR, "toolkit variable unset");
        return ReadinessReport::missing_variable();
    };
    if raw.trim().is_empty() {
        tracing::debug!(variable = TOOLKIT_HOME_VAR, "toolkit variable empty");
        return ReadinessReport::missing_variable();
    }

    let root = PathBuf::from(raw);
    if !is_readable_dir(&root) {
        tracing::debug!(path = %root.display(), "toolkit path missing or unreadable");
        return ReadinessReport::path_not_found(root);
    }

    search_path.insert_front(&root);

    match ToolRegistry::resolve(&root, crate::TOOLKIT_VERSION) {
        Ok(registry) if registry.is_empty() => {
            let err = ParamkitError::ImportFailure {
                module: "tools".to_string(),
                message: format!("no tool modules found under {}", root.join("tools").display()),
            };
            ReadinessReport::import_failure(root, &err)
        }
        Ok(registry) => {
            let tools = registry.names().map(String::from).collect();
            tracing::debug!(path = %root.display(), "toolkit ready");
            ReadinessReport::ready(root, tools)
        }
        Err(err) => {
            tracing::debug!(error = %err, "tool modules failed to load");
            ReadinessReport::import_failure(root, &err)
        }
    }
}

/// Whether `path` is a directory we can actually list.
fn is_readable_dir(path: &Path) -> bool {
    path.is_dir() && std::fs::read_dir(path).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::source::MapEnv;
    use std::fs;
    use tempfile::TempDir;

    fn toolkit_with_tool(manifest: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let tool_dir = temp.path().join("tools").join("sample");
        fs::create_dir_all(&tool_dir).unwrap();
        fs::write(tool_dir.join("tool.yml"), manifest).unwrap();
        temp
    }

    const PANELIZER_MANIFEST: &str = r#"
name: facade-panelizer
entry: panelizer
version: "0.2.0"
description: Row-major panel ID generation
"#;

    #[test]
    fn unset_variable_is_missing_variable() {
        let env = MapEnv::new();
        let mut sp = SearchPath::new();
        let report = run_check(&env, &mut sp);

        assert_eq!(report.failure, Some(ReadinessFailure::MissingVariable));
        assert!(!report.path_found);
        assert!(report.path_value.is_none());
        assert!(report.message.contains("export PARAMKIT_HOME="));
        assert!(sp.is_empty());
    }

    #[test]
    fn empty_variable_is_missing_variable() {
        let env = MapEnv::with(TOOLKIT_HOME_VAR, "   ");
        let mut sp = SearchPath::new();
        let report = run_check(&env, &mut sp);

        assert_eq!(report.failure, Some(ReadinessFailure::MissingVariable));
    }

    #[test]
    fn nonexistent_path_is_path_not_found() {
        let env = MapEnv::with(TOOLKIT_HOME_VAR, "/tmp/doesnotexist");
        let mut sp = SearchPath::new();
        let report = run_check(&env, &mut sp);

        assert_eq!(report.failure, Some(ReadinessFailure::PathNotFound));
        assert!(!report.path_found);
        assert_eq!(report.path_value, Some(PathBuf::from("/tmp/doesnotexist")));
        assert!(report.message.contains("/tmp/doesnotexist"));
    }

    #[test]
    fn file_path_is_path_not_found() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-dir");
        fs::write(&file, "x").unwrap();

        let env = MapEnv::with(TOOLKIT_HOME_VAR, file.to_str().unwrap());
        let mut sp = SearchPath::new();
        let report = run_check(&env, &mut sp);

        assert_eq!(report.failure, Some(ReadinessFailure::PathNotFound));
    }

    #[test]
    fn valid_dir_without_tools_is_import_failure() {
        let temp = TempDir::new().unwrap();
        let env = MapEnv::with(TOOLKIT_HOME_VAR, temp.path().to_str().unwrap());
        let mut sp = SearchPath::new();
        let report = run_check(&env, &mut sp);

        assert_eq!(report.failure, Some(ReadinessFailure::ImportFailure));
        assert!(report.path_found);
        assert!(!report.modules_importable);
        assert!(report.message.contains("no tool modules found"));
        // The search path mutation is not rolled back on import failure
        assert!(sp.contains(temp.path()));
    }

    #[test]
    fn broken_manifest_is_import_failure() {
        let temp = toolkit_with_tool("name: [unterminated");
        let env = MapEnv::with(TOOLKIT_HOME_VAR, temp.path().to_str().unwrap());
        let mut sp = SearchPath::new();
        let report = run_check(&env, &mut sp);

        assert_eq!(report.failure, Some(ReadinessFailure::ImportFailure));
        assert!(report.message.contains("tool.yml"));
    }

    #[test]
    fn unknown_entry_is_import_failure() {
        let temp = toolkit_with_tool("name: x\nentry: mystery\nversion: \"1.0.0\"\n");
        let env = MapEnv::with(TOOLKIT_HOME_VAR, temp.path().to_str().unwrap());
        let mut sp = SearchPath::new();
        let report = run_check(&env, &mut sp);

        assert_eq!(report.failure, Some(ReadinessFailure::ImportFailure));
        assert!(report.message.contains("mystery"));
    }

    #[test]
    fn valid_toolkit_initialises() {
        let temp = toolkit_with_tool(PANELIZER_MANIFEST);
        let env = MapEnv::with(TOOLKIT_HOME_VAR, temp.path().to_str().unwrap());
        let mut sp = SearchPath::new();
        let report = run_check(&env, &mut sp);

        assert!(report.is_ready());
        assert_eq!(report.message, "Toolkit initialised");
        assert!(report.path_found);
        assert!(report.modules_importable);
        assert_eq!(report.tools, vec!["facade-panelizer".to_string()]);
        assert!(sp.contains(temp.path()));
    }

    #[test]
    fn rerun_with_unchanged_environment_is_identical() {
        let temp = toolkit_with_tool(PANELIZER_MANIFEST);
        let env = MapEnv::with(TOOLKIT_HOME_VAR, temp.path().to_str().unwrap());
        let mut sp = SearchPath::new();

        let first = run_check(&env, &mut sp);
        let second = run_check(&env, &mut sp);

        assert_eq!(first.message, second.message);
        assert_eq!(first.failure, second.failure);
        assert_eq!(first.tools, second.tools);
        // Idempotent search path mutation
        assert_eq!(sp.len(), 1);
    }

    #[test]
    fn report_serializes_failure_kind() {
        let env = MapEnv::new();
        let mut sp = SearchPath::new();
        let report = run_check(&env, &mut sp);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["failure"], "missing_variable");
        assert_eq!(json["path_found"], false);
    }
}
