//! Tool manifest schema and parsing.
//!
//! A manifest declares what the tool is called, which built-in entry point
//! implements it, and which toolkit versions it works with:
//!
//! ```yaml
//! name: facade-panelizer
//! entry: panelizer
//! version: "0.2.0"
//! description: Row-major panel ID generation
//! requires:
//!   toolkit: ">=0.1"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ParamkitError, Result};

/// Manifest file name inside each tool directory.
pub const MANIFEST_FILE: &str = "tool.yml";

/// A parsed `tool.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolManifest {
    /// User-facing tool name, unique within a toolkit.
    pub name: String,

    /// Built-in entry point implementing this tool.
    pub entry: String,

    /// Tool module version.
    pub version: String,

    /// One-line description shown by `paramkit list`.
    #[serde(default)]
    pub description: String,

    /// Compatibility requirements.
    #[serde(default)]
    pub requires: Requirements,
}

/// Compatibility requirements declared by a manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Requirements {
    /// Semver range the toolkit version must satisfy, e.g. `">=0.1"`.
    #[serde(default)]
    pub toolkit: Option<String>,
}

impl ToolManifest {
    /// Load and parse a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| ParamkitError::ManifestParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// Parse manifest YAML; `source_path` is carried for error reporting.
    pub fn parse(content: &str, source_path: &Path) -> Result<Self> {
        let manifest: ToolManifest =
            serde_yaml::from_str(content).map_err(|e| ParamkitError::ManifestParse {
                path: source_path.to_path_buf(),
                message: e.to_string(),
            })?;

        if manifest.name.trim().is_empty() {
            return Err(ParamkitError::ManifestParse {
                path: source_path.to_path_buf(),
                message: "name must not be empty".to_string(),
            });
        }
        if manifest.entry.trim().is_empty() {
            return Err(ParamkitError::ManifestParse {
                path: source_path.to_path_buf(),
                message: "entry must not be empty".to_string(),
            });
        }

        Ok(manifest)
    }

    /// Check this manifest's toolkit requirement against a toolkit version.
    ///
    /// A manifest without a `requires.toolkit` range accepts any toolkit.
    pub fn check_toolkit_version(&self, toolkit_version: &str) -> Result<()> {
        let Some(range) = self.requires.toolkit.as_deref() else {
            return Ok(());
        };

        let req = semver::VersionReq::parse(range).map_err(|e| ParamkitError::ManifestParse {
            path: Path::new(MANIFEST_FILE).to_path_buf(),
            message: format!("invalid requires.toolkit range '{}': {}", range, e),
        })?;
        let current = semver::Version::parse(toolkit_version)
            .map_err(|e| ParamkitError::Other(anyhow::anyhow!("bad toolkit version: {}", e)))?;

        if req.matches(&current) {
            Ok(())
        } else {
            Err(ParamkitError::IncompatibleToolkit {
                tool: self.name.clone(),
                required: range.to_string(),
                current: toolkit_version.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn parse(content: &str) -> Result<ToolManifest> {
        ToolManifest::parse(content, &PathBuf::from("/toolkit/tools/t/tool.yml"))
    }

    #[test]
    fn parses_full_manifest() {
        let m = parse(
            r#"
name: facade-panelizer
entry: panelizer
version: "0.2.0"
description: Row-major panel ID generation
requires:
  toolkit: ">=0.1"
"#,
        )
        .unwrap();

        assert_eq!(m.name, "facade-panelizer");
        assert_eq!(m.entry, "panelizer");
        assert_eq!(m.version, "0.2.0");
        assert_eq!(m.requires.toolkit.as_deref(), Some(">=0.1"));
    }

    #[test]
    fn description_and_requires_are_optional() {
        let m = parse("name: t\nentry: twister\nversion: \"1.0.0\"\n").unwrap();
        assert!(m.description.is_empty());
        assert!(m.requires.toolkit.is_none());
    }

    #[test]
    fn invalid_yaml_is_manifest_parse_error() {
        let err = parse("name: [unterminated").unwrap_err();
        assert!(matches!(err, ParamkitError::ManifestParse { .. }));
        assert!(err.to_string().contains("tool.yml"));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse("name: t\nentry: twister\nversion: \"1.0.0\"\ncolour: blue\n").unwrap_err();
        assert!(matches!(err, ParamkitError::ManifestParse { .. }));
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = parse("name: \"\"\nentry: twister\nversion: \"1.0.0\"\n").unwrap_err();
        assert!(err.to_string().contains("name must not be empty"));
    }

    #[test]
    fn empty_entry_is_rejected() {
        let err = parse("name: t\nentry: \"  \"\nversion: \"1.0.0\"\n").unwrap_err();
        assert!(err.to_string().contains("entry must not be empty"));
    }

    #[test]
    fn missing_version_is_rejected() {
        let err = parse("name: t\nentry: twister\n").unwrap_err();
        assert!(matches!(err, ParamkitError::ManifestParse { .. }));
    }

    #[test]
    fn toolkit_requirement_accepts_matching_version() {
        let m = parse(
            "name: t\nentry: twister\nversion: \"1.0.0\"\nrequires:\n  toolkit: \">=0.1\"\n",
        )
        .unwrap();
        assert!(m.check_toolkit_version("0.2.0").is_ok());
    }

    #[test]
    fn toolkit_requirement_rejects_old_toolkit() {
        let m = parse(
            "name: t\nentry: twister\nversion: \"1.0.0\"\nrequires:\n  toolkit: \">=9.0\"\n",
        )
        .unwrap();
        let err = m.check_toolkit_version("0.2.0").unwrap_err();
        assert!(matches!(err, ParamkitError::IncompatibleToolkit { .. }));
    }

    #[test]
    fn absent_requirement_accepts_any_toolkit() {
        let m = parse("name: t\nentry: twister\nversion: \"1.0.0\"\n").unwrap();
        assert!(m.check_toolkit_version("0.0.1").is_ok());
    }

    #[test]
    fn garbage_requirement_range_is_an_error() {
        let m = parse(
            "name: t\nentry: twister\nversion: \"1.0.0\"\nrequires:\n  toolkit: \"not-a-range\"\n",
        )
        .unwrap();
        assert!(m.check_toolkit_version("0.2.0").is_err());
    }
}
