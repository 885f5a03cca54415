//! Library-level readiness check scenarios.
//!
//! The CLI tests cover the binary surface; these exercise `run_check`
//! directly so failure classification and search-path behaviour are pinned
//! without spawning processes.

use std::fs;

use paramkit::environment::{run_check, MapEnv, ReadinessFailure, SearchPath, TOOLKIT_HOME_VAR};
use tempfile::TempDir;

fn toolkit_with_tool(entry: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    let tool_dir = temp.path().join("tools").join("t");
    fs::create_dir_all(&tool_dir).unwrap();
    fs::write(
        tool_dir.join("tool.yml"),
        format!("name: demo\nentry: {}\nversion: \"0.1.0\"\n", entry),
    )
    .unwrap();
    temp
}

#[test]
fn unset_variable_reports_missing_variable() {
    let env = MapEnv::new();
    let mut search_path = SearchPath::new();

    let report = run_check(&env, &mut search_path);

    assert!(!report.is_ready());
    assert_eq!(report.failure, Some(ReadinessFailure::MissingVariable));
    assert!(report.message.contains(TOOLKIT_HOME_VAR));
    assert!(search_path.is_empty());
}

#[test]
fn dangling_path_reports_path_not_found() {
    let env = MapEnv::with(TOOLKIT_HOME_VAR, "/nonexistent/toolkit");
    let mut search_path = SearchPath::new();

    let report = run_check(&env, &mut search_path);

    assert_eq!(report.failure, Some(ReadinessFailure::PathNotFound));
    assert!(!report.path_found);
    assert!(search_path.is_empty());
}

#[test]
fn ready_toolkit_lists_tools_and_registers_path() {
    let temp = toolkit_with_tool("panelizer");
    let env = MapEnv::with(TOOLKIT_HOME_VAR, temp.path().to_str().unwrap());
    let mut search_path = SearchPath::new();

    let report = run_check(&env, &mut search_path);

    assert!(report.is_ready());
    assert_eq!(report.message, "Toolkit initialised");
    assert_eq!(report.tools, vec!["demo".to_string()]);
    assert!(search_path.contains(temp.path()));
}

#[test]
fn broken_manifest_reports_import_failure_with_path_registered() {
    let temp = TempDir::new().unwrap();
    let tool_dir = temp.path().join("tools").join("bad");
    fs::create_dir_all(&tool_dir).unwrap();
    fs::write(tool_dir.join("tool.yml"), "name: [").unwrap();

    let env = MapEnv::with(TOOLKIT_HOME_VAR, temp.path().to_str().unwrap());
    let mut search_path = SearchPath::new();

    let report = run_check(&env, &mut search_path);

    assert_eq!(report.failure, Some(ReadinessFailure::ImportFailure));
    // Path checks passed before resolution failed, so it stays registered
    assert!(report.path_found);
    assert!(search_path.contains(temp.path()));
}

#[test]
fn unknown_entry_reports_import_failure() {
    let temp = toolkit_with_tool("nonsuch");
    let env = MapEnv::with(TOOLKIT_HOME_VAR, temp.path().to_str().unwrap());
    let mut search_path = SearchPath::new();

    let report = run_check(&env, &mut search_path);

    assert_eq!(report.failure, Some(ReadinessFailure::ImportFailure));
    assert!(report.message.contains("nonsuch"));
}

#[test]
fn repeated_checks_do_not_duplicate_search_path_entries() {
    let temp = toolkit_with_tool("twister");
    let env = MapEnv::with(TOOLKIT_HOME_VAR, temp.path().to_str().unwrap());
    let mut search_path = SearchPath::new();

    let first = run_check(&env, &mut search_path);
    let second = run_check(&env, &mut search_path);

    assert!(first.is_ready());
    assert!(second.is_ready());
    assert_eq!(search_path.len(), 1);
}

#[test]
fn failing_check_after_success_keeps_search_path() {
    let temp = toolkit_with_tool("fenestration");
    let env = MapEnv::with(TOOLKIT_HOME_VAR, temp.path().to_str().unwrap());
    let mut search_path = SearchPath::new();
    assert!(run_check(&env, &mut search_path).is_ready());

    // Variable disappears; the earlier registration is not rolled back
    let env = MapEnv::new();
    let report = run_check(&env, &mut search_path);

    assert_eq!(report.failure, Some(ReadinessFailure::MissingVariable));
    assert!(search_path.contains(temp.path()));
}
