//! Environment readiness checking.
//!
//! This module provides:
//! - [`EnvSource`] for injectable environment variable lookup
//! - [`SearchPath`] for the process-wide module search locations
//! - [`run_check`] which produces a [`ReadinessReport`]
//!
//! The check is deliberately pure over its inputs: callers pass the
//! environment source and the search path in, so tests never touch the real
//! process environment.

pub mod readiness;
pub mod search_path;
pub mod source;

pub use readiness::{run_check, ReadinessFailure, ReadinessReport, TOOLKIT_HOME_VAR};
pub use search_path::SearchPath;
pub use source::{EnvSource, MapEnv, ProcessEnv};
