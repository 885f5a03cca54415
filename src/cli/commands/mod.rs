//! CLI command implementations.

pub mod check;
pub mod completions;
pub mod dispatcher;
pub mod init;
pub mod list;
pub mod run;
