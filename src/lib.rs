//! Regression test driver for command-line tools.
//!
//! One invocation runs one tool, captures its stdout into a file, and either
//! compares the capture against a stored `-expected` baseline or, in
//! generate mode, records it as the new baseline. See the `retest` binary
//! for the command-line surface.

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod logging;
pub mod runner;

// Re-exports for the binary and the integration tests
pub use cli::Cli;
pub use config::{RunConfig, TestPaths};
pub use error::{Result, RunnerError};
pub use runner::{TestRunner, ToolLaunch};
