use colored::Colorize;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum RunnerError {
    MissingBaseline {
        test_name: String,
        expected: PathBuf,
    },
    ToolFailure {
        tool: String,
        code: i32,
    },
    SpawnFailure {
        tool: String,
        source: io::Error,
    },
    OutputMismatch {
        test_name: String,
        expected: PathBuf,
        actual: PathBuf,
    },
    Io {
        operation: String,
        path: Option<PathBuf>,
        source: io::Error,
    },
    Other(anyhow::Error),
}

impl RunnerError {
    pub fn missing_baseline(test_name: impl Into<String>, expected: impl Into<PathBuf>) -> Self {
        Self::MissingBaseline {
            test_name: test_name.into(),
            expected: expected.into(),
        }
    }

    pub fn tool_failure(tool: impl Into<String>, code: i32) -> Self {
        Self::ToolFailure {
            tool: tool.into(),
            code,
        }
    }

    pub fn spawn_failure(tool: impl Into<String>, source: io::Error) -> Self {
        Self::SpawnFailure {
            tool: tool.into(),
            source,
        }
    }

    pub fn output_mismatch(
        test_name: impl Into<String>,
        expected: impl Into<PathBuf>,
        actual: impl Into<PathBuf>,
    ) -> Self {
        Self::OutputMismatch {
            test_name: test_name.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn io(operation: impl Into<String>, path: Option<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path,
            source,
        }
    }
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBaseline {
                test_name,
                expected,
            } => {
                writeln!(
                    f,
                    "{} Test '{}' is missing expected output",
                    "✗".red().bold(),
                    test_name.yellow()
                )?;
                writeln!(f, "  {} Expected file: {}", "→".blue(), expected.display())?;
                write!(
                    f,
                    "  {} Run again with {} to record a baseline",
                    "→".blue(),
                    "--generate".cyan()
                )
            }
            Self::ToolFailure { tool, code } => {
                write!(
                    f,
                    "{} {} failed with return code {}",
                    "✗".red().bold(),
                    tool.yellow(),
                    code
                )
            }
            Self::SpawnFailure { tool, source } => {
                writeln!(
                    f,
                    "{} Failed to execute \"{}\"",
                    "✗".red().bold(),
                    tool.yellow()
                )?;
                write!(f, "  {} {}", "→".blue(), source)
            }
            Self::OutputMismatch {
                test_name,
                expected,
                actual,
            } => {
                writeln!(
                    f,
                    "{} Output mismatch for test '{}'",
                    "✗".red().bold(),
                    test_name.yellow()
                )?;
                writeln!(f, "  {} Expected: {}", "→".blue(), expected.display())?;
                writeln!(f, "  {} Actual:   {}", "→".blue(), actual.display())?;
                write!(
                    f,
                    "  {} Update the baseline with {} once the new output is correct",
                    "→".blue(),
                    "--generate".cyan()
                )
            }
            Self::Io {
                operation,
                path,
                source,
            } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                if let Some(path) = path {
                    writeln!(f, "  {} Path: {}", "→".blue(), path.display())?;
                }
                write!(f, "  {} Error: {}", "→".blue(), source)
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for RunnerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SpawnFailure { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<io::Error> for RunnerError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            operation: "unknown".to_string(),
            path: None,
            source: err,
        }
    }
}

impl From<anyhow::Error> for RunnerError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;
