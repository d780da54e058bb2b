//! Run configuration: the immutable options record for one test run and the
//! file layout it implies.
//!
//! The configuration is built exactly once from the parsed command line and
//! the environment, then passed by reference through the rest of the run.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cli::Cli;

/// Environment variable that enables generate mode when `-g` was not passed.
/// Any set, non-empty value counts as true.
pub const GENERATE_ENV_VAR: &str = "TEST_GENERATE";

/// Configuration for one test run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Record a new baseline instead of comparing against one.
    pub generate: bool,
    /// Suffix for `-expected` and `-actual` files, always with one leading dot.
    pub suffix: String,
    /// Root directory holding the expected baselines.
    pub regression_dir: PathBuf,
    /// Tool under test, as given on the command line.
    pub cmd: PathBuf,
    /// Name of the test case, explicit or derived.
    pub test_name: String,
    /// Arguments forwarded to the tool verbatim.
    pub args: Vec<String>,
    pub verbose: bool,
}

/// Returned when no test name was given and none can be derived from the
/// arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestNameRequired;

impl fmt::Display for TestNameRequired {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "test name cannot be deduced from the arguments; specify one with --test"
        )
    }
}

impl std::error::Error for TestNameRequired {}

impl RunConfig {
    /// Build the configuration from the parsed command line and the
    /// environment.
    ///
    /// An explicit `--test` always wins. Without it the name is derived only
    /// when exactly one argument follows the tool; with more arguments there
    /// is no obvious candidate and the caller has to be explicit.
    pub fn from_cli(cli: Cli) -> Result<Self, TestNameRequired> {
        let generate = cli.generate || generate_from_env();
        let suffix = normalize_suffix(&cli.suffix);
        let regression_dir = cli.regression_dir.unwrap_or_else(default_regression_dir);

        let test_name = match cli.test {
            Some(name) => name,
            None if cli.args.len() == 1 => {
                derive_test_name(&cli.args[0]).ok_or(TestNameRequired)?
            }
            None => return Err(TestNameRequired),
        };

        Ok(Self {
            generate,
            suffix,
            regression_dir,
            cmd: cli.tool,
            test_name,
            args: cli.args,
            verbose: cli.verbose,
        })
    }

    /// File name of the tool under test; names the baseline and output
    /// directories and shows up in diagnostics.
    pub fn tool_name(&self) -> String {
        self.cmd
            .file_name()
            .unwrap_or(self.cmd.as_os_str())
            .to_string_lossy()
            .into_owned()
    }

    /// Resolve the file layout for this test case.
    pub fn paths(&self) -> TestPaths {
        let tool_name = self.tool_name();
        let expected_dir = self.regression_dir.join(&tool_name);
        let expected_file =
            expected_dir.join(format!("{}-expected{}", self.test_name, self.suffix));
        let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let output_dir = cwd.join(format!("{tool_name}-output"));
        let actual_file = output_dir.join(format!("{}-actual{}", self.test_name, self.suffix));

        TestPaths {
            expected_dir,
            expected_file,
            output_dir,
            actual_file,
        }
    }
}

/// Locations read and written for a single test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestPaths {
    /// `<regression_dir>/<toolname>`, holds the baselines for this tool.
    pub expected_dir: PathBuf,
    /// `<expected_dir>/<testname>-expected<suffix>`.
    pub expected_file: PathBuf,
    /// `<cwd>/<toolname>-output`, holds freshly captured output.
    pub output_dir: PathBuf,
    /// `<output_dir>/<testname>-actual<suffix>`.
    pub actual_file: PathBuf,
}

/// Ensure the suffix carries exactly one leading dot: `json` and `.json`
/// both become `.json`.
pub fn normalize_suffix(raw: &str) -> String {
    format!(".{}", raw.trim_start_matches('.'))
}

/// Derive a test name from the tool's single argument: the file stem with
/// directory and extension stripped (`path/to/cube.scad` becomes `cube`).
pub fn derive_test_name(arg: &str) -> Option<String> {
    Path::new(arg)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

fn generate_from_env() -> bool {
    env::var(GENERATE_ENV_VAR).is_ok_and(|value| !value.is_empty())
}

fn default_regression_dir() -> PathBuf {
    regression_dir_near(env::current_exe().ok())
}

/// `regression` next to the given executable, or the bare relative path
/// `regression` when the executable's location is unknown.
fn regression_dir_near(exe: Option<PathBuf>) -> PathBuf {
    exe.and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default()
        .join("regression")
}
