use clap::Parser;
use std::path::PathBuf;

/// Command-line surface of the regression-test driver.
///
/// Everything after the tool path is forwarded to the tool verbatim, so
/// option parsing stops at the first positional argument just like the
/// classic getopt drivers this replaces.
#[derive(Parser, Debug, Clone)]
#[command(name = "retest")]
#[command(version = "0.1.0")]
#[command(about = "Regression test driver for command-line tools", long_about = None)]
pub struct Cli {
    #[arg(
        short,
        long,
        help = "Record the tool's output as the expected baseline instead of comparing"
    )]
    pub generate: bool,

    #[arg(
        short,
        long,
        default_value = ".txt",
        value_name = "SUFFIX",
        help = "Suffix for -expected and -actual files (a leading dot is added when missing)"
    )]
    pub suffix: String,

    #[arg(
        short,
        long,
        value_name = "NAME",
        help = "Explicit test name; takes precedence over the name derived from the argument"
    )]
    pub test: Option<String>,

    #[arg(
        long,
        value_name = "DIR",
        help = "Directory holding expected baselines (default: 'regression' next to the executable)"
    )]
    pub regression_dir: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(value_name = "TOOL", help = "Command-line tool under test")]
    pub tool: PathBuf,

    #[arg(
        value_name = "ARG",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        help = "Arguments forwarded to the tool"
    )]
    pub args: Vec<String>,
}
