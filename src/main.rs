use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use colored::Colorize;
use std::process;

use retest::cli::Cli;
use retest::config::RunConfig;
use retest::logging;
use retest::runner::TestRunner;

fn main() {
    // Invalid options never reach this far: clap reports them and exits 2.
    let cli = Cli::parse();

    if let Err(err) = logging::init_logging(cli.verbose) {
        eprintln!("{} {err:#}", "✗".red().bold());
        process::exit(1);
    }

    let config = match RunConfig::from_cli(cli) {
        Ok(config) => config,
        Err(err) => {
            // Undeterminable test name is a usage problem, same exit code as
            // any other bad invocation.
            let mut cmd = Cli::command();
            cmd.error(ErrorKind::MissingRequiredArgument, err).exit();
        }
    };

    if let Err(err) = TestRunner::new(config).run() {
        eprintln!("{err}");
        process::exit(1);
    }
}
