use colored::Colorize;
use std::fs::{self, File};
use std::path::Path;
use std::process::{Command, Output, Stdio};

use crate::compare;
use crate::config::{RunConfig, TestPaths};
use crate::error::{Result, RunnerError};
use crate::logging;

/// Outcome of launching the tool under test.
///
/// Spawn problems (tool missing, not executable) are ordinary data here, not
/// propagated errors: they fail the test, never the runner itself.
#[derive(Debug)]
pub enum ToolLaunch {
    /// The tool ran to completion; stdout went to the capture file, stderr
    /// and the exit status are in the `Output`.
    Completed(Output),
    /// The tool could not be started (or waited on).
    SpawnFailed(std::io::Error),
}

/// Executes one test case: runs the tool with its stdout captured to a file
/// and, unless generating, compares the capture against the baseline.
pub struct TestRunner {
    config: RunConfig,
}

impl TestRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Run the single test this runner was configured for.
    ///
    /// Generate mode records the baseline and stops. Test mode verifies the
    /// baseline exists, captures fresh output, and compares the two.
    pub fn run(&self) -> Result<()> {
        let paths = self.config.paths();

        if self.config.verbose {
            eprintln!(
                "{} Test '{}' for tool {}",
                "ℹ".blue(),
                self.config.test_name,
                self.config.tool_name().cyan()
            );
            eprintln!("  {} Expected file: {}", "→".blue(), paths.expected_file.display());
        }

        if !self.config.generate {
            self.verify_baseline(&paths)?;
        }

        self.execute(&paths)?;

        if !self.config.generate {
            self.compare(&paths)?;
            if self.config.verbose {
                eprintln!(
                    "{} Test '{}' passed",
                    "✓".green().bold(),
                    self.config.test_name
                );
            }
        } else if self.config.verbose {
            eprintln!(
                "{} Baseline written to {}",
                "✓".green().bold(),
                paths.expected_file.display()
            );
        }

        Ok(())
    }

    /// Guard against comparing with no baseline on disk.
    fn verify_baseline(&self, paths: &TestPaths) -> Result<()> {
        if !paths.expected_file.is_file() {
            return Err(RunnerError::missing_baseline(
                &self.config.test_name,
                &paths.expected_file,
            ));
        }
        Ok(())
    }

    /// Run the tool with stdout redirected to the capture file.
    ///
    /// Generate mode writes straight to the expected file; test mode writes
    /// the actual file under `<tool>-output` in the current directory.
    fn execute(&self, paths: &TestPaths) -> Result<()> {
        let (out_dir, out_file) = if self.config.generate {
            (&paths.expected_dir, &paths.expected_file)
        } else {
            (&paths.output_dir, &paths.actual_file)
        };

        fs::create_dir_all(out_dir).map_err(|err| {
            RunnerError::io("creating output directory", Some(out_dir.clone()), err)
        })?;
        let capture = File::create(out_file)
            .map_err(|err| RunnerError::io("creating capture file", Some(out_file.clone()), err))?;

        tracing::debug!(
            tool = %self.config.cmd.display(),
            capture = %out_file.display(),
            "launching tool"
        );

        match launch_tool(&self.config.cmd, &self.config.args, capture) {
            ToolLaunch::Completed(output) => {
                if !output.stderr.is_empty() {
                    eprintln!(
                        "{} Error output: {}",
                        "⚠".yellow().bold(),
                        String::from_utf8_lossy(&output.stderr).trim_end()
                    );
                }

                let code = output.status.code().unwrap_or(-1);
                logging::log_tool_run(&self.config.tool_name(), code);
                if !output.status.success() {
                    return Err(RunnerError::tool_failure(self.config.tool_name(), code));
                }
                Ok(())
            }
            ToolLaunch::SpawnFailed(err) => Err(RunnerError::spawn_failure(
                self.config.cmd.display().to_string(),
                err,
            )),
        }
    }

    /// Compare the fresh capture against the baseline; on mismatch, render a
    /// diff to stderr and fail.
    fn compare(&self, paths: &TestPaths) -> Result<()> {
        let matched = compare::files_match(&paths.expected_file, &paths.actual_file)?;
        logging::log_comparison(&self.config.test_name, matched);
        if matched {
            return Ok(());
        }

        compare::show_diff(&paths.expected_file, &paths.actual_file);
        Err(RunnerError::output_mismatch(
            &self.config.test_name,
            &paths.expected_file,
            &paths.actual_file,
        ))
    }
}

/// Spawn the tool with its stdout redirected to `capture` and its stderr
/// collected in memory, then wait for it to exit.
pub fn launch_tool(cmd: &Path, args: &[String], capture: File) -> ToolLaunch {
    let child = Command::new(cmd)
        .args(args)
        .stdout(Stdio::from(capture))
        .stderr(Stdio::piped())
        .spawn();

    match child {
        Ok(child) => match child.wait_with_output() {
            Ok(output) => ToolLaunch::Completed(output),
            Err(err) => ToolLaunch::SpawnFailed(err),
        },
        Err(err) => ToolLaunch::SpawnFailed(err),
    }
}
