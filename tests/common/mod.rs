//! Shared fixtures for the integration tests.
//!
//! Every test gets its own `TestBed`: a temporary working directory with a
//! regression root inside it, so runs never touch the real filesystem layout
//! and parallel tests cannot collide.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestBed {
    dir: TempDir,
    pub regression_dir: PathBuf,
}

impl TestBed {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let regression_dir = dir.path().join("regression");
        fs::create_dir_all(&regression_dir).expect("create regression dir");
        Self {
            dir,
            regression_dir,
        }
    }

    /// Working directory for the run; `-output` dirs land here.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Command for the binary under test, pinned to this bed's working
    /// directory and regression root, with generate-mode inheritance from
    /// the outer environment scrubbed.
    pub fn retest(&self) -> Command {
        let mut cmd = Command::cargo_bin("retest").expect("retest binary");
        cmd.current_dir(self.path());
        cmd.env_remove("TEST_GENERATE");
        cmd.arg("--regression-dir").arg(&self.regression_dir);
        cmd
    }

    /// Write a baseline with the default `.txt` suffix.
    pub fn write_baseline(&self, tool: &str, test: &str, contents: &str) -> PathBuf {
        self.write_baseline_with_suffix(tool, test, ".txt", contents)
    }

    pub fn write_baseline_with_suffix(
        &self,
        tool: &str,
        test: &str,
        suffix: &str,
        contents: &str,
    ) -> PathBuf {
        let dir = self.regression_dir.join(tool);
        fs::create_dir_all(&dir).expect("create baseline dir");
        let path = dir.join(format!("{test}-expected{suffix}"));
        fs::write(&path, contents).expect("write baseline");
        path
    }

    pub fn expected_path(&self, tool: &str, test: &str) -> PathBuf {
        self.regression_dir
            .join(tool)
            .join(format!("{test}-expected.txt"))
    }

    pub fn actual_path(&self, tool: &str, test: &str) -> PathBuf {
        self.path()
            .join(format!("{tool}-output"))
            .join(format!("{test}-actual.txt"))
    }

    /// Write an executable shell script to act as the tool under test.
    #[cfg(unix)]
    pub fn write_script(&self, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
        let mut perms = fs::metadata(&path).expect("script metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("make script executable");
        path
    }
}
