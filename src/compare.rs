//! Output normalization and whole-file comparison.
//!
//! Comparison is deliberately coarse: both files are read fully, line
//! endings are normalized, and anything but exact equality is a failure.
//! On mismatch the external `diff` tool renders the difference to stderr.

use colored::Colorize;
use std::fs;
use std::path::Path;
use std::process::Command;

use crate::error::{Result, RunnerError};

/// Normalize captured output for comparison.
///
/// Strips every trailing CR/LF byte, collapses each run of CRs directly
/// followed by an LF into a bare LF, and appends exactly one trailing LF.
/// This absorbs platform line-ending and trailing-newline differences while
/// leaving every other byte (including mid-file whitespace) significant.
/// A lone CR with no LF after it is content and survives. Operates on bytes
/// because tool output is not required to be valid UTF-8. Idempotent, and
/// the result never contains a CRLF pair.
pub fn normalize_line_endings(raw: &[u8]) -> Vec<u8> {
    let mut end = raw.len();
    while end > 0 && (raw[end - 1] == b'\n' || raw[end - 1] == b'\r') {
        end -= 1;
    }
    let body = &raw[..end];

    let mut normalized = Vec::with_capacity(body.len() + 1);
    let mut i = 0;
    while i < body.len() {
        if body[i] == b'\r' {
            let mut run = i;
            while run < body.len() && body[run] == b'\r' {
                run += 1;
            }
            if body.get(run) == Some(&b'\n') {
                // The whole CR run belongs to this line ending.
                normalized.push(b'\n');
                i = run + 1;
            } else {
                normalized.extend_from_slice(&body[i..run]);
                i = run;
            }
        } else {
            normalized.push(body[i]);
            i += 1;
        }
    }
    normalized.push(b'\n');
    normalized
}

/// Read a file fully and normalize it for comparison.
pub fn read_normalized(path: &Path) -> Result<Vec<u8>> {
    let raw = fs::read(path).map_err(|err| {
        RunnerError::io(
            "reading output for comparison",
            Some(path.to_path_buf()),
            err,
        )
    })?;
    Ok(normalize_line_endings(&raw))
}

/// Compare two files for exact equality after normalization.
pub fn files_match(expected: &Path, actual: &Path) -> Result<bool> {
    Ok(read_normalized(expected)? == read_normalized(actual)?)
}

/// Run the external `diff` tool on the two files and forward its output to
/// stderr. The diff rendering is best-effort; the mismatch itself is
/// reported by the caller, so problems here only produce a warning.
pub fn show_diff(expected: &Path, actual: &Path) {
    let diff = match which::which("diff") {
        Ok(path) => path,
        Err(_) => {
            eprintln!(
                "{} diff not found in PATH, cannot show differences",
                "⚠".yellow().bold()
            );
            return;
        }
    };

    match Command::new(diff).arg(expected).arg(actual).output() {
        Ok(output) => {
            eprint!("{}", String::from_utf8_lossy(&output.stdout));
            eprint!("{}", String::from_utf8_lossy(&output.stderr));
        }
        Err(err) => {
            eprintln!("{} Failed to run diff: {}", "⚠".yellow().bold(), err);
        }
    }
}
