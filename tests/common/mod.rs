//! Common test utilities for integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// Helper function to write a TOML job file into a directory
#[allow(dead_code)]
pub fn write_job_file(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("spanfmt.toml");
    fs::write(&path, content).unwrap();
    path
}

/// Sample job file exercising every section
#[allow(dead_code)]
pub const FULL_JOB_FILE: &str = r#"
total_seconds = [59, 3661]
round_values = [2.345, 1.005]

[[durations]]
hours = 1
minutes = 2
seconds = 3

[[durations]]
minutes = 5
seconds = 9
"#;

/// Job file with a single decomposition entry
#[allow(dead_code)]
pub const SINGLE_SECONDS_JOB_FILE: &str = r#"
total_seconds = [86399]
"#;

/// Job file with no entries at all
#[allow(dead_code)]
pub const EMPTY_JOB_FILE: &str = "";
