#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Creates a source file with the given content inside the temp dir,
/// standing in for a pipeline output on the local filesystem.
pub fn create_dummy_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let file_path = dir.path().join(name);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A full-length analysis identifier, as the upstream pipeline computes
/// them (an MD5-style 32-character hex string).
pub const ANALYSIS_ID: &str = "26071405f2f1c3a6f71d4141edb208e2";

/// The serial form of `ANALYSIS_ID` under the documented slicing rule.
pub const ANALYSIS_ID_SERIAL: &str = "260-f7-08e2";
