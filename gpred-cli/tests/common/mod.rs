#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Thresholds small enough for the nine base pair fixture genes
pub const SMALL_GENE_ARGS: [&str; 6] = ["-g", "9", "-s", "20", "-d", "3"];

/// Absolute path of a file under `tests/data`
pub fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

/// Output of one gpred run
pub struct GpredRun {
    pub positions: String,
    pub genes: String,
    pub stderr: String,
}

/// Runs gpred on `genome` with outputs in a temporary directory and asserts success
pub fn run_gpred(genome: &Path, extra_args: &[&str]) -> GpredRun {
    let dir = TempDir::new().unwrap();
    let positions = dir.path().join("positions.out");
    let genes = dir.path().join("genes.fna");

    let mut cmd = Command::cargo_bin("gpred").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("-i")
        .arg(genome)
        .arg("-p")
        .arg(&positions)
        .arg("-o")
        .arg(&genes)
        .args(extra_args);

    let output = cmd.assert().success().get_output().clone();
    GpredRun {
        positions: std::fs::read_to_string(&positions).unwrap(),
        genes: std::fs::read_to_string(&genes).unwrap(),
        stderr: String::from_utf8(output.stderr).unwrap(),
    }
}

/// Runs gpred expecting failure and returns its stderr
pub fn run_gpred_failure(args: &[&str]) -> String {
    let dir = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("gpred").unwrap();
    cmd.env_remove("RUST_LOG")
        .current_dir(dir.path())
        .args(args);
    let output = cmd.assert().failure().get_output().clone();
    String::from_utf8(output.stderr).unwrap()
}
