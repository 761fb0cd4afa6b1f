#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated environment: HOME points at an empty temp dir so no real rc file is read
pub fn setup_test_env() -> TempDir {
    TempDir::new().unwrap()
}

pub fn get_quiz_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pipequiz").unwrap();
    cmd.env("HOME", temp_dir.path());
    cmd.env_remove("PIPEQUIZ_RC");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Prompt script placing every component in its correct step
pub fn correct_script() -> String {
    [
        "place ingestion 1",
        "place storage 2",
        "place bronze 3",
        "place silver 4",
        "place gold 5",
        "place query 6",
        "place visualization 7",
    ]
    .join("\n")
        + "\n"
}
