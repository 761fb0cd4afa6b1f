use predicates::prelude::*;
mod test_env;

use test_env::{get_quiz_cmd, setup_test_env};

#[test]
fn test_score_perfect_at_45_seconds() {
    let temp_dir = setup_test_env();

    get_quiz_cmd(&temp_dir)
        .args(["score", "--correct", "7", "--elapsed", "45s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Base score:  700"))
        .stdout(predicate::str::contains("Time bonus:  250"))
        .stdout(predicate::str::contains("Total score: 950"))
        .stdout(predicate::str::contains("Accuracy:    100% (perfect)"));
}

#[test]
fn test_score_no_bonus_at_cap() {
    let temp_dir = setup_test_env();

    for elapsed in ["300s", "05:01"] {
        get_quiz_cmd(&temp_dir)
            .args(["score", "--correct", "7", "--elapsed", elapsed])
            .assert()
            .success()
            .stdout(predicate::str::contains("Time bonus:  0"))
            .stdout(predicate::str::contains("Total score: 700"));
    }
}

#[test]
fn test_score_partial_json() {
    let temp_dir = setup_test_env();

    let output = get_quiz_cmd(&temp_dir)
        .args(["score", "--correct", "4", "--elapsed", "0s", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["correct_count"], 4);
    assert_eq!(report["base_score"], 400);
    assert_eq!(report["time_bonus"], 300);
    assert_eq!(report["total_score"], 700);
    assert_eq!(report["accuracy"], 57);
    assert_eq!(report["tier"], "needs_improvement");
}

#[test]
fn test_score_rejects_bad_input() {
    let temp_dir = setup_test_env();

    get_quiz_cmd(&temp_dir)
        .args(["score", "--correct", "8", "--elapsed", "1m"])
        .assert()
        .failure();

    get_quiz_cmd(&temp_dir)
        .args(["score", "--correct", "3", "--elapsed", "soon"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid elapsed time 'soon'"));
}

#[test]
fn test_score_rejects_huge_elapsed() {
    let temp_dir = setup_test_env();

    for elapsed in ["9999999999999999s", "999999999999999999d"] {
        get_quiz_cmd(&temp_dir)
            .args(["score", "--correct", "7", "--elapsed", elapsed])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("out of range"));
    }
}
