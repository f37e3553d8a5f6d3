//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn algolab() -> Command {
    let mut cmd = Command::cargo_bin("algolab").expect("binary not found");
    cmd.env("NO_COLOR", "1").env_remove("ALGOLAB_N");
    cmd
}

#[test]
fn help_flag() {
    algolab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--demo"));
}

#[test]
fn version_flag() {
    algolab()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("algolab"));
}

#[test]
fn fib_quiet_prints_value() {
    algolab()
        .args(["--demo", "fib", "-n", "10", "-q"])
        .assert()
        .success()
        .stdout("55\n");
}

#[test]
fn fib_base_cases() {
    algolab()
        .args(["--demo", "fib", "-n", "0", "-q"])
        .assert()
        .success()
        .stdout("0\n");
    algolab()
        .args(["--demo", "fib", "-n", "1", "--algo", "memo", "-q"])
        .assert()
        .success()
        .stdout("1\n");
}

#[test]
fn fib_largest_u64_index() {
    algolab()
        .args(["--demo", "fib", "-n", "93", "-q"])
        .assert()
        .success()
        .stdout("12200160415121876738\n");
}

#[test]
fn fib_default_output_is_formatted() {
    algolab()
        .args(["--demo", "fib", "-n", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("F(30) = 832,040"))
        .stdout(predicate::str::contains("Complexity analysis: memoized fibonacci"));
}

#[test]
fn fib_index_from_env() {
    Command::cargo_bin("algolab")
        .expect("binary not found")
        .env("NO_COLOR", "1")
        .env("ALGOLAB_N", "12")
        .args(["--demo", "fib", "-q"])
        .assert()
        .success()
        .stdout("144\n");
}

#[test]
fn negative_index_is_invalid_argument() {
    algolab()
        .args(["--demo", "fib", "-n", "-1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn overflow_index_fails() {
    algolab()
        .args(["--demo", "fib", "-n", "94", "--algo", "memo"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("overflows u64"));
}

#[test]
fn unknown_algorithm_is_config_error() {
    algolab()
        .args(["--demo", "fib", "--algo", "bogus"])
        .assert()
        .code(4);
}

#[test]
fn naive_recursion_refused_for_large_n() {
    algolab()
        .args(["--demo", "fib", "--algo", "recursive", "-n", "60"])
        .assert()
        .code(4);
}

#[test]
fn sort_demo_sorts_the_demo_array() {
    algolab()
        .args(["--demo", "sort", "--size", "500", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "sorted: [5, 10, 15, 20, 25, 30, 35, 40, 45, 50]",
        ));
}

#[test]
fn sort_demo_prints_benchmark() {
    algolab()
        .args(["--demo", "sort", "--size", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("300 elements:"))
        .stdout(predicate::str::contains("BubbleSort"));
}

#[test]
fn arrays_demo() {
    algolab()
        .args(["--demo", "arrays", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("array[3] = 20"))
        .stdout(predicate::str::contains("found 40 at index 3"))
        .stdout(predicate::str::contains(
            "sorted in place: [1, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50]",
        ));
}

#[test]
fn search_demo() {
    algolab()
        .args(["--demo", "search", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("binary search for 35: index 6"))
        .stdout(predicate::str::contains("binary search for 12: not found"));
}

#[test]
fn recursion_demo() {
    algolab()
        .args(["--demo", "recursion", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("10! = 3,628,800"))
        .stdout(predicate::str::contains("hanoi(3): 7 moves"))
        .stdout(predicate::str::contains("permutations of [1, 2, 3]: 6"))
        .stdout(predicate::str::contains("subsets of [a, b, c]: 8"));
}

#[test]
fn matrix_demo() {
    algolab()
        .args(["--demo", "matrix", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  30  24  18"));
}

#[test]
fn list_demo() {
    algolab()
        .args(["--demo", "list", "-q"])
        .assert()
        .success()
        .stdout("list: [30, 20, 10]\n");
}

#[test]
fn all_demos_with_summary() {
    algolab()
        .args(["--size", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Complexity summary ==="))
        .stdout(predicate::str::contains("O(n!)"));
}

#[test]
fn output_report_is_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.json");
    algolab()
        .args(["--demo", "all", "-n", "15", "--size", "100", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert!(json["version"].as_str().unwrap().starts_with("algolab "));
    assert_eq!(json["fibonacci"]["n"], 15);
    assert!(json["fibonacci"]["results"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["value"] == 610));
    assert_eq!(json["quicksort"]["sorted"][0], 5);
    assert_eq!(json["benchmark"]["size"], 100);
}

#[test]
fn completion_bash() {
    algolab()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algolab"));
}

#[test]
fn invalid_demo_rejected() {
    algolab().args(["--demo", "graphs"]).assert().failure();
}
