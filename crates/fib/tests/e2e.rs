//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn fib() -> Command {
    let mut cmd = Command::cargo_bin("fib").expect("binary not found");
    cmd.env_remove("FIB_N").env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    fib()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fibonacci"))
        .stdout(predicate::str::contains("--algorithm"));
}

#[test]
fn version_flag() {
    fib()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fib"));
}

#[test]
fn default_is_labeled_decimal() {
    fib()
        .arg("10")
        .assert()
        .success()
        .stdout("Fibonacci Number 10 (decimal): 55\n");
}

#[test]
fn compute_f100_every_algorithm() {
    for algo in ["iter", "recur", "matrix"] {
        fib()
            .args(["100", "-a", algo, "-r"])
            .assert()
            .success()
            .stdout("354224848179261915075\n");
    }
}

#[test]
fn compute_f0_and_f1() {
    fib().args(["0", "-r"]).assert().success().stdout("0\n");
    fib().args(["1", "-r"]).assert().success().stdout("1\n");
}

#[test]
fn hex_and_binary_formats() {
    fib()
        .args(["10", "-f", "hex"])
        .assert()
        .success()
        .stdout("Fibonacci Number 10 (hexadecimal): 0x37\n");
    fib()
        .args(["10", "-f", "bin", "-r"])
        .assert()
        .success()
        .stdout("110111\n");
}

#[test]
fn time_flag_appends_time_line() {
    fib()
        .args(["20", "-t"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Fibonacci Number 20 (decimal): 6765\n"))
        .stdout(predicate::str::is_match(r"Calculation Time: \d+\.\d{6} seconds\n$").unwrap());
}

#[test]
fn time_only_omits_result() {
    fib()
        .args(["20", "-T"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6765").not())
        .stdout(predicate::str::starts_with("Calculation Time: "));
}

#[test]
fn all_algorithms_compare() {
    fib()
        .args(["50", "-a", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Results"))
        .stdout(predicate::str::contains("Iterative"))
        .stdout(predicate::str::contains("Recursive"))
        .stdout(predicate::str::contains("Matrix"))
        .stdout(predicate::str::contains("Fibonacci Number 50 (decimal): 12586269025"));
}

#[test]
fn output_file_receives_result() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fib.txt");
    fib()
        .args(["30", "-o"])
        .arg(&path)
        .assert()
        .success()
        .stdout("");
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Fibonacci Number 30 (decimal): 832040\n"
    );
}

#[test]
fn index_from_env() {
    fib()
        .env("FIB_N", "12")
        .arg("-r")
        .assert()
        .success()
        .stdout("144\n");
}

#[test]
fn negative_index_exit_code() {
    fib()
        .arg("-3")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid index -3"));
}

#[test]
fn max_n_exit_code() {
    fib()
        .args(["1001", "--max-n", "1000"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("exceeds the maximum"));
}

#[test]
fn unknown_algorithm_exit_code() {
    fib()
        .args(["10", "-a", "fft"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unknown"));
}

#[test]
fn unknown_format_exit_code() {
    fib().args(["10", "-f", "oct"]).assert().code(4);
}

#[test]
fn memory_limit_exit_code() {
    fib()
        .args(["100000", "-a", "recur", "--memory-limit", "1M"])
        .assert()
        .code(5)
        .stderr(predicate::function(|err: &str| {
            err.matches("resource exhausted").count() == 1
        }));
}

#[test]
fn default_budget_rejects_oversized_memo_table() {
    // Terabytes of memo table: refused up front instead of aborting mid-run.
    fib()
        .args(["10000000", "-a", "recur", "-T"])
        .assert()
        .code(5)
        .stdout("")
        .stderr(predicate::str::contains("resource exhausted"));
}

#[test]
fn bad_memory_limit_exit_code() {
    fib()
        .args(["10", "--memory-limit", "lots"])
        .assert()
        .code(4);
}

#[test]
fn missing_index_is_usage_error() {
    fib().assert().failure().code(2);
}

#[test]
fn verbose_logs_to_stderr() {
    fib()
        .args(["300", "-a", "iter", "-v", "-r"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("\n"))
        .stderr(predicate::str::contains("Using iterative algorithm"));
}

#[test]
fn rust_log_level_is_honoured() {
    fib()
        .env("RUST_LOG", "debug")
        .args(["10", "-r"])
        .assert()
        .success()
        .stdout("55\n")
        .stderr(predicate::str::contains("Starting calculation"));
}

#[test]
fn progress_bar_keeps_stdout_clean() {
    fib()
        .args(["500", "--progress", "-r"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("139423224561697880139724382870407283950070256587697307264108962948325571622863290691557658876222521294125"));
}

#[test]
fn interactive_needs_a_terminal() {
    fib()
        .arg("--interactive")
        .write_stdin("10\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Fibonacci Number").not())
        .stderr(predicate::str::contains("interactive session failed"));
}

#[test]
fn completion_bash() {
    fib()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fib"));
}
