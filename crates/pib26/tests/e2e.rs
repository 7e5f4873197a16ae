//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn pib26() -> Command {
    let mut cmd = Command::cargo_bin("pib26").expect("binary not found");
    cmd.env_remove("PIB26_DIGITS")
        .env_remove("PIB26_OP")
        .env_remove("PIB26_VALUE")
        .env_remove("PIB26_STRATEGY")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    pib26()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("base-26"))
        .stdout(predicate::str::contains("--digits"));
}

#[test]
fn version_flag() {
    pib26()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "pib26 {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn recip_of_three_quiet() {
    pib26()
        .args(["--op", "recip", "-x", "3", "-d", "100", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("I.RIRIRIRIRIRIRIRIRI"));
}

#[test]
fn default_run_reports_stages() {
    pib26()
        .args(["-d", "200", "--ticker", "none"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Allocating memory..."))
        .stdout(predicate::str::contains("Done."))
        .stdout(predicate::str::contains("Total computation time:"))
        .stdout(predicate::str::contains("invsqrt(2) to 200 base-26 digits"));
}

#[test]
fn dots_ticker_draws() {
    pib26()
        .args(["-d", "400", "--ticker", "dots"])
        .assert()
        .success()
        .stdout(predicate::str::contains("invsqrt(2) : ["));
}

#[test]
fn label_ticker_counts() {
    pib26()
        .args(["-d", "400", "--ticker", "label"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/ 408"));
}

#[test]
fn verbose_names_the_strategy() {
    pib26()
        .args(["-d", "100", "-v", "--ticker", "none", "--strategy", "karatsuba"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Strategy: Karatsuba"));
}

#[test]
fn dump_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("recip3.txt");
    pib26()
        .args(["--op", "recip", "-x", "3", "-d", "120", "-q", "-o"])
        .arg(&path)
        .assert()
        .success();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("I.\nRIRIRIRIRI RIRIRIRIRI "));
    assert!(text.contains(" : 50\n"));
    assert!(text.contains(" : 100\n"));
    assert!(!text.contains(" : 150"));
}

#[test]
fn env_sets_digits() {
    pib26()
        .env("PIB26_DIGITS", "150")
        .args(["--ticker", "none"])
        .assert()
        .success()
        .stdout(predicate::str::contains("to 150 base-26 digits"));
}

#[test]
fn too_few_digits_rejected() {
    pib26().args(["-d", "10"]).assert().failure();
}

#[test]
fn zero_operand_rejected() {
    pib26().args(["-x", "0"]).assert().failure();
}

#[test]
fn threshold_order_is_a_config_error() {
    pib26()
        .args(["--small-threshold", "4000", "--fft-threshold", "100"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("threshold"));
}

#[test]
fn unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");
    pib26()
        .args(["-d", "100", "-q", "-o"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("writing"));
}

#[test]
fn completion_bash() {
    pib26()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pib26"));
}
