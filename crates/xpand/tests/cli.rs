use assert_cmd::prelude::*;

use predicates::prelude::*;
use std::process::Command;

use xpand::{banner, BuildInfo};

fn xpand_cmd() -> Command {
  Command::cargo_bin("xpand").expect("binary exists")
}

fn expected_version_line() -> String {
  format!("{}\n", BuildInfo::from_build_env())
}

#[test]
fn test_no_args_prints_banner() {
  xpand_cmd()
    .assert()
    .success()
    .code(0)
    .stdout(banner::render())
    .stderr(predicate::str::is_empty());
}

#[test]
fn test_version_flag_prints_build_info() {
  xpand_cmd()
    .arg("--version")
    .assert()
    .success()
    .code(0)
    .stdout(expected_version_line())
    .stderr(predicate::str::is_empty());
}

#[test]
fn test_version_line_shape() {
  xpand_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::is_match(r"^xpand .+ \(commit: .+, built: .+\)\n$").unwrap());
}

#[test]
fn test_version_flag_ignores_extra_args() {
  xpand_cmd()
    .args(["--version", "extra"])
    .assert()
    .success()
    .stdout(expected_version_line());
}

#[test]
fn test_unrecognized_arguments_print_banner() {
  for args in [
    vec!["status"],
    vec!["help"],
    vec!["-v"],
    vec!["--help"],
    vec![""],
    vec!["status", "--version"],
    vec!["--", "--version"],
  ] {
    xpand_cmd()
      .args(&args)
      .assert()
      .success()
      .code(0)
      .stdout(banner::render());
  }
}

#[test]
fn test_repeated_invocations_are_identical() {
  let first = xpand_cmd().arg("--version").output().unwrap();
  let second = xpand_cmd().arg("--version").output().unwrap();
  assert_eq!(first.stdout, second.stdout);

  let first = xpand_cmd().output().unwrap();
  let second = xpand_cmd().output().unwrap();
  assert_eq!(first.stdout, second.stdout);
}

#[cfg(unix)]
#[test]
fn test_failed_write_is_reported_and_exits_zero() {
  use std::fs::OpenOptions;

  let full = OpenOptions::new().write(true).open("/dev/full").unwrap();

  xpand_cmd()
    .env("NO_COLOR", "1")
    .stdout(full)
    .assert()
    .code(0)
    .stderr(predicate::str::contains("[error] failed to write banner"));
}
