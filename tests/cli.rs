use std::io::Write;

use assert_cmd::Command;
use tempfile::NamedTempFile;

#[test]
fn runs_a_script_file_and_exits_cleanly() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "print \"hello\";").unwrap();

    Command::cargo_bin("loxi")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn exits_64_on_too_many_arguments() {
    Command::cargo_bin("loxi")
        .unwrap()
        .arg("one")
        .arg("two")
        .assert()
        .code(64);
}

#[test]
fn exits_64_on_missing_file() {
    Command::cargo_bin("loxi")
        .unwrap()
        .arg("does_not_exist.lox")
        .assert()
        .code(64);
}

#[test]
fn exits_65_on_a_parse_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "print;").unwrap();

    Command::cargo_bin("loxi")
        .unwrap()
        .arg(file.path())
        .assert()
        .code(65);
}

#[test]
fn exits_70_on_a_runtime_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "print 1 + \"a\";").unwrap();

    Command::cargo_bin("loxi")
        .unwrap()
        .arg(file.path())
        .assert()
        .code(70);
}
