use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn clean_file_lists_declared_functions() {
    let mut cmd = cargo_bin_cmd!("luasyntax");
    cmd.arg(fixture_path("module.lua"));

    let output_pred = predicate::str::starts_with("No errors found\n\nDeclared functions:\n")
        .and(predicate::str::contains("  function M.add(a,b)\n"))
        .and(predicate::str::contains("  local function helper(t,...)\n"))
        .and(predicate::str::contains("  function M:describe(name)\n"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn erroneous_file_still_exits_successfully() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("bad.lua"), "x ~= 1\n").expect("write source");

    let mut cmd = cargo_bin_cmd!("luasyntax");
    cmd.current_dir(dir.path()).arg("bad.lua");

    cmd.assert().success().stdout(
        "Errors found\n\nbad.lua, line 1: Invalid statement.\n\tx ~ = 1 \n\t^\n",
    );
}

#[test]
fn missing_file_fails_with_message() {
    let mut cmd = cargo_bin_cmd!("luasyntax");
    cmd.arg("/definitely/not/here.lua");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn path_argument_is_required() {
    let mut cmd = cargo_bin_cmd!("luasyntax");
    cmd.assert().failure();
}

#[test]
fn logs_stay_off_stdout() {
    let mut cmd = cargo_bin_cmd!("luasyntax");
    cmd.env("RUST_LOG", "luasyntax=debug")
        .arg(fixture_path("errors.lua"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Errors found\n\n"))
        .stderr(predicate::str::contains("diagnostic"));
}
