use predicates::prelude::*;
use std::path::PathBuf;
use assert_cmd::Command;

fn workspace_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir.parent().unwrap().parent().unwrap().to_path_buf()
}

fn lexis() -> Command {
    let mut cmd = Command::cargo_bin("lexis").unwrap();
    cmd.env_remove("LEXIS_FORMAT");
    cmd
}

#[test]
fn valid_demo_is_clean() {
    let root = workspace_root();
    let mut cmd = lexis();
    cmd.arg(root.join("demos/valid.lx"));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no diagnostics"));
}

#[test]
fn errors_demo_reports_every_tier() {
    let root = workspace_root();
    let mut cmd = lexis();
    cmd.arg(root.join("demos/errors.lx"));
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("did you mean 'si'?"))
        .stderr(predicate::str::contains("number with multiple decimal points"))
        .stderr(predicate::str::contains("missing ';' after 'imprimir(...)'"))
        .stderr(predicate::str::contains("undeclared identifier 'total'"))
        .stderr(predicate::str::contains("variable 'x' already declared at line 2"))
        .stderr(predicate::str::contains("help:"))
        .stdout(predicate::str::contains("lexical"));
}

#[test]
fn reads_standard_input() {
    let mut cmd = lexis();
    cmd.write_stdin("entero x = 1;\nimprimir(x);\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<stdin>"));
}

#[test]
fn token_table() {
    let mut cmd = lexis();
    cmd.arg("--tokens").write_stdin("entero x = 1;");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("RESERVED_WORD"))
        .stdout(predicate::str::contains("INTEGER_LITERAL"));
}

#[test]
fn json_output() {
    let mut cmd = lexis();
    cmd.args(["--format", "json"]).write_stdin("entero x = 1.5;");
    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tokens"][0]["kind"], "reserved_word");
    assert_eq!(value["diagnostics"][0]["severity"], "semantic");
    assert_eq!(value["diagnostics"][0]["column"], 8);
}

#[test]
fn format_from_environment() {
    let mut cmd = Command::cargo_bin("lexis").unwrap();
    cmd.env("LEXIS_FORMAT", "json").write_stdin("entero x = 1;");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"diagnostics\": []"));
}

#[test]
fn log_into_directory() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut cmd = lexis();
    cmd.arg("--log").arg(tmp_dir.path()).write_stdin("entero x = 1;");
    cmd.assert().success().stdout(predicate::str::contains("log written to"));

    let logs: Vec<_> = std::fs::read_dir(tmp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].starts_with("log_") && logs[0].ends_with(".txt"));
}

#[test]
fn log_to_named_file() {
    let root = workspace_root();
    let tmp_dir = tempfile::tempdir().unwrap();
    let log_path = tmp_dir.path().join("errores.txt");

    let mut cmd = lexis();
    cmd.arg(root.join("demos/errors.lx")).arg("--log").arg(&log_path);
    cmd.assert().code(1);

    let log = std::fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("LEXIS ANALYSIS LOG"));
    assert!(log.contains("errors.lx"));
    assert!(log.contains("Status:      ERRORS FOUND"));
}

#[test]
fn missing_file_is_an_io_error() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let mut cmd = lexis();
    cmd.arg(tmp_dir.path().join("nada.lx"));
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn interactive_session() {
    let mut cmd = lexis();
    cmd.arg("--interactive")
        .write_stdin("entero x = 1;\nimprimir(y);\n:tokens\n:quit\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("undeclared identifier 'y'"))
        .stdout(predicate::str::contains("IDENTIFIER"))
        .stdout(predicate::str::contains("Goodbye."));
}

#[test]
fn interactive_rejects_a_file_argument() {
    let root = workspace_root();
    let mut cmd = lexis();
    cmd.arg("--interactive").arg(root.join("demos/valid.lx"));
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}
