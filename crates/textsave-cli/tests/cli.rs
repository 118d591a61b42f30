use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("save_result_json").expect("binary built");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn read_json(path: &Path) -> Value {
    let raw = std::fs::read_to_string(path).expect("read result file");
    serde_json::from_str(&raw).expect("result file is valid JSON")
}

#[test]
fn no_arguments_prints_usage_and_exits_1() {
    let dir = TempDir::new().unwrap();
    let assert = bin().current_dir(dir.path()).write_stdin("ignored").assert().code(1);

    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    let lines: Vec<&str> = stderr.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected stderr: {stderr}");
    assert!(lines[0].starts_with("usage: save_result_json <jobId> [result.json]"));
    assert!(lines[1].contains("<result.json> <jobId>"));

    assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn saves_stdin_text_under_job_id() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("result.json");

    bin()
        .arg("abc123")
        .arg(&path)
        .write_stdin("hello world\n")
        .assert()
        .success()
        .stderr(predicate::str::contains(format!("Saved result to: {}", path.display())));

    let v = read_json(&path);
    assert_eq!(v["abc123"], "hello world\n");
    assert_eq!(v["jobId"], "abc123");
    assert_eq!(v["text"], "hello world\n");
}

#[test]
fn path_first_order_is_recognized() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("myjob.json");

    bin().arg(&path).arg("abc123").write_stdin("payload").assert().success();

    let v = read_json(&path);
    assert_eq!(v["abc123"], "payload");
    assert_eq!(v["jobId"], "abc123");
}

#[test]
fn successive_runs_accumulate_entries() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.json");

    bin().arg("j1").arg(&path).write_stdin("t1").assert().success();
    bin().arg("j2").arg(&path).write_stdin("t2").assert().success();

    let v = read_json(&path);
    assert_eq!(v["j1"], "t1");
    assert_eq!(v["j2"], "t2");
    assert_eq!(v["jobId"], "j2");
    assert_eq!(v["text"], "t2");
}

#[test]
fn corrupt_existing_file_is_replaced_silently() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.json");
    std::fs::write(&path, "not json").unwrap();

    bin()
        .arg("j")
        .arg(&path)
        .write_stdin("t")
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved result to:"));

    let v = read_json(&path);
    assert_eq!(v.as_object().map(|o| o.len()), Some(3));
    assert_eq!(v["j"], "t");
}

#[test]
fn non_ascii_text_is_written_literally() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.json");

    bin().arg("ko").arg(&path).write_stdin("안녕").assert().success();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"ko\": \"안녕\""));
    assert!(raw.starts_with("{\n  \""));
    assert_eq!(read_json(&path)["text"], "안녕");
}

#[test]
fn unwritable_target_fails_with_nonzero_status() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("result.json");
    std::fs::create_dir(&path).unwrap();

    bin()
        .arg("j")
        .arg(&path)
        .write_stdin("t")
        .assert()
        .failure()
        .stderr(predicate::str::contains("write result file"));
}
