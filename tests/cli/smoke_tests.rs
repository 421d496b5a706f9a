use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn kvscan() -> Command {
    Command::new(env!("CARGO_BIN_EXE_kvscan"))
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/nested")).unwrap();
    fs::write(dir.path().join("src/a.js"), "foo: bar baz, qux: 1").unwrap();
    fs::write(
        dir.path().join("src/nested/b.js"),
        "const o = {\n  name: 'kv',\n  note: hello : world,\n  x: 1\n};\n",
    )
    .unwrap();
    fs::write(dir.path().join("src/ignored.ts"), "a: 1, b: 2, c: 3, d: 4").unwrap();
    dir
}

#[test]
fn shows_help() {
    kvscan()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("kvscan"));
}

#[test]
fn bare_run_writes_pair_report_in_cwd() {
    let dir = fixture();
    kvscan()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("js_key_value_count.txt"));

    let report = fs::read_to_string(dir.path().join("js_key_value_count.txt")).unwrap();
    let expected = "\
./src/nested/b.js => 3 pairs
  name: 'kv'
  note: hello : world
  x: 1

./src/a.js => 2 pairs
  foo: bar baz
  qux: 1

--- Summary ---
Files with key-value pairs: 2
Total key-value pairs: 5";
    assert_eq!(report, expected);
}

#[test]
fn word_mode_writes_its_own_report() {
    let dir = fixture();
    kvscan()
        .current_dir(dir.path())
        .args(["--mode", "words", "src"])
        .assert()
        .success();

    let report = fs::read_to_string(dir.path().join("js_value_word_count.txt")).unwrap();
    assert!(report.contains("src/a.js => 3 words"));
    assert!(report.contains("  foo: bar baz (2 words)"));
    assert!(report.contains("src/nested/b.js => 5 words"));
    assert!(report.ends_with("Total words in values: 8"));
}

#[test]
fn json_output_to_explicit_path() {
    let dir = fixture();
    let out = dir.path().join("report.json");
    kvscan()
        .arg(dir.path().join("src"))
        .args(["--format", "json", "--quiet", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(out).unwrap()).unwrap();
    assert_eq!(json["summary"]["files_with_content"], 2);
    assert_eq!(json["summary"]["total"], 5);
    assert_eq!(json["files"][0]["metric"], 3);
}

#[test]
fn unreadable_file_warns_but_succeeds() {
    let dir = fixture();
    fs::write(dir.path().join("src/binary.js"), [0xffu8, 0xfe, 0x00]).unwrap();
    kvscan()
        .current_dir(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("binary.js"));
    assert!(dir.path().join("js_key_value_count.txt").exists());
}

#[test]
fn file_warning_names_the_path_once() {
    let dir = fixture();
    fs::write(dir.path().join("src/binary.js"), [0xffu8, 0xfe, 0x00]).unwrap();
    let output = kvscan().current_dir(dir.path()).output().unwrap();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("binary.js").count(), 1, "{stderr}");
}

#[test]
fn invalid_arguments_exit_with_one() {
    let dir = TempDir::new().unwrap();
    kvscan()
        .current_dir(dir.path())
        .args(["--top", "0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--top"));
    assert!(!dir.path().join("js_key_value_count.txt").exists());
}

#[test]
fn version_exits_successfully() {
    kvscan()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kvscan"));
}

#[test]
fn strict_mode_fails_without_report() {
    let dir = fixture();
    fs::write(dir.path().join("src/binary.js"), [0xffu8, 0xfe, 0x00]).unwrap();
    kvscan()
        .current_dir(dir.path())
        .arg("--strict")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error"));
    assert!(!dir.path().join("js_key_value_count.txt").exists());
}

#[test]
fn missing_root_fails_without_report() {
    let dir = TempDir::new().unwrap();
    kvscan()
        .current_dir(dir.path())
        .arg("no-such-dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to scan no-such-dir"));
    assert!(!dir.path().join("js_key_value_count.txt").exists());
}

#[test]
fn empty_tree_writes_summary_only() {
    let dir = TempDir::new().unwrap();
    kvscan().current_dir(dir.path()).assert().success();
    let report = fs::read_to_string(dir.path().join("js_key_value_count.txt")).unwrap();
    assert_eq!(
        report,
        "\n--- Summary ---\nFiles with key-value pairs: 0\nTotal key-value pairs: 0"
    );
}
