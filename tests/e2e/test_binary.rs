//! Integration tests for the dfs-stepper binary.
//!
//! Runs the compiled binary and compares its output against the golden
//! `.expect.txt` files in `tests/e2e/golden/`.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn golden_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("e2e");
    path.push("golden");
    path
}

/// Run the binary with `input` on stdin and the given args.
fn run(input: &str, args: &[&str]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_dfs-stepper"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run binary");
    if let Some(ref mut stdin) = child.stdin {
        stdin.write_all(input.as_bytes()).ok();
    }
    child.wait_with_output().expect("Failed to wait for binary")
}

fn stdout(out: &Output) -> String {
    String::from_utf8(out.stdout.clone()).expect("Non-UTF8 output")
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

/// Find all (name, adj_file, expect_file) triples in the golden directory.
fn find_golden_pairs() -> Vec<(String, PathBuf, PathBuf)> {
    let dir = golden_dir();
    let mut pairs = Vec::new();
    if let Ok(entries) = fs::read_dir(&dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("adj") {
                let name = path.file_stem().unwrap().to_string_lossy().into_owned();
                let expect_path = dir.join(format!("{}.expect.txt", name));
                if expect_path.exists() {
                    pairs.push((name, path, expect_path));
                }
            }
        }
    }
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

// ─── Golden file tests ──────────────────────────────────────────────────────

#[test]
fn test_all_golden_files_match() {
    let pairs = find_golden_pairs();
    assert!(!pairs.is_empty(), "No golden pairs found in {:?}", golden_dir());

    let mut failures = Vec::new();
    for (name, adj_file, expect_file) in &pairs {
        let expected = fs::read_to_string(expect_file)
            .unwrap_or_else(|e| panic!("Cannot read {:?}: {}", expect_file, e));
        let out = run("", &["--ascii", adj_file.to_str().unwrap()]);
        assert!(out.status.success(), "{}: {}", name, stderr(&out));
        if stdout(&out) != expected {
            failures.push(format!("FAIL: {}\n--- got ---\n{}", name, stdout(&out)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

// ─── Input sources ──────────────────────────────────────────────────────────

#[test]
fn test_reads_stdin() {
    let out = run("A:B\nB:\n", &["--ascii"]);
    assert!(out.status.success());
    assert!(stdout(&out).ends_with("Traversal order: A -> B\n"));
}

#[test]
fn test_builtin_graph() {
    let out = run("", &["--builtin", "--start", "Houston"]);
    assert!(out.status.success(), "{}", stderr(&out));
    assert!(stdout(&out).ends_with(
        "Traversal order: Houston → Atlanta → Washington → Dallas → Denver → Chicago → Austin\n"
    ));
}

#[test]
fn test_list_nodes() {
    let out = run("Z:A\nA:\n", &["--list-nodes"]);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Z\nA\n");
}

#[test]
fn test_output_file() {
    let path = std::env::temp_dir().join(format!("dfs-stepper-e2e-{}.txt", std::process::id()));
    let out = run("A:\n", &["--ascii", "-o", path.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
    let written = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).ok();
    assert!(written.ends_with("Traversal order: A\n"));
}

// ─── Formats and policies ───────────────────────────────────────────────────

#[test]
fn test_json_format() {
    let out = run("A:B\nB:\n", &["--format", "json"]);
    assert!(out.status.success());
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with(r#"{"event":"topology""#));
    assert!(lines[3].starts_with(r#"{"event":"done""#));
}

#[test]
fn test_target_flag() {
    let out = run("A:B,T\nB:T\nT:\n", &["--ascii", "--target", "T"]);
    assert!(out.status.success());
    assert!(stdout(&out).ends_with("Traversal order: A -> T -> B\n"));
}

// ─── Errors ─────────────────────────────────────────────────────────────────

#[test]
fn test_missing_node_halts_with_distinct_status() {
    let out = run("A:B,C\n", &["--ascii"]);
    assert_eq!(out.status.code(), Some(2));
    let text = stdout(&out);
    assert!(text.contains("Step 1: current A"));
    assert!(text.ends_with("Traversal halted after 1 step(s): node 'B' is not defined in the graph\n"));
    assert!(!text.contains("Traversal order"));
    assert!(stderr(&out).contains("traversal halted"));
}

#[test]
fn test_unknown_start_fails() {
    let out = run("A:\n", &["--start", "Q"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).is_empty());
    assert!(stderr(&out).contains("node 'Q' is not defined"));
}

#[test]
fn test_strict_rejects_bad_line() {
    let out = run("A:\nbad line\n", &["--strict"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("line 2"));
}

#[test]
fn test_validate_rejects_dangling_reference() {
    let out = run("A:B\n", &["--validate"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).contains("'B'"));
}

#[test]
fn test_skipped_line_warns_on_stderr() {
    let out = run("A:\nnot a line\n", &["--ascii"]);
    assert!(out.status.success());
    assert!(stderr(&out).contains("skipped"), "{}", stderr(&out));
}

// ─── Version and pacing ─────────────────────────────────────────────────────

#[test]
fn test_version_flag() {
    let out = run("", &["--version"]);
    assert!(out.status.success());
    let text = stdout(&out);
    assert!(text.starts_with("dfs-stepper "), "{}", text);
    assert!(text.trim().len() > "dfs-stepper".len());
}

#[test]
fn test_delay_does_not_change_output() {
    let plain = run("A:B,C\nB:\nC:\n", &["--ascii"]);
    let paced = run("A:B,C\nB:\nC:\n", &["--ascii", "--delay-ms", "5"]);
    assert!(paced.status.success());
    assert_eq!(stdout(&plain), stdout(&paced));
}
