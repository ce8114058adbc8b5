//! Hygiene: scans `src/` for patterns the crate does not allow in shipped code.
//!
//! Browser code has no stderr and a panic in an event listener leaves the
//! page half-wired, so every budget is zero. Test files and the test-only
//! fixtures module are excluded.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// (pattern, budget, label)
const RULES: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "unwrap"),
    (".expect(", 0, "expect"),
    ("panic!(", 0, "panic"),
    ("unreachable!(", 0, "unreachable"),
    ("todo!(", 0, "todo"),
    ("unimplemented!(", 0, "unimplemented"),
    ("let _ =", 0, "silent discard"),
    (".ok()", 0, "dot ok"),
    ("#[allow(dead_code)]", 0, "allow dead_code"),
    ("println!(", 0, "println (use log)"),
];

fn is_test_only(path: &str) -> bool {
    path.ends_with("_test.rs") || path.ends_with("test_support.rs")
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        if !path.extension().is_some_and(|e| e == "rs") {
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if is_test_only(&path_str) {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn check(label: &str) {
    let Some(&(pattern, budget, _)) = RULES.iter().find(|(_, _, l)| *l == label) else {
        panic!("no hygiene rule named {label}");
    };
    let files = source_files();
    let found = hits(&files, pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found.iter().map(|(path, c)| format!("  {path}: {c}")).collect::<Vec<_>>().join("\n");
    assert!(count <= budget, "{pattern} budget exceeded: found {count}, max {budget}.\n{listing}");
}

// =============================================================================
// PANICS
// =============================================================================

#[test]
fn unwrap_budget() {
    check("unwrap");
}

#[test]
fn expect_budget() {
    check("expect");
}

#[test]
fn panic_budget() {
    check("panic");
}

#[test]
fn unreachable_budget() {
    check("unreachable");
}

#[test]
fn todo_budget() {
    check("todo");
}

#[test]
fn unimplemented_budget() {
    check("unimplemented");
}

// =============================================================================
// SILENT LOSS
// =============================================================================

#[test]
fn silent_discard_budget() {
    check("silent discard");
}

#[test]
fn dot_ok_budget() {
    check("dot ok");
}

// =============================================================================
// STYLE
// =============================================================================

#[test]
fn allow_dead_code_budget() {
    check("allow dead_code");
}

#[test]
fn println_budget() {
    check("println (use log)");
}

#[test]
fn scan_sees_the_crate() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "hygiene scan found no sources; run from the crate root");
}
