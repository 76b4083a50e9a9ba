//! Hygiene: enforces coding standards at test time.
//!
//! Scans the crate's production sources for patterns that can crash the page
//! or swallow an error. Every budget is zero; if one must be spent, an
//! existing hit has to be fixed first.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics abort the wasm module and freeze the page.
    Budget { pattern: ".unwrap()", max: 0, why: "panics on None/Err" },
    Budget { pattern: ".expect(", max: 0, why: "panics on None/Err" },
    Budget { pattern: "panic!(", max: 0, why: "aborts the page" },
    Budget { pattern: "unreachable!(", max: 0, why: "aborts the page" },
    Budget { pattern: "todo!(", max: 0, why: "unfinished stub" },
    Budget { pattern: "unimplemented!(", max: 0, why: "unfinished stub" },
    // Silent loss: errors must be surfaced on the page or logged.
    Budget { pattern: "let _ =", max: 0, why: "discards a Result without inspecting it" },
    Budget { pattern: ".ok()", max: 0, why: "drops the error detail" },
    // Output goes through tracing so it reaches the browser console.
    Budget { pattern: "println!(", max: 0, why: "use tracing" },
    Budget { pattern: "eprintln!(", max: 0, why: "use tracing" },
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code instead" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`. Test modules and test doubles are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") || path_str.ends_with("_fake.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| !line.trim_start().starts_with("//"))
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("studio.rs")), "hygiene scan found no sources; is cwd the crate root?");
}

#[test]
fn budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect::<Vec<_>>().join("\n");
            failures.push(format!("`{}` found {count}, max {} ({})\n{detail}", budget.pattern, budget.max, budget.why));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn no_state_borrow_held_in_async_signature() {
    // `Studio` methods must take `&self`; a `&mut self` async method would
    // serialize actions and defeat request tokens.
    let files = source_files();
    let studio = files.iter().find(|f| f.path.ends_with("studio.rs"));
    let Some(studio) = studio else {
        return;
    };
    let offenders: Vec<&str> =
        studio.content.lines().filter(|l| l.contains("async fn") && l.contains("&mut self")).collect();
    assert!(offenders.is_empty(), "async &mut self in studio.rs:\n{}", offenders.join("\n"));
}
