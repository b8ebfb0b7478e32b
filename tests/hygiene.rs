//! Hygiene: enforces coding standards at test time
//!
//! Scans `src/` (test files excluded) for patterns the page layer must not
//! ship. A panic in the WASM module takes every unit down with it, and a
//! silently discarded `Result` hides the storage and DOM failures we only
//! ever log. Budgets are zero and stay zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

struct Rule {
    pattern: &'static str,
    budget: usize,
    why: &'static str,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", budget: 0, why: "panics abort the whole page layer" },
    Rule { pattern: ".expect(", budget: 0, why: "panics abort the whole page layer" },
    Rule { pattern: "panic!(", budget: 0, why: "panics abort the whole page layer" },
    Rule { pattern: "unreachable!(", budget: 0, why: "panics abort the whole page layer" },
    Rule { pattern: "todo!(", budget: 0, why: "stubs must not ship" },
    Rule { pattern: "unimplemented!(", budget: 0, why: "stubs must not ship" },
    Rule { pattern: "let _ =", budget: 0, why: "log the error instead of discarding it" },
    Rule { pattern: ".ok()", budget: 0, why: "log the error instead of discarding it" },
    Rule { pattern: ".unwrap_or_default()", budget: 2, why: "only theme parsing and an absent form field may fall back silently" },
    Rule { pattern: "println!(", budget: 0, why: "use the log facade; stdout goes nowhere in the browser" },
    Rule { pattern: "eprintln!(", budget: 0, why: "use the log facade; stderr goes nowhere in the browser" },
    Rule { pattern: "#[allow(dead_code)]", budget: 0, why: "delete unused code" },
];

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
            if path_str.ends_with("_test.rs") {
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
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_scanned() {
    let files = source_files();
    assert!(
        files.iter().any(|f| f.path.ends_with("lib.rs")),
        "hygiene must run from the crate root"
    );
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let found = hits(&files, rule.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > rule.budget {
            let detail = found
                .iter()
                .map(|(path, c)| format!("    {path}: {c}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!(
                "{:?}: found {count}, max {} ({})\n{detail}",
                rule.pattern, rule.budget, rule.why
            ));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn tests_live_beside_their_module() {
    let files = source_files();
    for file in &files {
        for line in file.content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(name) = rest.strip_suffix("\"]") else {
                continue;
            };
            let sibling = Path::new(&file.path).with_file_name(name);
            assert!(sibling.exists(), "{} points at missing {}", file.path, sibling.display());
        }
    }
}
