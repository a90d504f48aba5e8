//! Source governance lock tests.
//!
//! Proves:
//! 1. Hash domains are unique, null-terminated and follow `PATHFIND::*::V1\0`
//! 2. No raw `PATHFIND::` domain literals in library source outside `hash.rs`
//! 3. Library source never prints to stdout or stderr
//! 4. Library source never calls `.unwrap()` or `.expect(` outside tests

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use pathfind_kernel::hash::HashDomain;

// ---------------------------------------------------------------------------
// 1. Hash domain shape
// ---------------------------------------------------------------------------

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn hash_domain_canonical_set() {
    assert_eq!(
        HashDomain::ALL.len(),
        2,
        "expected 2 domain variants; if you added a new domain, update this count"
    );

    let mut seen = BTreeSet::new();
    for domain in HashDomain::ALL {
        let bytes = domain.as_bytes();
        assert!(seen.insert(bytes), "duplicate domain bytes: {domain:?}");
        assert!(bytes.starts_with(b"PATHFIND::"), "{domain:?} lacks PATHFIND::");
        assert!(bytes.ends_with(b"::V1\0"), "{domain:?} does not end with ::V1\\0");
    }
}

// ---------------------------------------------------------------------------
// 2-4. Library source scans
// ---------------------------------------------------------------------------

fn library_dirs() -> [PathBuf; 3] {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../..");
    [
        root.join("kernel/src"),
        root.join("search/src"),
        root.join("harness/src"),
    ]
}

/// ACCEPTANCE: HASH-DOMAIN-LOCK
#[test]
fn no_raw_domain_literals_outside_hash_module() {
    let violations = scan_library(&["b\"PATHFIND::"], &["hash.rs"]);
    assert!(
        violations.is_empty(),
        "raw PATHFIND:: domain literals outside hash.rs:\n{}",
        violations.join("\n")
    );
}

/// ACCEPTANCE: LIBRARY-NO-PRINT
#[test]
fn library_code_does_not_print() {
    let violations = scan_library(&["println!(", "eprintln!(", "print!(", "dbg!("], &[]);
    assert!(
        violations.is_empty(),
        "library code must log through tracing:\n{}",
        violations.join("\n")
    );
}

/// ACCEPTANCE: LIBRARY-NO-PANIC-UNWRAP
#[test]
fn library_code_propagates_errors() {
    let violations = scan_library(&[".unwrap()", ".expect("], &[]);
    assert!(
        violations.is_empty(),
        "library code must return errors instead of unwrapping:\n{}",
        violations.join("\n")
    );
}

/// Lines of non-test, non-comment library source containing any pattern.
/// Files under `bin/` and files named in `allowed_files` are skipped.
fn scan_library(patterns: &[&str], allowed_files: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for dir in library_dirs() {
        assert!(dir.exists(), "{} is missing", dir.display());
        for path in walk(&dir) {
            if path.extension().and_then(|e| e.to_str()) != Some("rs") {
                continue;
            }
            if path.components().any(|c| c.as_os_str() == "bin") {
                continue;
            }
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if allowed_files.contains(&name) {
                continue;
            }
            let content = std::fs::read_to_string(&path).unwrap();
            for (number, line) in non_test_lines(&content) {
                if patterns.iter().any(|p| line.contains(p)) {
                    violations.push(format!("  {}:{number}: {line}", path.display()));
                }
            }
        }
    }
    violations
}

/// Trimmed lines outside `#[cfg(test)]` blocks, comments removed, with
/// their 1-based line numbers. Blocks are tracked by brace depth.
fn non_test_lines(content: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut depth: usize = 0;
    let mut skip_below: Option<usize> = None;
    let mut cfg_test_pending = false;

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.contains("#[cfg(test)]") {
            cfg_test_pending = true;
            continue;
        }

        let opens = line.matches('{').count();
        let closes = line.matches('}').count();
        if cfg_test_pending && opens > 0 {
            skip_below = Some(depth);
            cfg_test_pending = false;
        }
        depth = depth.saturating_add(opens).saturating_sub(closes);

        if let Some(limit) = skip_below {
            if depth <= limit {
                skip_below = None;
            }
            continue;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        out.push((i + 1, trimmed));
    }
    out
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(walk(&path));
            } else {
                files.push(path);
            }
        }
    }
    files
}
