//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT block the event loop with
//! `std::thread::sleep`. The typewriter reveal and every other delay in
//! this codebase is a cooperative timer (`Instant` checks or
//! `tokio::time::sleep`), so a blocking sleep anywhere is a regression.
//!
//! Test modules are exempt: the scan stops at the first `#[cfg(test)]`
//! marker, which by convention sits at the bottom of each source file.

use std::fs;
use std::path::Path;

use architectural_enforcement::production_source_dirs;

#[test]
fn test_no_blocking_sleep_in_production_code() {
    let mut violations = Vec::new();

    for dir in production_source_dirs() {
        check_directory(&dir, &mut violations);
    }

    if !violations.is_empty() {
        eprintln!("\nBlocking sleep calls found in production code!");
        for violation in &violations {
            eprintln!("  {}", violation);
        }
        eprintln!("\nUse tokio::time::sleep(...).await or an Instant-based tick instead.");

        panic!(
            "\nFound {} blocking sleep violation(s) in production code.\nFix these before merging!",
            violations.len()
        );
    }
}

fn check_directory(dir: &Path, violations: &mut Vec<String>) {
    assert!(
        dir.exists(),
        "production source dir missing: {}",
        dir.display()
    );

    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.path().extension().and_then(|s| s.to_str()) == Some("rs") {
            check_file(entry.path(), violations);
        }
    }
}

fn check_file(path: &Path, violations: &mut Vec<String>) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };

    for (idx, line) in content.lines().enumerate() {
        // Everything below the test-module marker is exempt.
        if line.contains("#[cfg(test)]") {
            break;
        }

        // Strip trailing comments before matching.
        let code_part = line.split("//").next().unwrap_or(line);

        if code_part.contains("std::thread::sleep") || code_part.contains("thread::sleep") {
            violations.push(format!(
                "{}:{} - blocking sleep: {}",
                path.display(),
                idx + 1,
                line.trim()
            ));
        }
    }
}
