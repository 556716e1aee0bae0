//! Integration Test: Blocking I/O Prohibition
//!
//! **Policy**: Production code in the board core and the TUI MUST NOT
//! use blocking I/O on the event loop. The fetch goes through reqwest's
//! async client, file reads (config, audio asset) go through
//! `tokio::fs`, and nothing touches `std::net` at all.
//!
//! `std::io` itself is not flagged: terminal setup runs before the
//! runtime and goes through crossterm. Test modules are exempt - the
//! scan stops at the first `#[cfg(test)]` marker.

use std::fs;
use std::path::Path;

use architectural_enforcement::production_source_dirs;

#[test]
fn test_no_blocking_io_in_production_code() {
    let mut violations = Vec::new();

    for dir in production_source_dirs() {
        check_directory(&dir, &mut violations);
    }

    if !violations.is_empty() {
        eprintln!("\nBlocking I/O calls found in production code!");
        for violation in &violations {
            eprintln!("  {}", violation);
        }
        eprintln!("\nFORBIDDEN blocking I/O:");
        eprintln!("  - std::fs::read(), std::fs::write(), std::fs::File");
        eprintln!("  - std::net::TcpStream, std::net::TcpListener");
        eprintln!("  - reqwest::blocking::*");
        eprintln!("\nREQUIRED async I/O:");
        eprintln!("  - tokio::fs::read().await, tokio::fs::read_to_string().await");
        eprintln!("  - reqwest's async client");

        panic!(
            "\nFound {} blocking I/O violation(s) in production code.\nFix these before merging!",
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

        let code_part = line.split("//").next().unwrap_or(line);

        let blocking = [
            ("std::fs::", "blocking file I/O"),
            ("use std::fs", "blocking file I/O"),
            ("std::net::", "blocking network I/O"),
            ("use std::net", "blocking network I/O"),
            ("reqwest::blocking", "blocking HTTP client"),
        ];

        for (needle, label) in blocking {
            if code_part.contains(needle) {
                violations.push(format!(
                    "{}:{} - {}: {}",
                    path.display(),
                    idx + 1,
                    label,
                    line.trim()
                ));
            }
        }
    }
}
