//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - No blocking sleeps in production code (the reveal is a cooperative timer)
//! - Async I/O only inside the async crates
//!
//! These tests are designed to catch violations early in the development cycle.

#![allow(dead_code)]

use std::path::PathBuf;

/// Production source roots, resolved from the workspace layout.
pub fn production_source_dirs() -> Vec<PathBuf> {
    let workspace = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");
    vec![
        workspace.join("quoteboard").join("core").join("src"),
        workspace.join("tui").join("src"),
    ]
}
