//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural
//! principles across the workspace:
//!
//! - The animation core stays free of UI crates (it must be able to drive
//!   any surface, or run headless)
//! - No blocking `thread::sleep` in production code (all waiting is timer
//!   based and cooperative)
//! - Randomness lives in the core only; the TUI is presentation glue
//!
//! These tests are designed to catch violations early in the development
//! cycle.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Workspace root, resolved from this package's manifest directory.
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("workspace root")
        .to_path_buf()
}

/// All `.rs` files under a workspace-relative source directory.
pub fn source_files(relative: &str) -> Vec<PathBuf> {
    let dir = workspace_root().join(relative);
    WalkDir::new(&dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// The portion of a source file before its `#[cfg(test)]` module, i.e.
/// what ships in production builds.
pub fn production_portion(path: &Path) -> String {
    let content = std::fs::read_to_string(path).expect("readable source file");
    content
        .split("#[cfg(test)]")
        .next()
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_sources_exist() {
        let files = source_files("scrambler/core/src");
        assert!(!files.is_empty(), "no core sources found; layout changed?");
    }

    #[test]
    fn core_is_free_of_ui_crates() {
        for file in source_files("scrambler/core/src") {
            let content = std::fs::read_to_string(&file).unwrap();
            for forbidden in ["ratatui", "crossterm"] {
                assert!(
                    !content.contains(forbidden),
                    "{} references {forbidden}; the core must stay surface-agnostic",
                    file.display()
                );
            }
        }
    }

    #[test]
    fn no_blocking_sleep_in_production_code() {
        for dir in ["scrambler/core/src", "tui/src"] {
            for file in source_files(dir) {
                let production = production_portion(&file);
                assert!(
                    !production.contains("thread::sleep"),
                    "{} calls thread::sleep in production code; use tokio timers",
                    file.display()
                );
            }
        }
    }

    #[test]
    fn randomness_stays_in_the_core() {
        for file in source_files("tui/src") {
            let content = std::fs::read_to_string(&file).unwrap();
            assert!(
                !content.contains("use rand") && !content.contains("rand::"),
                "{} samples randomness directly; only the core randomizes text",
                file.display()
            );
        }
    }
}
