//! Test utilities for filesystem layout tests.

use tempfile::TempDir;

use crate::paths::ProjectPaths;

/// Project layout rooted in a fresh temporary directory.
///
/// The directory is removed when dropped.
pub struct TestProject {
    /// Temporary directory (kept alive for the layout's lifetime)
    pub temp: TempDir,
    pub paths: ProjectPaths,
}

impl TestProject {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let paths = ProjectPaths::new(temp.path());
        Self { temp, paths }
    }
}
