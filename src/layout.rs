//! Creating and inspecting the on-disk layout.

use std::path::PathBuf;

use crate::paths::ProjectPaths;

/// State of one layout directory on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    Present,
    Missing,
    NotADirectory,
}

impl DirState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirState::Present => "ok",
            DirState::Missing => "missing",
            DirState::NotADirectory => "not a directory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirStatus {
    pub name: &'static str,
    pub path: PathBuf,
    pub state: DirState,
}

/// Layout errors.
#[derive(Debug)]
pub enum LayoutError {
    CreateFailed(String, String),
    NotADirectory(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::CreateFailed(path, err) => {
                write!(f, "Failed to create directory {}: {}", path, err)
            }
            LayoutError::NotADirectory(path) => {
                write!(f, "Path exists but is not a directory: {}", path)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Create every missing layout directory.
///
/// Returns the directories that were actually created, so a second call on
/// the same tree returns an empty list.
pub fn ensure_dirs(paths: &ProjectPaths) -> Result<Vec<PathBuf>, LayoutError> {
    let dirs = paths.directories();

    // Nothing is created while any layout path is blocked by a file
    if let Some(blocked) = dirs.iter().find(|d| d.exists() && !d.is_dir()) {
        return Err(LayoutError::NotADirectory(blocked.display().to_string()));
    }

    let mut created = Vec::new();
    for dir in dirs {
        if dir.is_dir() {
            continue;
        }

        std::fs::create_dir_all(&dir)
            .map_err(|e| LayoutError::CreateFailed(dir.display().to_string(), e.to_string()))?;
        tracing::info!("Created {}", dir.display());
        created.push(dir);
    }

    Ok(created)
}

/// Report the on-disk state of every named entry, root included.
pub fn check(paths: &ProjectPaths) -> Vec<DirStatus> {
    paths
        .entries()
        .into_iter()
        .map(|entry| {
            let state = if entry.path.is_dir() {
                DirState::Present
            } else if entry.path.exists() {
                DirState::NotADirectory
            } else {
                DirState::Missing
            };
            DirStatus {
                name: entry.name,
                path: entry.path,
                state,
            }
        })
        .collect()
}

/// True when every entry is present as a directory
pub fn is_complete(statuses: &[DirStatus]) -> bool {
    statuses.iter().all(|s| s.state == DirState::Present)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestProject;

    #[test]
    fn test_ensure_dirs_creates_everything() {
        let project = TestProject::new();
        let created = ensure_dirs(&project.paths).unwrap();

        assert_eq!(created.len(), 8);
        for dir in project.paths.directories() {
            assert!(dir.is_dir(), "{} not created", dir.display());
        }
    }

    #[test]
    fn test_ensure_dirs_is_idempotent() {
        let project = TestProject::new();
        ensure_dirs(&project.paths).unwrap();

        let second = ensure_dirs(&project.paths).unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn test_ensure_dirs_skips_existing() {
        let project = TestProject::new();
        std::fs::create_dir_all(project.paths.data_raw()).unwrap();

        let created = ensure_dirs(&project.paths).unwrap();
        assert!(!created.contains(&project.paths.data_dir()));
        assert!(!created.contains(&project.paths.data_raw()));
        assert!(created.contains(&project.paths.data_processed()));
    }

    #[test]
    fn test_ensure_dirs_rejects_file_in_the_way() {
        let project = TestProject::new();
        std::fs::write(project.paths.models_dir(), b"not a dir").unwrap();

        let err = ensure_dirs(&project.paths).unwrap_err();
        assert!(matches!(err, LayoutError::NotADirectory(_)));
        assert!(err.to_string().ends_with("models"));

        // Directories listed before the blocked one are left untouched
        assert!(!project.paths.data_dir().exists());
        assert!(!project.paths.data_raw().exists());
    }

    #[test]
    fn test_check_reports_states() {
        let project = TestProject::new();
        std::fs::create_dir_all(project.paths.figures_dir()).unwrap();
        std::fs::write(project.paths.outputs_dir(), b"").unwrap();

        let statuses = check(&project.paths);
        let state_of = |name: &str| statuses.iter().find(|s| s.name == name).unwrap().state;

        assert_eq!(state_of("PROJECT_DIR"), DirState::Present);
        assert_eq!(state_of("REPORTS_DIR"), DirState::Present);
        assert_eq!(state_of("FIGURES_DIR"), DirState::Present);
        assert_eq!(state_of("TABLES_DIR"), DirState::Missing);
        assert_eq!(state_of("OUTPUTS_DIR"), DirState::NotADirectory);
        assert!(!is_complete(&statuses));
    }

    #[test]
    fn test_check_after_ensure_is_complete() {
        let project = TestProject::new();
        ensure_dirs(&project.paths).unwrap();
        assert!(is_complete(&check(&project.paths)));
    }
}
