//! Project path functions - single source of truth for the directory layout.
//!
//! Every directory is derived from one project root, so nothing outside this
//! module should join layout segments by hand.
//!
//! ```text
//! <root>/
//! ├── data/
//! │   ├── raw/
//! │   └── processed/
//! ├── models/
//! ├── reports/
//! │   ├── figures/
//! │   └── tables/
//! └── outputs/
//! ```
//!
//! ## Root resolution
//!
//! The process-wide root defaults to the crate directory and can be
//! overridden through `config.toml` or `PROJECT_DIR` (see config.rs).

use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::config;

// ==================== Segments ====================

pub const DATA_SEGMENT: &str = "data";
pub const RAW_SEGMENT: &str = "raw";
pub const PROCESSED_SEGMENT: &str = "processed";
pub const MODELS_SEGMENT: &str = "models";
pub const REPORTS_SEGMENT: &str = "reports";
pub const FIGURES_SEGMENT: &str = "figures";
pub const TABLES_SEGMENT: &str = "tables";
pub const OUTPUTS_SEGMENT: &str = "outputs";

/// Directory containing this crate's manifest (parent of `src/`)
pub const DEFAULT_PROJECT_DIR: &str = env!("CARGO_MANIFEST_DIR");

// ==================== Layout ====================

/// Directory layout rooted at a single project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

/// One named directory of the layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEntry {
    pub name: &'static str,
    pub path: PathBuf,
}

impl ProjectPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.join(DATA_SEGMENT)
    }

    pub fn data_raw(&self) -> PathBuf {
        self.data_dir().join(RAW_SEGMENT)
    }

    pub fn data_processed(&self) -> PathBuf {
        self.data_dir().join(PROCESSED_SEGMENT)
    }

    pub fn models_dir(&self) -> PathBuf {
        self.root.join(MODELS_SEGMENT)
    }

    pub fn reports_dir(&self) -> PathBuf {
        self.root.join(REPORTS_SEGMENT)
    }

    pub fn figures_dir(&self) -> PathBuf {
        self.reports_dir().join(FIGURES_SEGMENT)
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.reports_dir().join(TABLES_SEGMENT)
    }

    pub fn outputs_dir(&self) -> PathBuf {
        self.root.join(OUTPUTS_SEGMENT)
    }

    /// All named entries, root first, parents before children.
    pub fn entries(&self) -> Vec<LayoutEntry> {
        let entry = |name, path| LayoutEntry { name, path };
        vec![
            entry("PROJECT_DIR", self.root.clone()),
            entry("DATA_DIR", self.data_dir()),
            entry("DATA_RAW", self.data_raw()),
            entry("DATA_PROCESSED", self.data_processed()),
            entry("MODELS_DIR", self.models_dir()),
            entry("REPORTS_DIR", self.reports_dir()),
            entry("FIGURES_DIR", self.figures_dir()),
            entry("TABLES_DIR", self.tables_dir()),
            entry("OUTPUTS_DIR", self.outputs_dir()),
        ]
    }

    /// Derived directories only (the root itself is excluded).
    pub fn directories(&self) -> Vec<PathBuf> {
        self.entries().into_iter().skip(1).map(|e| e.path).collect()
    }
}

impl Default for ProjectPaths {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_DIR)
    }
}

// ==================== Process-wide Paths ====================

/// Lazily resolved layout for this process
static PROJECT: OnceLock<ProjectPaths> = OnceLock::new();

/// Get the process-wide layout, resolving the root on first use
pub fn project() -> &'static ProjectPaths {
    PROJECT.get_or_init(|| ProjectPaths::new(config::load_project_dir()))
}

pub fn project_dir() -> &'static Path {
    project().root()
}

pub fn data_dir() -> PathBuf {
    project().data_dir()
}

pub fn data_raw() -> PathBuf {
    project().data_raw()
}

pub fn data_processed() -> PathBuf {
    project().data_processed()
}

pub fn models_dir() -> PathBuf {
    project().models_dir()
}

pub fn reports_dir() -> PathBuf {
    project().reports_dir()
}

pub fn figures_dir() -> PathBuf {
    project().figures_dir()
}

pub fn tables_dir() -> PathBuf {
    project().tables_dir()
}

pub fn outputs_dir() -> PathBuf {
    project().outputs_dir()
}

// ==================== Tests ====================
