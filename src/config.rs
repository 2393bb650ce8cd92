//! Project root configuration.
//!
//! The root is resolved with priority: config.toml > PROJECT_DIR (.env or
//! environment) > crate directory.

use serde::Deserialize;
use std::path::{Component, Path, PathBuf};

use crate::paths::DEFAULT_PROJECT_DIR;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the project root
pub const PROJECT_DIR_ENV: &str = "PROJECT_DIR";

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    project: Option<ProjectConfig>,
}

#[derive(Debug, Deserialize)]
struct ProjectConfig {
    root: Option<String>,
}

/// Where the project root came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootSource {
    ConfigFile,
    Env,
    Default,
}

impl RootSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootSource::ConfigFile => "config.toml",
            RootSource::Env => PROJECT_DIR_ENV,
            RootSource::Default => "default",
        }
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    Io(String, String),
    Parse(String, String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, err) => write!(f, "IO error reading {}: {}", path, err),
            ConfigError::Parse(path, err) => write!(f, "Parse error in {}: {}", path, err),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read the root override from a config file, if the file exists.
pub fn read_config_root(path: &Path) -> Result<Option<String>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::Io(path.display().to_string(), e.to_string()))?;
    parse_config_root(&contents)
        .map_err(|e| ConfigError::Parse(path.display().to_string(), e.to_string()))
}

fn parse_config_root(contents: &str) -> Result<Option<String>, toml::de::Error> {
    let config: AppConfig = toml::from_str(contents)?;
    Ok(config
        .project
        .and_then(|p| p.root)
        .filter(|root| !root.trim().is_empty()))
}

/// Pick the project root from the available sources.
///
/// Relative roots are made absolute against the working directory and
/// `..` segments are folded away.
pub fn resolve_root(config_root: Option<String>, env_root: Option<String>) -> (PathBuf, RootSource) {
    let (root, source) = if let Some(root) = config_root {
        (PathBuf::from(root), RootSource::ConfigFile)
    } else if let Some(root) = env_root.filter(|r| !r.trim().is_empty()) {
        (PathBuf::from(root), RootSource::Env)
    } else {
        (PathBuf::from(DEFAULT_PROJECT_DIR), RootSource::Default)
    };

    (absolutize(root), source)
}

fn absolutize(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return normalize(&path);
    }
    match std::path::absolute(&path) {
        Ok(abs) => normalize(&abs),
        Err(e) => {
            tracing::warn!("Could not make {} absolute: {}", path.display(), e);
            path
        }
    }
}

/// Drop `.` and fold `..` segments without touching the filesystem.
///
/// Symlinks are not followed, so `link/..` folds to the link's parent.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                let at_root = matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                );
                if !at_root {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

/// Resolve the root from an explicit config file and env value.
///
/// An unreadable or malformed config file is logged and skipped.
pub fn load_project_dir_from(config: &Path, env_root: Option<String>) -> (PathBuf, RootSource) {
    let config_root = match read_config_root(config) {
        Ok(root) => root,
        Err(e) => {
            tracing::warn!("Ignoring {}: {}", config.display(), e);
            None
        }
    };

    resolve_root(config_root, env_root)
}

/// Load the project root with priority: config.toml > .env/PROJECT_DIR > default
pub fn load_project_dir() -> PathBuf {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let env_root = std::env::var(PROJECT_DIR_ENV).ok();
    let (root, source) = load_project_dir_from(Path::new(CONFIG_FILE), env_root);
    tracing::info!("Using project root from {}: {}", source.as_str(), root.display());
    root
}
