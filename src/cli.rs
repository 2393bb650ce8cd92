//! Command-line interface for the `project-layout` binary.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

use crate::{layout, paths, paths::ProjectPaths};

#[derive(Parser)]
#[command(name = "project-layout")]
#[command(about = "Show and create the project directory layout")]
pub struct Cli {
    /// Project root (overrides config.toml and PROJECT_DIR)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print every layout directory
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create missing layout directories
    Init,
    /// Report which layout directories exist
    Check,
}

impl Cli {
    /// Subcommand to run, `show` when none was given
    pub fn command(&self) -> Commands {
        match &self.command {
            Some(Commands::Show { json }) => Commands::Show { json: *json },
            Some(Commands::Init) => Commands::Init,
            Some(Commands::Check) => Commands::Check,
            None => Commands::Show { json: false },
        }
    }

    /// Layout for this run: `--root` if given, else the process-wide layout
    pub fn project(&self) -> std::io::Result<ProjectPaths> {
        match &self.root {
            Some(root) => Ok(ProjectPaths::new(std::path::absolute(root)?)),
            None => Ok(paths::project().clone()),
        }
    }
}

/// Run one command against a layout, writing its report to `out`.
///
/// Returns `false` when `check` finds the layout incomplete.
pub fn run(
    project: &ProjectPaths,
    command: Commands,
    out: &mut impl Write,
) -> Result<bool, Box<dyn std::error::Error>> {
    match command {
        Commands::Show { json } => {
            let entries = project.entries();
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
            } else {
                for entry in entries {
                    writeln!(out, "{:<15} {}", entry.name, entry.path.display())?;
                }
            }
        }
        Commands::Init => {
            let created = layout::ensure_dirs(project)?;
            if created.is_empty() {
                writeln!(out, "Layout already complete under {}", project.root().display())?;
            } else {
                for dir in created {
                    writeln!(out, "created {}", dir.display())?;
                }
            }
        }
        Commands::Check => {
            let statuses = layout::check(project);
            for status in &statuses {
                writeln!(
                    out,
                    "{:<15} {:<16} {}",
                    status.name,
                    status.state.as_str(),
                    status.path.display()
                )?;
            }
            if !layout::is_complete(&statuses) {
                tracing::warn!("Layout incomplete; run `project-layout init`");
                return Ok(false);
            }
        }
    }

    Ok(true)
}
