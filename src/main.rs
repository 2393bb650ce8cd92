use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use project_layout::cli::{self, Cli};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "project_layout=info".into()),
    )
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let args = Cli::parse();
  let project = args.project()?;

  let ok = cli::run(&project, args.command(), &mut std::io::stdout().lock())?;
  Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
