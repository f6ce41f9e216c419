use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sorts_tools::cli::Cli;

fn main() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sorts_tools=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Cli::parse().run()
}
