use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tabread::{Cli, Commands, commands};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Read(args) => commands::read::run(&args)?,
        Commands::Identify(args) => commands::identify::run(&args)?,
    };
    Ok(())
}
