use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::process;

use socnet_core::cli::{dispatch, Cli};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = dispatch::execute(cli.command) {
        eprintln!("{} {e:#}", "error:".red().bold());
        process::exit(1);
    }

    Ok(())
}
