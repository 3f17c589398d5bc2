//! mcglsl - glslangValidator setup and shader snippet tooling

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mcglsl_cli::cmd;
use mcglsl_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Logs go to stderr so snippet output on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Setup {
            os,
            dest,
            release_url,
        } => cmd::setup::setup(os, dest, release_url).await,
        Commands::Snippets { input, json } => {
            cmd::snippets::snippets(&input, json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
