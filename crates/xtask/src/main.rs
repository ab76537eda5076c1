//! Development tasks for the combat workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod content;

use anyhow::Result;
use clap::Parser;
use commands::{CheckContent, ListActors, Simulate};

/// Development tasks for the combat workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for combat content and balance", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Play a seeded battle between two actor templates
    Simulate(Simulate),

    /// Validate cross-references between content files
    CheckContent(CheckContent),

    /// List actor templates and their loadouts
    ListActors(ListActors),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Simulate(cmd) => cmd.execute(),
        Command::CheckContent(cmd) => cmd.execute(),
        Command::ListActors(cmd) => cmd.execute(),
    }
}
