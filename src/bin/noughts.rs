//! noughts CLI - Tic-Tac-Toe against a perfect alpha-beta opponent
//!
//! Subcommands:
//! - `play`: a human against the computer on the console
//! - `watch`: the computer against itself, with a tally of results
//! - `analyze`: best move and value of a single position

use anyhow::Result;
use clap::{Parser, Subcommand};
use noughts::cli::{
    commands::{analyze, play, watch},
    config::CommonConfig,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe against a perfect opponent", long_about = None)]
struct Cli {
    /// Log search and game diagnostics to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the computer
    Play(play::PlayArgs),

    /// Let the computer play itself
    Watch(watch::WatchArgs),

    /// Analyze a board position
    Analyze(analyze::AnalyzeArgs),
}

fn init_tracing(common: &CommonConfig) {
    let default_level = if common.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&CommonConfig::default().with_verbose(cli.verbose));

    match cli.command {
        Commands::Play(args) => play::execute(args),
        Commands::Watch(args) => watch::execute(args),
        Commands::Analyze(args) => analyze::execute(args),
    }
}
