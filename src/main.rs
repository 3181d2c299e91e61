//! Tactician CLI - play games and inspect decisions on stored snapshots.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Tactician - a deterministic tactical bot for grid diamond games
#[derive(Parser, Debug)]
#[command(name = "tactician")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with engine thresholds
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for tie-breaking (overrides the config file)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game over stdin/stdout, one JSON message per line
    Play {
        /// Registration token
        #[arg(long, env = "TOKEN")]
        token: Option<String>,

        /// Team name used when no token is given
        #[arg(long, default_value = "Tactician")]
        team_name: String,
    },

    /// Decide actions for one stored snapshot
    Decide {
        /// Snapshot file (one tick message as JSON)
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Decide actions for many snapshots in parallel and aggregate counts
    Batch {
        /// Snapshot files
        #[arg(required = true, num_args = 1..)]
        snapshots: Vec<PathBuf>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tactician=info"));
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging();

    let result = cli::load_config(args.config.as_deref(), args.seed).and_then(|config| {
        match args.command {
            Commands::Play { token, team_name } => cli::play::execute(config, token, team_name),

            Commands::Decide { snapshot, format } => {
                cli::decide::execute(&snapshot, config, format)
            }

            Commands::Batch {
                snapshots,
                threads,
                format,
                progress,
            } => cli::batch::execute(&snapshots, config, threads, format, progress),
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
