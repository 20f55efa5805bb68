//! Seekit CLI - demonstration harness for the search toolkit
//!
//! # Usage
//!
//! ```bash
//! # Classic demo: sample array plus two random linked lists
//! seekit demo
//!
//! # Search a caller-supplied sorted sequence with every algorithm
//! seekit find 2.7 --values 2.4,2.7,3.0,6.4,6.5,8.1
//!
//! # Or with just one of them
//! seekit find 2.7 --values 2.4,2.7,3.0,6.4,6.5,8.1 --algo fibonacci
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{demo, find};

/// Seekit - classical search algorithms over ordered containers
///
/// The library never sorts and never validates sortedness; the
/// order-requiring algorithms expect already-sorted input.
#[derive(Parser)]
#[command(
    name = "seekit",
    version,
    about = "Seekit CLI - classical search algorithm demos"
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every search over the classic sample data
    Demo(demo::DemoArgs),

    /// Search a supplied sequence for an item
    Find(find::FindArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Demo(args) => demo::run(args),
        Commands::Find(args) => find::run(args),
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();
}
