//! oxo CLI - exhaustive Tic-Tac-Toe solver and table toolkit
//!
//! This CLI provides a unified interface for:
//! - Generating the optimal-play lookup table
//! - Querying single positions against a generated table
//! - Summarizing and verifying tables
//! - Exporting table summaries for further analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Exhaustive Tic-Tac-Toe solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the game and write the lookup table
    Generate(oxo::cli::commands::generate::GenerateArgs),

    /// Look up one board position in a generated table
    Query(oxo::cli::commands::query::QueryArgs),

    /// Summarize a generated table
    Stats(oxo::cli::commands::stats::StatsArgs),

    /// Check a generated table's structural invariants
    Verify(oxo::cli::commands::verify::VerifyArgs),

    /// Flatten a table to one CSV row per state
    Export(oxo::cli::commands::export::ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => oxo::cli::commands::generate::execute(args),
        Commands::Query(args) => oxo::cli::commands::query::execute(args),
        Commands::Stats(args) => oxo::cli::commands::stats::execute(args),
        Commands::Verify(args) => oxo::cli::commands::verify::execute(args),
        Commands::Export(args) => oxo::cli::commands::export::execute(args),
    }
}
