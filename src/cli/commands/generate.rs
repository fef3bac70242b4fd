//! Generate command - solve the game and write the lookup table

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Parser;

use crate::cli::config::{TableFormat, open_repository};
use crate::cli::output::{create_spinner, format_number, print_kv, print_section};
use crate::solver::build_table;
use crate::table::CANONICAL_STATE_COUNT;
use crate::tictactoe::Board;

#[derive(Parser, Debug)]
#[command(about = "Solve the game and write the lookup table")]
pub struct GenerateArgs {
    /// Output file path
    #[arg(long, short = 'o', default_value = "game_tree.json")]
    pub output: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    pub format: TableFormat,

    /// Indent JSON output for human inspection
    #[arg(long)]
    pub pretty: bool,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    print_section("Game Tree Generation");

    let spinner = create_spinner("Solving all positions...");
    let table = build_table()?;
    spinner.finish_with_message(format!(
        "Solved {} canonical states",
        format_number(table.len())
    ));

    if table.len() != CANONICAL_STATE_COUNT {
        return Err(anyhow!(
            "expected {CANONICAL_STATE_COUNT} canonical states, found {}",
            table.len()
        ));
    }

    let root_state = table
        .lookup(&Board::new())
        .ok_or_else(|| anyhow!("generated table has no empty-board record"))?;

    let stats = table.stats();
    print_kv("States", &format_number(stats.total_states));
    print_kv("Root outcome", &root_state.best_outcome.to_string());
    print_kv("Unique optimal", &format_number(stats.unique_optimal));

    let repo = open_repository(args.format, args.pretty);
    repo.save(&table, &args.output)?;

    let size = std::fs::metadata(&args.output)?.len();
    println!("\n✓ Table written to: {}", args.output.display());
    print_kv("File size", &format!("{:.1} KB", size as f64 / 1024.0));

    Ok(())
}
