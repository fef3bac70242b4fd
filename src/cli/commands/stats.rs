//! Stats command - summarize a generated table

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::config::{TableFormat, open_repository};
use crate::cli::output::{
    format_number, print_kv, print_section, print_stats_table, print_subsection,
};

#[derive(Parser, Debug)]
#[command(about = "Summarize a generated table")]
pub struct StatsArgs {
    /// Table file path
    #[arg(long, short = 't', default_value = "game_tree.json")]
    pub table: PathBuf,

    /// Table format
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    pub format: TableFormat,
}

pub fn execute(args: StatsArgs) -> Result<()> {
    let repo = open_repository(args.format, false);
    let table = repo.load(&args.table)?;
    let stats = table.stats();

    let total = format_number(stats.total_states);
    let x_wins = format_number(stats.x_wins);
    let draws = format_number(stats.draws);
    let o_wins = format_number(stats.o_wins);
    let unique = format_number(stats.unique_optimal);

    print_section("Table Statistics");
    print_stats_table(&[
        ("Total states", total.as_str()),
        ("X favorable", x_wins.as_str()),
        ("Drawn", draws.as_str()),
        ("O favorable", o_wins.as_str()),
        ("Unique optimal", unique.as_str()),
    ]);

    print_subsection("States per ply");
    for (ply, count) in stats.states_per_ply.iter().enumerate() {
        print_kv(&format!("Ply {ply}"), &format_number(*count));
    }

    Ok(())
}
