//! Export command - flatten a table to CSV for analysis

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::config::{TableFormat, open_repository};
use crate::export::write_csv;

#[derive(Parser, Debug)]
#[command(about = "Flatten a table to one CSV row per state")]
pub struct ExportArgs {
    /// Table file path
    #[arg(long, short = 't', default_value = "game_tree.json")]
    pub table: PathBuf,

    /// Table format
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    pub format: TableFormat,

    /// Output CSV path
    #[arg(long, short = 'o', default_value = "game_tree.csv")]
    pub output: PathBuf,
}

pub fn execute(args: ExportArgs) -> Result<()> {
    let repo = open_repository(args.format, false);
    let table = repo.load(&args.table)?;

    write_csv(&table, &args.output)?;

    println!("✓ Summary exported to: {}", args.output.display());
    Ok(())
}
