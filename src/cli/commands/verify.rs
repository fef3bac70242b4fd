//! Verify command - check a table's structural invariants

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::cli::config::{TableFormat, open_repository};
use crate::cli::output::{format_number, print_kv};
use crate::table::CANONICAL_STATE_COUNT;

#[derive(Parser, Debug)]
#[command(about = "Check a generated table's structural invariants")]
pub struct VerifyArgs {
    /// Table file path
    #[arg(long, short = 't', default_value = "game_tree.json")]
    pub table: PathBuf,

    /// Table format
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    pub format: TableFormat,
}

pub fn execute(args: VerifyArgs) -> Result<()> {
    let repo = open_repository(args.format, false);
    let table = repo.load(&args.table)?;

    table.verify()?;

    if table.len() != CANONICAL_STATE_COUNT {
        bail!(
            "expected {} canonical states, found {}",
            CANONICAL_STATE_COUNT,
            table.len()
        );
    }

    println!("✓ Table passed verification");
    print_kv("States", &format_number(table.len()));
    Ok(())
}
