//! Query command - look up one board position in a table

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::cli::config::{TableFormat, open_repository};
use crate::cli::output::{print_kv, print_subsection};
use crate::solver::Outcome;
use crate::tictactoe::codec;

#[derive(Parser, Debug)]
#[command(about = "Look up one board position in a generated table")]
pub struct QueryArgs {
    /// Board key: nine digits, row-major, 0 empty / 1 X / 2 O
    pub board: String,

    /// Table file path
    #[arg(long, short = 't', default_value = "game_tree.json")]
    pub table: PathBuf,

    /// Table format
    #[arg(long, short = 'f', value_enum, default_value = "json")]
    pub format: TableFormat,
}

pub fn execute(args: QueryArgs) -> Result<()> {
    let board = codec::decode_checked(&args.board)?;
    let key = board.canonical_key();

    println!("{board}");
    print_kv("Canonical key", key.as_str());

    if board.is_terminal() {
        let score = match board.winner() {
            Some(player) => Outcome::win_for(player),
            None => Outcome::Draw,
        };
        print_kv("Terminal", &score.to_string());
        println!("\nTerminal positions carry no table record; score them directly.");
        return Ok(());
    }

    let repo = open_repository(args.format, false);
    let table = repo.load(&args.table)?;

    let Some(state) = table.lookup(&board) else {
        println!("\nNo entry for {key}; was the table generated from the empty board?");
        return Ok(());
    };

    print_kv("Turn", &state.turn.to_string());
    print_kv("Best outcome", &state.best_outcome.to_string());
    print_kv("Best move", &state.winning_move_pos.to_string());

    print_subsection("Moves");
    for entry in &state.next_moves {
        let marker = if entry.is_optimal { "*" } else { " " };
        println!(
            "  {marker} pos {} -> {}  score {:+}",
            entry.pos,
            entry.to_board,
            entry.minimax_score.value()
        );
    }

    if state.instance().is_some_and(|recorded| recorded != board) {
        println!("\nMoves are shown in the recorded orientation of this symmetry class.");
    }

    Ok(())
}
