//! Winning line analysis for Tic-Tac-Toe

use super::board::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player has won by having three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Find the player holding a completed line, if any.
///
/// A position reached by legal play has at most one winner, since completing
/// a line ends the game.
pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            return first.to_player();
        }
    }
    None
}
