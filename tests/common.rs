//! Common test utilities for the oxo test suite.

use oxo::tictactoe::Board;
use rand::{Rng, rngs::StdRng};

/// Play up to `plies` random legal moves from the empty board.
///
/// Stops early if the game ends first, so the returned board may be
/// terminal.
pub fn random_playout(rng: &mut StdRng, plies: usize) -> Board {
    let mut board = Board::new();
    for _ in 0..plies {
        if board.is_terminal() {
            break;
        }
        let empty = board.empty_positions();
        let pos = empty[rng.random_range(0..empty.len())];
        board = board.play(pos).expect("random move should be legal");
    }
    board
}
