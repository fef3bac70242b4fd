//! Exhaustive exploration of the symmetry-reduced game tree

use std::collections::HashSet;

use crate::solver::minimax::Solver;
use crate::table::GameTable;
use crate::tictactoe::Board;
use crate::types::CanonicalKey;

/// Build the full lookup table by depth-first search from the empty board.
///
/// Every line of play is walked with children visited in ascending position
/// order, and each canonical symmetry class is expanded exactly once. The
/// first raw instance of a class to be reached is the one whose move list
/// gets recorded, so the orientation of recorded moves is fixed by the walk
/// order and identical across runs. Terminal classes are marked visited but
/// get no record.
///
/// The finished table is verified before being returned; a table handed to
/// callers always satisfies the structural invariants.
///
/// # Errors
///
/// Returns error if a reached position has unreachable piece counts or the
/// finished table fails verification. Both indicate a bug in the walk, and
/// no partial table is returned.
pub fn build_table() -> Result<GameTable, crate::Error> {
    let mut explorer = Explorer {
        solver: Solver::new(),
        visited: HashSet::new(),
        table: GameTable::new(),
    };
    explorer.explore(&Board::new())?;
    explorer.table.verify()?;
    Ok(explorer.table)
}

struct Explorer {
    solver: Solver,
    visited: HashSet<CanonicalKey>,
    table: GameTable,
}

impl Explorer {
    fn explore(&mut self, board: &Board) -> Result<(), crate::Error> {
        let key = board.canonical_key();
        if !self.visited.insert(key.clone()) {
            return Ok(());
        }

        if board.is_terminal() {
            return Ok(());
        }

        let turn = board.turn()?;
        let record = self.solver.analyze(board)?;
        self.table.insert(key, record);

        for pos in board.empty_positions() {
            let child = board
                .make_move(pos, turn)
                .expect("empty positions are legal moves");
            self.explore(&child)?;
        }

        Ok(())
    }
}
