//! Memoized exhaustive minimax over canonical board states

use std::{collections::HashMap, fmt};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::table::{GameState, MoveEval};
use crate::tictactoe::{Board, Player};
use crate::types::{CanonicalKey, Position};

/// Game-theoretic value of a position on the absolute scale where X
/// maximizes.
///
/// Variant order gives `OWins < Draw < XWins`, so `max` selects X's
/// preference and `min` selects O's. On the wire the value is the signed
/// score -1, 0, or +1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    OWins,
    Draw,
    XWins,
}

impl Outcome {
    /// Signed score: -1 (O wins), 0 (draw), +1 (X wins)
    pub fn value(self) -> i8 {
        match self {
            Outcome::OWins => -1,
            Outcome::Draw => 0,
            Outcome::XWins => 1,
        }
    }

    /// Parse a signed score back into an outcome.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidOutcome`] for values outside -1..=1.
    pub fn from_value(value: i8) -> Result<Outcome, crate::Error> {
        match value {
            -1 => Ok(Outcome::OWins),
            0 => Ok(Outcome::Draw),
            1 => Ok(Outcome::XWins),
            _ => Err(crate::Error::InvalidOutcome { value }),
        }
    }

    /// The outcome where `player` wins
    pub fn win_for(player: Player) -> Outcome {
        match player {
            Player::X => Outcome::XWins,
            Player::O => Outcome::OWins,
        }
    }

    /// The outcome `player` likes least, used to seed the minimax fold
    fn worst_for(player: Player) -> Outcome {
        match player {
            Player::X => Outcome::OWins,
            Player::O => Outcome::XWins,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::XWins => write!(f, "X wins"),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.value())
    }
}

impl<'de> Deserialize<'de> for Outcome {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i8::deserialize(deserializer)?;
        Outcome::from_value(value)
            .map_err(|_| serde::de::Error::custom(format!("score {value} is not -1, 0, or 1")))
    }
}

/// Exhaustive minimax solver with a memo keyed by canonical key.
///
/// Interior positions are memoized under their canonical key, so all eight
/// orientations of a position share one entry. Terminal positions are scored
/// directly on every visit and never enter the memo.
#[derive(Debug, Default)]
pub struct Solver {
    memo: HashMap<CanonicalKey, Outcome>,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct non-terminal positions evaluated so far
    pub fn solved_states(&self) -> usize {
        self.memo.len()
    }

    /// Game-theoretic value of `board` under optimal play from both sides.
    ///
    /// # Errors
    ///
    /// Returns error if the piece counts cannot arise from alternating play.
    pub fn solve(&mut self, board: &Board) -> Result<Outcome, crate::Error> {
        let to_move = board.turn()?;
        Ok(self.evaluate(board, to_move))
    }

    fn evaluate(&mut self, board: &Board, to_move: Player) -> Outcome {
        if let Some(winner) = board.winner() {
            return Outcome::win_for(winner);
        }
        if board.is_full() {
            return Outcome::Draw;
        }

        let key = board.canonical_key();
        if let Some(&outcome) = self.memo.get(&key) {
            return outcome;
        }

        let mut best = Outcome::worst_for(to_move);
        for pos in board.empty_positions() {
            let child = board
                .make_move(pos, to_move)
                .expect("empty positions are legal moves");
            let value = self.evaluate(&child, to_move.opponent());
            best = match to_move {
                Player::X => best.max(value),
                Player::O => best.min(value),
            };
        }

        self.memo.insert(key, best);
        best
    }

    /// Per-move evaluation of a non-terminal position.
    ///
    /// Moves are listed in ascending position order, one entry per empty
    /// cell. `winning_move_pos` is the optimal move with the lowest position
    /// index; consumers rely on that tie-break being stable.
    ///
    /// # Errors
    ///
    /// Returns error if the piece counts are unreachable or the position is
    /// terminal. Terminal positions carry no move records; score them with
    /// [`solve`] instead.
    ///
    /// [`solve`]: Solver::solve
    pub fn analyze(&mut self, board: &Board) -> Result<GameState, crate::Error> {
        let turn = board.turn()?;
        if board.is_terminal() {
            return Err(crate::Error::TerminalState {
                key: board.encode(),
            });
        }

        let mut moves = Vec::new();
        for pos in board.empty_positions() {
            let child = board
                .make_move(pos, turn)
                .expect("empty positions are legal moves");
            let score = self.evaluate(&child, turn.opponent());
            moves.push(MoveEval {
                pos: Position::from_raw(pos),
                to_board: child.encode(),
                minimax_score: score,
                is_optimal: false,
            });
        }

        let best_outcome = match turn {
            Player::X => moves.iter().map(|m| m.minimax_score).max(),
            Player::O => moves.iter().map(|m| m.minimax_score).min(),
        }
        .expect("a non-terminal board has at least one legal move");

        for entry in &mut moves {
            entry.is_optimal = entry.minimax_score == best_outcome;
        }

        // Ascending walk above makes the first optimal entry the
        // lowest-index one.
        let winning_move_pos = moves
            .iter()
            .find(|m| m.is_optimal)
            .map(|m| m.pos)
            .expect("a non-terminal board has at least one optimal move");

        Ok(GameState {
            turn,
            best_outcome,
            next_moves: moves,
            winning_move_pos,
        })
    }
}
