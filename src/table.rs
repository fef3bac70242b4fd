//! The optimal-play lookup table and its wire format
//!
//! A table holds one record per non-terminal canonical state, keyed by the
//! canonical board key. Terminal states carry no record; consumers score
//! them directly from the board. The serialized field set and field order
//! are a consumer contract and must not change.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::solver::minimax::Outcome;
use crate::tictactoe::board::Cell;
use crate::tictactoe::{Board, Player, codec};
use crate::types::{CanonicalKey, Position};

/// Number of non-terminal canonical states in the full game.
///
/// The 3x3 game has 765 symmetry classes of reachable positions; 138 of
/// them are terminal and carry no record.
pub const CANONICAL_STATE_COUNT: usize = 627;

/// Evaluation of one legal move out of a recorded position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEval {
    pub pos: Position,
    /// Wire key of the resulting board, in the recorded instance's
    /// orientation. Canonicalize before looking it up in the table.
    pub to_board: String,
    pub minimax_score: Outcome,
    pub is_optimal: bool,
}

/// Record for one non-terminal canonical state.
///
/// Field order is the wire order. The move list belongs to the first raw
/// instance of the class reached during generation, which may be any
/// orientation of the canonical board; [`instance`] recovers it.
///
/// [`instance`]: GameState::instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    #[serde(with = "turn_digit")]
    pub turn: Player,
    pub best_outcome: Outcome,
    pub next_moves: Vec<MoveEval>,
    pub winning_move_pos: Position,
}

impl GameState {
    /// Reconstruct the board whose moves this record lists.
    ///
    /// Works backward from the first move: decoding its child key and
    /// emptying the moved cell gives the recorded instance. Returns `None`
    /// if the record has no moves or the child key fails to decode.
    pub fn instance(&self) -> Option<Board> {
        let first = self.next_moves.first()?;
        let mut board = codec::decode(&first.to_board).ok()?;
        board.cells[first.pos.value()] = Cell::Empty;
        Some(board)
    }
}

/// Turn field codec: X is 1 and O is 2 on the wire
mod turn_digit {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::tictactoe::Player;

    pub fn serialize<S: Serializer>(player: &Player, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(player.to_turn_digit())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Player, D::Error> {
        let digit = u8::deserialize(deserializer)?;
        Player::from_turn_digit(digit)
            .ok_or_else(|| serde::de::Error::custom(format!("turn digit {digit} is not 1 or 2")))
    }
}

/// Aggregate statistics over a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableStats {
    pub total_states: usize,
    /// Records per ply (pieces on the board), 0 through 8
    pub states_per_ply: [usize; 9],
    pub x_wins: usize,
    pub draws: usize,
    pub o_wins: usize,
    /// Records whose optimal move is unique
    pub unique_optimal: usize,
}

/// Complete solved-game lookup table keyed by canonical board key.
///
/// Serializes transparently as a single map from key to record. `BTreeMap`
/// keeps emission order sorted by key, so repeated generations produce
/// byte-identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameTable {
    states: BTreeMap<CanonicalKey, GameState>,
}

impl GameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub(crate) fn insert(&mut self, key: CanonicalKey, state: GameState) {
        self.states.insert(key, state);
    }

    /// Get the record for a canonical key
    pub fn get(&self, key: &CanonicalKey) -> Option<&GameState> {
        self.states.get(key)
    }

    /// Canonicalize `board` and look up its record.
    ///
    /// Returns `None` for terminal positions and for boards outside the
    /// table; the caller decides whether a miss is an error.
    pub fn lookup(&self, board: &Board) -> Option<&GameState> {
        self.states.get(&board.canonical_key())
    }

    /// Get the record for a canonical key, treating a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::StateNotFound`] if the key has no record.
    pub fn require(&self, key: &CanonicalKey) -> Result<&GameState, crate::Error> {
        self.states.get(key).ok_or_else(|| crate::Error::StateNotFound {
            key: key.as_str().to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CanonicalKey, &GameState)> {
        self.states.iter()
    }

    /// Check every structural invariant of the table.
    ///
    /// Each record must describe a live, canonical position whose recorded
    /// turn matches its piece counts; its move list must cover exactly the
    /// empty cells of the recorded instance in ascending order with correct
    /// child keys; every move score must agree with its child (terminal
    /// children scored directly, non-terminal children through their own
    /// record); and the aggregate fields must follow from the move scores.
    ///
    /// Since the checks anchor at terminal positions and link every record
    /// to its children, a table that passes holds exactly the minimax
    /// values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TableInvariant`] naming the offending key on
    /// the first violation found.
    pub fn verify(&self) -> Result<(), crate::Error> {
        for (key, state) in &self.states {
            self.verify_state(key, state)?;
        }
        Ok(())
    }

    fn verify_state(&self, key: &CanonicalKey, state: &GameState) -> Result<(), crate::Error> {
        let fail = |reason: String| crate::Error::TableInvariant {
            key: key.as_str().to_string(),
            reason,
        };

        let canonical =
            codec::decode(key.as_str()).map_err(|e| fail(format!("key does not decode: {e}")))?;
        if canonical.canonical_key() != *key {
            return Err(fail("key is not a canonical form".to_string()));
        }
        if canonical.is_terminal() {
            return Err(fail("terminal state has a record".to_string()));
        }

        let turn = canonical
            .turn()
            .map_err(|e| fail(format!("unreachable piece counts: {e}")))?;
        if turn != state.turn {
            return Err(fail(format!(
                "recorded turn {} does not match the piece counts",
                state.turn
            )));
        }

        let Some(instance) = state.instance() else {
            return Err(fail("record has no decodable moves".to_string()));
        };
        if instance.canonical_key() != *key {
            return Err(fail(
                "recorded moves belong to a different symmetry class".to_string(),
            ));
        }

        let positions: Vec<usize> = state.next_moves.iter().map(|m| m.pos.value()).collect();
        if positions != instance.empty_positions() {
            return Err(fail(
                "moves do not cover the empty cells in ascending order".to_string(),
            ));
        }

        let mut best: Option<Outcome> = None;
        for entry in &state.next_moves {
            let child = instance
                .make_move(entry.pos.value(), turn)
                .map_err(|e| fail(format!("move {} is illegal: {e}", entry.pos)))?;
            if child.encode() != entry.to_board {
                return Err(fail(format!("move {} child key mismatch", entry.pos)));
            }

            let expected = if let Some(winner) = child.winner() {
                Outcome::win_for(winner)
            } else if child.is_full() {
                Outcome::Draw
            } else {
                match self.states.get(&child.canonical_key()) {
                    Some(child_state) => child_state.best_outcome,
                    None => {
                        return Err(fail(format!(
                            "child of move {} is missing from the table",
                            entry.pos
                        )));
                    }
                }
            };
            if entry.minimax_score != expected {
                return Err(fail(format!(
                    "move {} score disagrees with its child",
                    entry.pos
                )));
            }

            best = Some(match best {
                None => entry.minimax_score,
                Some(value) => match turn {
                    Player::X => value.max(entry.minimax_score),
                    Player::O => value.min(entry.minimax_score),
                },
            });
        }

        let Some(best) = best else {
            return Err(fail("record has no moves".to_string()));
        };
        if best != state.best_outcome {
            return Err(fail(format!(
                "best_outcome {} does not aggregate the move scores",
                state.best_outcome.value()
            )));
        }

        for entry in &state.next_moves {
            if entry.is_optimal != (entry.minimax_score == best) {
                return Err(fail(format!(
                    "move {} optimality flag is wrong",
                    entry.pos
                )));
            }
        }

        let first_optimal = state
            .next_moves
            .iter()
            .find(|m| m.is_optimal)
            .map(|m| m.pos);
        if first_optimal != Some(state.winning_move_pos) {
            return Err(fail(
                "winning_move_pos is not the lowest-index optimal move".to_string(),
            ));
        }

        Ok(())
    }

    /// Aggregate counts over all records
    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats {
            total_states: self.states.len(),
            states_per_ply: [0; 9],
            x_wins: 0,
            draws: 0,
            o_wins: 0,
            unique_optimal: 0,
        };

        for (key, state) in &self.states {
            let ply = key.ply();
            if ply < stats.states_per_ply.len() {
                stats.states_per_ply[ply] += 1;
            }

            match state.best_outcome {
                Outcome::XWins => stats.x_wins += 1,
                Outcome::Draw => stats.draws += 1,
                Outcome::OWins => stats.o_wins += 1,
            }

            if state.next_moves.iter().filter(|m| m.is_optimal).count() == 1 {
                stats.unique_optimal += 1;
            }
        }

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{Solver, build_table};
    use crate::tictactoe::codec::decode;

    #[test]
    fn test_record_wire_shape() {
        let mut solver = Solver::new();
        let state = solver.analyze(&Board::new()).unwrap();
        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["turn"], 1);
        assert_eq!(json["best_outcome"], 0);
        assert_eq!(json["winning_move_pos"], 0);

        let moves = json["next_moves"].as_array().unwrap();
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0]["pos"], 0);
        assert_eq!(moves[0]["to_board"], "100000000");
        assert_eq!(moves[0]["minimax_score"], 0);
        assert_eq!(moves[0]["is_optimal"], true);
    }

    #[test]
    fn test_record_roundtrip() {
        let mut solver = Solver::new();
        let state = solver.analyze(&decode("110000002").unwrap()).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let parsed: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_record_rejects_bad_turn_digit() {
        let json = r#"{"turn":3,"best_outcome":0,"next_moves":[],"winning_move_pos":0}"#;
        let result: Result<GameState, _> = serde_json::from_str(json);
        assert!(result.unwrap_err().to_string().contains("turn digit"));
    }

    #[test]
    fn test_record_rejects_out_of_range_score() {
        let json = r#"{"turn":1,"best_outcome":4,"next_moves":[],"winning_move_pos":0}"#;
        assert!(serde_json::from_str::<GameState>(json).is_err());
    }

    #[test]
    fn test_instance_recovers_analyzed_board() {
        let board = decode("100000000").unwrap();
        let mut solver = Solver::new();
        let state = solver.analyze(&board).unwrap();

        assert_eq!(state.instance().unwrap(), board);
    }

    #[test]
    fn test_lookup_canonicalizes_the_probe() {
        let table = build_table().unwrap();

        // All four corner openings resolve to the same record.
        let canonical = table
            .lookup(&Board::new().play(0).unwrap())
            .unwrap();
        for corner in [2, 6, 8] {
            let probe = Board::new().play(corner).unwrap();
            let state = table.lookup(&probe).unwrap();
            assert_eq!(state, canonical);
        }
    }

    #[test]
    fn test_lookup_misses_terminal_positions() {
        let table = build_table().unwrap();
        let won = decode("111220000").unwrap();
        assert!(table.lookup(&won).is_none());
    }

    #[test]
    fn test_require_reports_missing_key() {
        let table = GameTable::new();
        let key = CanonicalKey::parse("000000000").unwrap();
        let err = table.require(&key).unwrap_err();

        assert!(matches!(err, crate::Error::StateNotFound { .. }));
        assert!(err.to_string().contains("000000000"));
    }

    #[test]
    fn test_empty_table_passes_verify() {
        assert!(GameTable::new().verify().is_ok());
    }

    #[test]
    fn test_verify_catches_missing_children() {
        let mut solver = Solver::new();
        let root = Board::new();
        let record = solver.analyze(&root).unwrap();

        let mut table = GameTable::new();
        table.insert(root.canonical_key(), record);

        let err = table.verify().unwrap_err();
        assert!(err.to_string().contains("missing from the table"));
    }

    #[test]
    fn test_verify_catches_tampered_score() {
        let mut table = build_table().unwrap();
        let key = CanonicalKey::parse("000000000").unwrap();

        let mut record = table.require(&key).unwrap().clone();
        record.next_moves[0].minimax_score = Outcome::XWins;
        table.insert(key, record);

        assert!(table.verify().is_err());
    }

    #[test]
    fn test_verify_catches_tampered_tie_break() {
        let mut table = build_table().unwrap();
        let key = CanonicalKey::parse("000000000").unwrap();

        // Every root move is optimal, so the tie-break must point at cell 0.
        let mut record = table.require(&key).unwrap().clone();
        record.winning_move_pos = Position::new(4).unwrap();
        table.insert(key, record);

        let err = table.verify().unwrap_err();
        assert!(err.to_string().contains("lowest-index optimal move"));
    }

    #[test]
    fn test_stats_on_full_table() {
        let table = build_table().unwrap();
        let stats = table.stats();

        assert_eq!(stats.total_states, CANONICAL_STATE_COUNT);
        assert_eq!(stats.states_per_ply[0], 1);
        assert_eq!(stats.states_per_ply[1], 3);
        assert_eq!(stats.states_per_ply.iter().sum::<usize>(), stats.total_states);
        assert_eq!(
            stats.x_wins + stats.draws + stats.o_wins,
            stats.total_states
        );
        assert!(stats.unique_optimal > 0);
    }
}
