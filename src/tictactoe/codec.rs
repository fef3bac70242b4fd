//! Wire codec for fixed-width board keys
//!
//! A board serializes as nine digits in row-major order: '0' for an empty
//! cell, '1' for X, '2' for O. The empty board is "000000000". Consumers of
//! generated tables depend on this exact encoding, so it must not change.

use super::board::{Board, Cell};
use crate::types::BOARD_SIZE;

/// Encode a board as its nine-digit key
pub fn encode(board: &Board) -> String {
    board.cells.iter().map(|&c| c.to_digit()).collect()
}

/// Decode a nine-digit key into a board.
///
/// # Errors
///
/// Returns error if the key is not exactly nine characters or contains a
/// character other than '0', '1', or '2'.
pub fn decode(s: &str) -> Result<Board, crate::Error> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != BOARD_SIZE {
        return Err(crate::Error::InvalidBoardLength {
            expected: BOARD_SIZE,
            got: chars.len(),
            context: s.to_string(),
        });
    }

    let mut cells = [Cell::Empty; 9];
    for (i, &c) in chars.iter().enumerate() {
        cells[i] = Cell::from_digit(c).ok_or_else(|| crate::Error::InvalidSymbol {
            symbol: c,
            position: i,
            context: s.to_string(),
        })?;
    }

    Ok(Board { cells })
}

/// Decode a key and check that its piece counts can arise from alternating
/// play with X opening.
///
/// # Errors
///
/// Returns error if the key is malformed or the counts are unreachable.
pub fn decode_checked(s: &str) -> Result<Board, crate::Error> {
    let board = decode(s)?;
    board.turn()?;
    Ok(board)
}

impl Board {
    /// Encode as the nine-digit wire key
    pub fn encode(&self) -> String {
        encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::board::Player;

    #[test]
    fn test_encode_empty_board() {
        assert_eq!(Board::new().encode(), "000000000");
    }

    #[test]
    fn test_encode_after_moves() {
        let mut board = Board::new();
        board = board.play(0).unwrap(); // X
        board = board.play(4).unwrap(); // O
        board = board.play(8).unwrap(); // X

        assert_eq!(board.encode(), "100020001");
    }

    #[test]
    fn test_decode_roundtrip() {
        let board = decode("102010020").unwrap();
        assert_eq!(board.encode(), "102010020");
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[2], Cell::O);
        assert_eq!(board.cells[4], Cell::X);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let err = decode("1020").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength { expected: 9, got: 4, .. }
        ));

        assert!(decode("1020100201").is_err());
        assert!(decode("").is_err());
    }

    #[test]
    fn test_decode_rejects_bad_symbol() {
        let err = decode("10201002x").unwrap_err();
        match err {
            crate::Error::InvalidSymbol { symbol, position, .. } => {
                assert_eq!(symbol, 'x');
                assert_eq!(position, 8);
            }
            other => panic!("unexpected error: {other}"),
        }

        assert!(decode("300000000").is_err());
    }

    #[test]
    fn test_decode_checked_accepts_reachable_counts() {
        let board = decode_checked("110000002").unwrap();
        assert_eq!(board.turn().unwrap(), Player::O);
    }

    #[test]
    fn test_decode_checked_rejects_unreachable_counts() {
        // Two X pieces and no O: X moved twice in a row.
        let err = decode_checked("110000000").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidPieceCounts {
                x_count: 2,
                o_count: 0
            }
        ));

        // O ahead of X.
        assert!(decode_checked("200000000").is_err());
    }
}
