//! Board state representation and basic operations

use std::fmt;

use crate::types::BOARD_SIZE;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Wire digit used in board keys ('0' empty, '1' X, '2' O).
    ///
    /// Digit order makes `Empty < X < O` under the lexicographic comparison
    /// that canonicalization relies on.
    pub fn to_digit(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::X => '1',
            Cell::O => '2',
        }
    }

    pub fn from_digit(c: char) -> Option<Cell> {
        match c {
            '0' => Some(Cell::Empty),
            '1' => Some(Cell::X),
            '2' => Some(Cell::O),
            _ => None,
        }
    }

    /// Character used when rendering the board as a grid
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Digit used for the turn field in serialized records (X = 1, O = 2)
    pub fn to_turn_digit(self) -> u8 {
        match self {
            Player::X => 1,
            Player::O => 2,
        }
    }

    pub fn from_turn_digit(digit: u8) -> Option<Player> {
        match digit {
            1 => Some(Player::X),
            2 => Some(Player::O),
            _ => None,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
}

/// The nine cells of a board in row-major order.
///
/// The side to move is not stored. X always opens, so it is fully determined
/// by the piece counts; see [`Board::turn`].
///
/// This type implements `Copy` for efficiency since it's only 9 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Count pieces on the board
    pub fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => {}
            }
        }
        count
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_empty(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Get all empty positions in ascending order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Side to move, derived from the piece counts.
    ///
    /// X always opens, so equal counts mean X to move and an X surplus of
    /// exactly one means O to move. Any other count combination cannot arise
    /// from alternating play.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPieceCounts`] for unreachable counts.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::tictactoe::{Board, Player};
    ///
    /// let board = Board::new();
    /// assert_eq!(board.turn().unwrap(), Player::X);
    ///
    /// let board = board.play(4).unwrap();
    /// assert_eq!(board.turn().unwrap(), Player::O);
    /// ```
    pub fn turn(&self) -> Result<Player, crate::Error> {
        let count = self.count_pieces();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Place `player`'s piece at `pos` and return the new board
    ///
    /// # Errors
    ///
    /// Returns error if the position is out of bounds or already occupied.
    #[must_use = "make_move returns a new board state; the original is unchanged"]
    pub fn make_move(&self, pos: usize, player: Player) -> Result<Board, crate::Error> {
        if pos >= BOARD_SIZE {
            return Err(crate::Error::InvalidPosition { position: pos });
        }

        if !self.is_empty(pos) {
            return Err(crate::Error::InvalidMove { position: pos });
        }

        let mut new_state = *self;
        new_state.cells[pos] = player.to_cell();
        Ok(new_state)
    }

    /// Derive the side to move from the piece counts and place its piece at `pos`
    ///
    /// # Errors
    ///
    /// Returns error if the piece counts are unreachable, or the position is
    /// out of bounds or occupied.
    #[must_use = "play returns a new board state; the original is unchanged"]
    pub fn play(&self, pos: usize) -> Result<Board, crate::Error> {
        let player = self.turn()?;
        self.make_move(pos, player)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        super::lines::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        super::lines::winner(&self.cells)
    }

    /// Check if all cells are occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
