//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Board size constant for Tic-Tac-Toe.
pub const BOARD_SIZE: usize = 9;

/// A position on the game board (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    /// Create a new position, validating it's within board bounds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidPosition`] if the position is >= 9.
    pub fn new(value: usize) -> Result<Self, crate::Error> {
        if value < BOARD_SIZE {
            Ok(Position(value))
        } else {
            Err(crate::Error::InvalidPosition { position: value })
        }
    }

    /// Create a position from a known-good cell index.
    pub(crate) const fn from_raw(value: usize) -> Self {
        Position(value)
    }

    /// Get the inner value.
    pub fn value(&self) -> usize {
        self.0
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = usize::deserialize(deserializer)?;
        Position::new(value)
            .map_err(|_| serde::de::Error::custom(format!("position {value} is out of bounds")))
    }
}

/// A validated canonical board key.
///
/// The key is the lexicographically smallest wire encoding among a board's 8
/// symmetry-equivalent forms. [`parse`] checks both that the string decodes
/// and that it is a canonical fixed point; keys arriving through table
/// deserialization skip that check and are revalidated by
/// [`crate::table::GameTable::verify`].
///
/// # Examples
///
/// ```
/// use oxo::tictactoe::Board;
/// use oxo::types::CanonicalKey;
///
/// let key = Board::new().canonical_key();
/// assert_eq!(key.as_str(), "000000000");
///
/// let parsed = CanonicalKey::parse("000000001").unwrap();
/// assert_eq!(parsed, CanonicalKey::parse("000000001").unwrap());
/// ```
///
/// [`parse`]: CanonicalKey::parse
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    /// Parse and validate a canonical key from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a decodable board key, or if it
    /// decodes to a board whose canonical form differs from the string itself.
    pub fn parse(s: &str) -> Result<Self, crate::Error> {
        let board = crate::tictactoe::codec::decode(s)?;
        let canonical = board.canonical_key();
        if canonical.as_str() == s {
            Ok(canonical)
        } else {
            Err(crate::Error::NotCanonical {
                key: s.to_string(),
                canonical: canonical.into_string(),
            })
        }
    }

    /// Create from an encoding already known to be canonical.
    pub(crate) fn from_encoding(encoding: String) -> Self {
        CanonicalKey(encoding)
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of occupied cells in the encoded board (empty cells encode as '0').
    pub fn ply(&self) -> usize {
        self.0.bytes().filter(|&b| b != b'0').count()
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
