//! D4 symmetry group operations for board canonicalization

use super::board::{Board, Cell};
use crate::types::CanonicalKey;

/// Index permutations for the eight symmetries of the square.
///
/// Each row is a gather map: transforming a board reads input cell
/// `PERMUTATIONS[s][i]` into output cell `i`. Row order matches the
/// discriminants of [`Symmetry`]. These tables are part of the canonical-key
/// contract; changing them changes every key in a generated table.
const PERMUTATIONS: [[usize; 9]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8], // identity
    [6, 3, 0, 7, 4, 1, 8, 5, 2], // rotate 90 clockwise
    [8, 7, 6, 5, 4, 3, 2, 1, 0], // rotate 180
    [2, 5, 8, 1, 4, 7, 0, 3, 6], // rotate 270 clockwise
    [2, 1, 0, 5, 4, 3, 8, 7, 6], // mirror across the vertical axis
    [6, 7, 8, 3, 4, 5, 0, 1, 2], // mirror across the horizontal axis
    [0, 3, 6, 1, 4, 7, 2, 5, 8], // transpose (main diagonal)
    [8, 5, 2, 7, 4, 1, 6, 3, 0], // anti-transpose (anti-diagonal)
];

/// A symmetry of the square (dihedral group D4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    Rotate90,
    Rotate180,
    Rotate270,
    FlipHorizontal,
    FlipVertical,
    Transpose,
    AntiTranspose,
}

impl Symmetry {
    /// All eight symmetries, identity first
    pub const fn all() -> [Symmetry; 8] {
        [
            Symmetry::Identity,
            Symmetry::Rotate90,
            Symmetry::Rotate180,
            Symmetry::Rotate270,
            Symmetry::FlipHorizontal,
            Symmetry::FlipVertical,
            Symmetry::Transpose,
            Symmetry::AntiTranspose,
        ]
    }

    /// The gather permutation for this symmetry
    pub const fn permutation(self) -> &'static [usize; 9] {
        &PERMUTATIONS[self as usize]
    }
}

impl Board {
    /// Apply a symmetry, returning the transformed board
    #[must_use = "transform returns a new board state; the original is unchanged"]
    pub fn transform(&self, symmetry: Symmetry) -> Board {
        let perm = symmetry.permutation();
        let mut cells = [Cell::Empty; 9];
        for (i, &src) in perm.iter().enumerate() {
            cells[i] = self.cells[src];
        }
        Board { cells }
    }

    /// Canonical key: the lexicographically smallest encoding over all eight
    /// symmetries.
    ///
    /// Every board in a symmetry class maps to the same key, and the fixed
    /// scan order makes the result reproducible bit for bit across runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::tictactoe::Board;
    ///
    /// // All four corner openings share one canonical key.
    /// let corner = Board::new().play(0).unwrap();
    /// assert_eq!(corner.canonical_key().as_str(), "000000001");
    /// ```
    pub fn canonical_key(&self) -> CanonicalKey {
        let mut best = self.encode();
        for symmetry in Symmetry::all() {
            let encoding = self.transform(symmetry).encode();
            if encoding < best {
                best = encoding;
            }
        }
        CanonicalKey::from_encoding(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::codec::decode;

    #[test]
    fn test_permutations_are_bijections() {
        for perm in &PERMUTATIONS {
            let mut seen = [false; 9];
            for &idx in perm {
                assert!(idx < 9);
                assert!(!seen[idx], "index {idx} appears twice");
                seen[idx] = true;
            }
        }
    }

    #[test]
    fn test_identity_transform() {
        let board = decode("102010020").unwrap();
        assert_eq!(board.transform(Symmetry::Identity), board);
    }

    #[test]
    fn test_rotate90_moves_corner() {
        // X in the top-left corner lands in the top-right after a clockwise
        // quarter turn.
        let board = Board::new().play(0).unwrap();
        let rotated = board.transform(Symmetry::Rotate90);
        assert_eq!(rotated.encode(), "001000000");
    }

    #[test]
    fn test_flip_horizontal_reverses_rows() {
        let board = decode("120000000").unwrap();
        let flipped = board.transform(Symmetry::FlipHorizontal);
        assert_eq!(flipped.encode(), "021000000");
    }

    #[test]
    fn test_transpose_swaps_rows_and_columns() {
        let board = decode("120000000").unwrap();
        let transposed = board.transform(Symmetry::Transpose);
        assert_eq!(transposed.encode(), "100200000");
    }

    #[test]
    fn test_rotations_compose() {
        let board = decode("112000020").unwrap();
        let twice = board.transform(Symmetry::Rotate90).transform(Symmetry::Rotate90);
        assert_eq!(twice, board.transform(Symmetry::Rotate180));

        let four_times = board
            .transform(Symmetry::Rotate90)
            .transform(Symmetry::Rotate90)
            .transform(Symmetry::Rotate90)
            .transform(Symmetry::Rotate90);
        assert_eq!(four_times, board);
    }

    #[test]
    fn test_group_closure() {
        // Composing any two symmetries gives a board reachable by a single
        // symmetry, so the eight tables form a closed group.
        let board = decode("112000020").unwrap();
        for a in Symmetry::all() {
            for b in Symmetry::all() {
                let composed = board.transform(a).transform(b);
                assert!(
                    Symmetry::all()
                        .iter()
                        .any(|&c| board.transform(c) == composed),
                    "composition {a:?} then {b:?} is not a single symmetry"
                );
            }
        }
    }

    #[test]
    fn test_corner_openings_share_canonical_key() {
        for corner in [0, 2, 6, 8] {
            let board = Board::new().play(corner).unwrap();
            assert_eq!(board.canonical_key().as_str(), "000000001");
        }
    }

    #[test]
    fn test_canonical_key_is_fixed_point() {
        for key in ["000000000", "000000001", "000010000", "000000012"] {
            let board = decode(key).unwrap();
            assert_eq!(board.canonical_key().as_str(), key, "{key} is canonical");
        }
    }

    #[test]
    fn test_canonical_key_invariant_under_transforms() {
        let board = decode("112000020").unwrap();
        let key = board.canonical_key();
        for symmetry in Symmetry::all() {
            assert_eq!(board.transform(symmetry).canonical_key(), key);
        }
    }

    #[test]
    fn test_canonical_key_prefers_smallest_encoding() {
        // X at center then O at a corner: minimizing the encoding pushes
        // occupied cells toward the high indices.
        let board = decode("000010002").unwrap();
        let key = board.canonical_key();
        assert_eq!(key.as_str(), "000010002");

        let rotated = board.transform(Symmetry::Rotate180);
        assert_eq!(rotated.encode(), "200010000");
        assert_eq!(rotated.canonical_key().as_str(), "000010002");
    }
}
