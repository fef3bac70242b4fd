//! Tic-Tac-Toe domain model: board representation, wire codec, winning-line
//! analysis, and the symmetry group used for canonical state reduction.

pub mod board;
pub mod codec;
pub mod lines;
pub mod symmetry;

pub use board::{Board, Cell, PieceCount, Player};
pub use lines::WINNING_LINES;
pub use symmetry::Symmetry;
