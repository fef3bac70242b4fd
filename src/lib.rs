//! oxo - an exhaustive Tic-Tac-Toe solver
//!
//! This crate provides:
//! - Board representation with a fixed-width wire codec
//! - D4 symmetry reduction to canonical board keys
//! - Memoized exhaustive minimax over the reduced game tree
//! - A verified optimal-play lookup table with JSON and MessagePack
//!   persistence and a CSV reporting export

pub mod adapters;
pub mod cli;
pub mod error;
pub mod export;
pub mod ports;
pub mod solver;
pub mod table;
pub mod tictactoe;
pub mod types;

pub use error::{Error, Result};
pub use solver::{Outcome, Solver, build_table};
pub use table::{GameState, GameTable, MoveEval, TableStats};
pub use tictactoe::{Board, Cell, Player, Symmetry};
pub use types::{CanonicalKey, Position};
