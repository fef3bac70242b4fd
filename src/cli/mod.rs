//! CLI infrastructure for the oxo solver
//!
//! This module provides the command-line interface for generating,
//! inspecting, verifying, and exporting solved-game tables.

pub mod commands;
pub mod config;
pub mod output;
