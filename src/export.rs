//! CSV export of table summaries
//!
//! Flattens each record to one row for spreadsheet or notebook analysis.
//! The CSV is a reporting surface only; the JSON table remains the format
//! consumers load.

use std::path::Path;

use serde::Serialize;

use crate::table::GameTable;

/// One row per recorded state
#[derive(Debug, Serialize)]
struct StateRow<'a> {
    key: &'a str,
    turn: u8,
    ply: usize,
    best_outcome: i8,
    legal_moves: usize,
    optimal_moves: usize,
    winning_move_pos: usize,
}

/// Write one summary row per table record to `path`.
///
/// Rows follow the table's key order, so repeated exports of the same table
/// are byte-identical.
///
/// # Errors
///
/// Returns error if the file cannot be created or a row fails to write.
pub fn write_csv(table: &GameTable, path: &Path) -> Result<(), crate::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    for (key, state) in table.iter() {
        writer.serialize(StateRow {
            key: key.as_str(),
            turn: state.turn.to_turn_digit(),
            ply: key.ply(),
            best_outcome: state.best_outcome.value(),
            legal_moves: state.next_moves.len(),
            optimal_moves: state.next_moves.iter().filter(|m| m.is_optimal).count(),
            winning_move_pos: state.winning_move_pos.value(),
        })?;
    }

    writer.flush().map_err(|source| crate::Error::Io {
        operation: format!("flush CSV export {path:?}"),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::solver::Solver;
    use crate::tictactoe::Board;

    #[test]
    fn test_csv_header_and_rows() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("summary.csv");

        let mut solver = Solver::new();
        let root = Board::new();
        let mut table = GameTable::new();
        table.insert(root.canonical_key(), solver.analyze(&root).unwrap());

        write_csv(&table, &path).expect("Failed to export");

        let contents = fs::read_to_string(&path).expect("Failed to read export");
        let mut lines = contents.lines();
        assert_eq!(
            lines.next(),
            Some("key,turn,ply,best_outcome,legal_moves,optimal_moves,winning_move_pos")
        );
        assert_eq!(lines.next(), Some("000000000,1,0,0,9,9,0"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_csv_write_to_invalid_path() {
        let table = GameTable::new();
        let result = write_csv(&table, Path::new("/invalid_dir_12345/out.csv"));
        assert!(result.is_err());
    }
}
