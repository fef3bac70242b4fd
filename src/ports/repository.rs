//! Repository port for table persistence.
//!
//! This module defines the trait boundary between the domain and
//! infrastructure layers for storing and retrieving generated tables.

use std::path::Path;

use crate::{Result, table::GameTable};

/// Port for persisting and loading solved-game tables.
///
/// This trait abstracts the storage mechanism, allowing different
/// implementations (JSON, MessagePack, in-memory) without coupling the
/// domain logic to specific serialization formats.
///
/// # Examples
///
/// ```no_run
/// use oxo::ports::TableRepository;
/// use oxo::adapters::JsonRepository;
/// use oxo::solver::build_table;
/// use std::path::Path;
///
/// let repo = JsonRepository::new();
/// let table = build_table()?;
/// repo.save(&table, Path::new("game_tree.json"))?;
///
/// let loaded = repo.load(Path::new("game_tree.json"))?;
/// assert_eq!(loaded, table);
/// # Ok::<(), oxo::Error>(())
/// ```
pub trait TableRepository {
    /// Save a table to persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path cannot be created or written to
    /// - Serialization fails
    /// - I/O errors occur during writing
    fn save(&self, table: &GameTable, path: &Path) -> Result<()>;

    /// Load a table from persistent storage.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file format is invalid or corrupted
    /// - Deserialization fails
    fn load(&self, path: &Path) -> Result<GameTable>;
}
