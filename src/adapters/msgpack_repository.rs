//! MessagePack implementation of the table repository.
//!
//! This adapter implements the TableRepository port using rmp_serde for
//! compact binary serialization.

use std::{fs::File, path::Path};

use crate::{Result, error::Error, ports::TableRepository, table::GameTable};

/// MessagePack-based table repository.
///
/// Provides persistent storage using the MessagePack binary format via
/// rmp_serde. Considerably smaller on disk than JSON, at the cost of not
/// being readable with text tooling.
///
/// # Examples
///
/// ```no_run
/// use oxo::adapters::MsgPackRepository;
/// use oxo::ports::TableRepository;
/// use oxo::solver::build_table;
/// use std::path::Path;
///
/// let repo = MsgPackRepository;
/// let table = build_table()?;
///
/// repo.save(&table, Path::new("game_tree.msgpack"))?;
/// let loaded = repo.load(Path::new("game_tree.msgpack"))?;
/// # Ok::<(), oxo::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackRepository;

impl MsgPackRepository {
    /// Create a new MessagePack repository.
    pub fn new() -> Self {
        Self
    }
}

impl TableRepository for MsgPackRepository {
    fn save(&self, table: &GameTable, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;

        rmp_serde::encode::write(&mut file, table).map_err(|e| Error::SerializationContext {
            operation: "serialize table to MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<GameTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let table = rmp_serde::decode::from_read(&file).map_err(|e| Error::SerializationContext {
            operation: "deserialize table from MessagePack".to_string(),
            message: e.to_string(),
        })?;

        Ok(table)
    }
}
