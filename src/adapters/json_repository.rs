//! JSON implementation of the table repository.
//!
//! This is the default format for generated tables; downstream consumers
//! read them with ordinary JSON tooling.

use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use crate::{Result, error::Error, ports::TableRepository, table::GameTable};

/// JSON-based table repository.
///
/// Writes compact JSON by default; [`with_pretty`] switches to indented
/// output for human inspection. Both forms load identically.
///
/// # Examples
///
/// ```no_run
/// use oxo::adapters::JsonRepository;
/// use oxo::ports::TableRepository;
/// use oxo::solver::build_table;
/// use std::path::Path;
///
/// let repo = JsonRepository::new().with_pretty(true);
/// let table = build_table()?;
/// repo.save(&table, Path::new("game_tree.json"))?;
/// # Ok::<(), oxo::Error>(())
/// ```
///
/// [`with_pretty`]: JsonRepository::with_pretty
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRepository {
    pretty: bool,
}

impl JsonRepository {
    /// Create a repository writing compact JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch between compact and indented output.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl TableRepository for JsonRepository {
    fn save(&self, table: &GameTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create file {path:?}"),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, table)?;
        } else {
            serde_json::to_writer(&mut writer, table)?;
        }

        writer.flush().map_err(|source| Error::Io {
            operation: format!("flush file {path:?}"),
            source,
        })?;

        Ok(())
    }

    fn load(&self, path: &Path) -> Result<GameTable> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open file {path:?}"),
            source,
        })?;

        let table = serde_json::from_reader(BufReader::new(file))?;
        Ok(table)
    }
}
