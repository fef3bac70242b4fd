//! Shared configuration types for CLI commands

use clap::ValueEnum;

use crate::adapters::{JsonRepository, MsgPackRepository};
use crate::ports::TableRepository;

/// On-disk format for generated tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableFormat {
    /// JSON map keyed by canonical board key (the format consumers load)
    Json,
    /// MessagePack binary
    Msgpack,
}

/// Build the repository matching `format`.
///
/// `pretty` only affects JSON output.
pub fn open_repository(format: TableFormat, pretty: bool) -> Box<dyn TableRepository> {
    match format {
        TableFormat::Json => Box::new(JsonRepository::new().with_pretty(pretty)),
        TableFormat::Msgpack => Box::new(MsgPackRepository::new()),
    }
}
