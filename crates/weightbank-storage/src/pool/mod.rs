//! Connection setup for the durable store.

pub mod pragmas;
pub mod write_connection;

use std::path::Path;

use rusqlite::Connection;

use weightbank_core::config::StorageConfig;
use weightbank_core::errors::WeightsResult;

pub use write_connection::WriteConnection;

use crate::to_storage_err;

/// Open a file-backed connection and apply pragmas.
pub fn open_connection(path: &Path, config: &StorageConfig) -> WeightsResult<Connection> {
    let conn = Connection::open(path)
        .map_err(|e| to_storage_err(format!("open {}: {e}", path.display())))?;
    pragmas::apply_pragmas(&conn, config)?;
    Ok(conn)
}

/// Open an in-memory connection (for testing).
pub fn open_in_memory_connection(config: &StorageConfig) -> WeightsResult<Connection> {
    let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
    pragmas::apply_pragmas(&conn, config)?;
    Ok(conn)
}
