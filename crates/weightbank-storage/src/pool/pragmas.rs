//! PRAGMA configuration applied to every SQLite connection.
//!
//! WAL mode (when enabled), NORMAL sync, configurable busy_timeout,
//! foreign_keys ON.

use rusqlite::Connection;

use weightbank_core::config::StorageConfig;
use weightbank_core::errors::WeightsResult;

use crate::to_storage_err;

/// Apply durability and concurrency pragmas to a connection.
pub fn apply_pragmas(conn: &Connection, config: &StorageConfig) -> WeightsResult<()> {
    if config.wal_mode {
        // In-memory databases answer "memory" here; that is fine.
        let _mode: String = conn
            .pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))
            .map_err(|e| to_storage_err(format!("failed to set journal_mode: {e}")))?;
    }
    conn.execute_batch(&format!(
        "
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = {};
        PRAGMA foreign_keys = ON;
        ",
        config.busy_timeout_ms
    ))
    .map_err(|e| to_storage_err(format!("failed to apply pragmas: {e}")))?;
    Ok(())
}

/// Verify that WAL mode is active on a connection.
pub fn verify_wal_mode(conn: &Connection) -> WeightsResult<bool> {
    let mode: String = conn
        .pragma_query_value(None, "journal_mode", |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(mode.eq_ignore_ascii_case("wal"))
}
