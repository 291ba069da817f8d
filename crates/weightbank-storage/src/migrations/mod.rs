//! Schema migrations using PRAGMA user_version.

pub mod v001_weight_records;
pub mod v002_weight_audit;

use rusqlite::Connection;

use weightbank_core::errors::{WeightsError, WeightsResult};

/// Latest schema version known to this build.
pub const LATEST_VERSION: u32 = 2;

fn failed(version: u32, e: impl ToString) -> WeightsError {
    WeightsError::MigrationFailed {
        version,
        reason: e.to_string(),
    }
}

/// Run all pending migrations.
pub fn run_migrations(conn: &Connection) -> WeightsResult<()> {
    let current = current_version(conn)?;

    let migrations: &[(&str, u32)] = &[
        (v001_weight_records::MIGRATION_SQL, 1),
        (v002_weight_audit::MIGRATION_SQL, 2),
    ];

    for (sql, version) in migrations {
        if current < *version {
            conn.execute_batch(sql).map_err(|e| failed(*version, e))?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| failed(*version, e))?;
            tracing::info!(version = version, "applied migration");
        }
    }

    Ok(())
}

/// Get the current schema version.
pub fn current_version(conn: &Connection) -> WeightsResult<u32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| failed(0, e))
}
