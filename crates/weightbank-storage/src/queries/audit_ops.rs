//! Append and read audit rows.

use rusqlite::{params, Connection};

use weightbank_core::errors::WeightsResult;
use weightbank_core::models::{AuditEntry, AuditOperation};

use super::parse_timestamp;
use crate::to_storage_err;

pub fn insert_audit_entry(conn: &Connection, entry: &AuditEntry) -> WeightsResult<()> {
    conn.execute(
        "INSERT INTO weight_audit (feature, operation, old_weight, new_weight, revision, timestamp)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            entry.feature,
            entry.operation.as_str(),
            entry.old_weight,
            entry.new_weight,
            entry.revision as i64,
            entry.timestamp.to_rfc3339(),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Audit rows for one feature, oldest first.
pub fn entries_for_feature(conn: &Connection, feature: &str) -> WeightsResult<Vec<AuditEntry>> {
    let mut stmt = conn
        .prepare(
            "SELECT feature, operation, old_weight, new_weight, revision, timestamp
             FROM weight_audit WHERE feature = ?1 ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![feature], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<f64>>(2)?,
                row.get::<_, f64>(3)?,
                row.get::<_, i64>(4)?,
                row.get::<_, String>(5)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut entries = Vec::new();
    for row in rows {
        let (feature, op, old_weight, new_weight, revision, ts) =
            row.map_err(|e| to_storage_err(e.to_string()))?;
        let operation = AuditOperation::parse(&op)
            .ok_or_else(|| to_storage_err(format!("unknown audit operation {op:?}")))?;
        entries.push(AuditEntry {
            feature,
            operation,
            old_weight,
            new_weight,
            revision: revision.max(0) as u64,
            timestamp: parse_timestamp(&ts)?,
        });
    }
    Ok(entries)
}
