//! Upsert, get, and list for weight records.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use weightbank_core::errors::WeightsResult;
use weightbank_core::models::WeightRecord;

use super::parse_timestamp;
use crate::to_storage_err;

const SELECT_COLUMNS: &str = "SELECT feature, weight, revision, created_at, updated_at FROM weight_records";

struct RawRecord {
    feature: String,
    weight: f64,
    revision: i64,
    created_at: String,
    updated_at: String,
}

fn read_raw(row: &Row<'_>) -> rusqlite::Result<RawRecord> {
    Ok(RawRecord {
        feature: row.get(0)?,
        weight: row.get(1)?,
        revision: row.get(2)?,
        created_at: row.get(3)?,
        updated_at: row.get(4)?,
    })
}

fn into_record(raw: RawRecord) -> WeightsResult<WeightRecord> {
    Ok(WeightRecord {
        feature: raw.feature,
        weight: raw.weight,
        revision: raw.revision.max(0) as u64,
        created_at: parse_timestamp(&raw.created_at)?,
        updated_at: parse_timestamp(&raw.updated_at)?,
    })
}

/// Get one record by feature.
pub fn get_record(conn: &Connection, feature: &str) -> WeightsResult<Option<WeightRecord>> {
    let raw = conn
        .query_row(
            &format!("{SELECT_COLUMNS} WHERE feature = ?1"),
            params![feature],
            read_raw,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    raw.map(into_record).transpose()
}

/// Every record, ordered by feature.
pub fn list_records(conn: &Connection) -> WeightsResult<Vec<WeightRecord>> {
    let mut stmt = conn
        .prepare(&format!("{SELECT_COLUMNS} ORDER BY feature"))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], read_raw)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut records = Vec::new();
    for row in rows {
        let raw = row.map_err(|e| to_storage_err(e.to_string()))?;
        records.push(into_record(raw)?);
    }
    Ok(records)
}

/// Create or replace the record for `feature`, matching on the primary key.
/// Callers wrap this in a transaction together with the audit insert.
pub fn upsert_record(
    conn: &Connection,
    feature: &str,
    weight: f64,
    now: DateTime<Utc>,
) -> WeightsResult<WeightRecord> {
    let now = now.to_rfc3339();
    conn.execute(
        "INSERT INTO weight_records (feature, weight, revision, created_at, updated_at)
         VALUES (?1, ?2, 1, ?3, ?3)
         ON CONFLICT(feature) DO UPDATE SET
            weight = excluded.weight,
            revision = weight_records.revision + 1,
            updated_at = excluded.updated_at",
        params![feature, weight, now],
    )
    .map_err(|e| to_storage_err(format!("upsert {feature}: {e}")))?;

    get_record(conn, feature)?
        .ok_or_else(|| to_storage_err(format!("upsert {feature}: row vanished after write")))
}

/// Number of stored records.
pub fn count_records(conn: &Connection) -> WeightsResult<usize> {
    let n: i64 = conn
        .query_row("SELECT COUNT(*) FROM weight_records", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(n.max(0) as usize)
}
