//! Log every durable weight mutation.

use rusqlite::Connection;

use weightbank_core::errors::WeightsResult;
use weightbank_core::models::{AuditEntry, AuditOperation, WeightRecord};

use crate::queries::audit_ops;

/// Append-only audit logger. Wraps the audit_ops query functions.
pub struct AuditLogger;

impl AuditLogger {
    /// Record the upsert that produced `record`. `previous` is the weight
    /// before the write, `None` when the record was created.
    pub fn log_upsert(
        conn: &Connection,
        record: &WeightRecord,
        previous: Option<f64>,
    ) -> WeightsResult<()> {
        let operation = if previous.is_some() {
            AuditOperation::Replace
        } else {
            AuditOperation::Create
        };
        let entry = AuditEntry {
            feature: record.feature.clone(),
            operation,
            old_weight: previous,
            new_weight: record.weight,
            revision: record.revision,
            timestamp: record.updated_at,
        };
        audit_ops::insert_audit_entry(conn, &entry)
    }
}
