//! SqliteRecordStore: owns the write connection, implements
//! IDurableRecordBackend, runs migrations at open.

use std::path::Path;

use chrono::Utc;
use rusqlite::Connection;

use weightbank_core::config::StorageConfig;
use weightbank_core::errors::WeightsResult;
use weightbank_core::models::{AuditEntry, WeightRecord};
use weightbank_core::traits::IDurableRecordBackend;

use crate::audit::AuditLogger;
use crate::migrations;
use crate::pool::{self, WriteConnection};
use crate::queries::{audit_ops, record_ops};
use crate::to_storage_err;
use crate::validation::RecordRules;

/// Durable weight records in SQLite.
pub struct SqliteRecordStore {
    writer: WriteConnection,
    rules: RecordRules,
}

impl SqliteRecordStore {
    /// Open a store backed by a file on disk, with default settings.
    pub fn open(path: &Path) -> WeightsResult<Self> {
        let config = StorageConfig::default();
        Self::initialize(pool::open_connection(path, &config)?, RecordRules::default())
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> WeightsResult<Self> {
        Self::open_in_memory_with_rules(RecordRules::default())
    }

    pub fn open_in_memory_with_rules(rules: RecordRules) -> WeightsResult<Self> {
        let config = StorageConfig::default();
        Self::initialize(pool::open_in_memory_connection(&config)?, rules)
    }

    /// Open the file named by `config.db_path` with the configured rules.
    pub fn from_config(config: &StorageConfig) -> WeightsResult<Self> {
        let conn = pool::open_connection(Path::new(&config.db_path), config)?;
        Self::initialize(conn, RecordRules::from_config(config))
    }

    /// Run migrations before the connection is shared.
    fn initialize(conn: Connection, rules: RecordRules) -> WeightsResult<Self> {
        migrations::run_migrations(&conn)?;
        Ok(Self {
            writer: WriteConnection::new(conn),
            rules,
        })
    }

    pub fn rules(&self) -> &RecordRules {
        &self.rules
    }

    /// Audit rows for `feature`, oldest first.
    pub async fn audit_trail(&self, feature: &str) -> WeightsResult<Vec<AuditEntry>> {
        self.writer
            .with_conn(|conn| audit_ops::entries_for_feature(conn, feature))
            .await
    }

    pub async fn count(&self) -> WeightsResult<usize> {
        self.writer.with_conn(record_ops::count_records).await
    }
}

impl IDurableRecordBackend for SqliteRecordStore {
    async fn upsert(&self, feature: &str, weight: f64) -> WeightsResult<WeightRecord> {
        if let Err(e) = self.rules.check(feature, weight) {
            tracing::warn!(feature, weight, error = %e, "rejected durable weight");
            return Err(e);
        }

        let record = self
            .writer
            .with_conn(|conn| {
                // Record row and audit row are all-or-nothing.
                let tx = conn
                    .unchecked_transaction()
                    .map_err(|e| to_storage_err(format!("upsert begin: {e}")))?;
                let previous = record_ops::get_record(&tx, feature)?.map(|r| r.weight);
                let record = record_ops::upsert_record(&tx, feature, weight, Utc::now())?;
                AuditLogger::log_upsert(&tx, &record, previous)?;
                tx.commit()
                    .map_err(|e| to_storage_err(format!("upsert commit: {e}")))?;
                Ok(record)
            })
            .await?;

        tracing::debug!(feature, weight, revision = record.revision, "upserted durable weight");
        Ok(record)
    }

    async fn fetch(&self, feature: &str) -> WeightsResult<Option<WeightRecord>> {
        self.writer
            .with_conn(|conn| record_ops::get_record(conn, feature))
            .await
    }

    async fn list(&self) -> WeightsResult<Vec<WeightRecord>> {
        self.writer.with_conn(record_ops::list_records).await
    }
}
