//! # weightbank-storage
//!
//! Durable record backend on SQLite. One row per feature in
//! `weight_records`, one audit row per upsert in `weight_audit`.

pub mod audit;
pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;
pub mod validation;

pub use engine::SqliteRecordStore;
pub use validation::RecordRules;

use weightbank_core::errors::WeightsError;

/// Map any SQLite failure into the durable-backend error.
pub(crate) fn to_storage_err(msg: impl Into<String>) -> WeightsError {
    WeightsError::durable_unavailable(msg)
}
