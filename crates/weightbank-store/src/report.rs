use serde::Serialize;

use weightbank_core::models::WeightKey;

/// Counts from a fully applied `save_all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SaveReport {
    pub fast_written: usize,
    pub durable_written: usize,
}

/// Outcome of copying durable weights back into the fast hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepairReport {
    /// Keys whose fast value was missing or malformed and was restored.
    pub restored: Vec<WeightKey>,
    /// Keys that already held a parseable fast value.
    pub healthy: usize,
    /// Keys with no fast value and no durable record.
    pub unrecoverable: Vec<WeightKey>,
}

impl RepairReport {
    pub fn is_clean(&self) -> bool {
        self.restored.is_empty() && self.unrecoverable.is_empty()
    }
}
