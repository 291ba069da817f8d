//! IDurableRecordBackend: authoritative weight records keyed by feature.

use std::sync::Arc;

use crate::errors::WeightsResult;
use crate::models::WeightRecord;

/// Durable store of weight records.
#[allow(async_fn_in_trait)]
pub trait IDurableRecordBackend: Send + Sync {
    /// Create the record for `feature` or replace its weight.
    /// Validation runs before any write; a rejected value leaves the
    /// store untouched and returns `WeightsError::ValidationError`.
    async fn upsert(&self, feature: &str, weight: f64) -> WeightsResult<WeightRecord>;

    async fn fetch(&self, feature: &str) -> WeightsResult<Option<WeightRecord>>;

    /// All records, ordered by feature.
    async fn list(&self) -> WeightsResult<Vec<WeightRecord>>;
}

impl<T: IDurableRecordBackend> IDurableRecordBackend for Arc<T> {
    async fn upsert(&self, feature: &str, weight: f64) -> WeightsResult<WeightRecord> { (**self).upsert(feature, weight).await }
    async fn fetch(&self, feature: &str) -> WeightsResult<Option<WeightRecord>> { (**self).fetch(feature).await }
    async fn list(&self) -> WeightsResult<Vec<WeightRecord>> { (**self).list().await }
}
