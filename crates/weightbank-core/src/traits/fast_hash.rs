//! IFastHashBackend: one shared hash of string-encoded weights.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::errors::WeightsResult;
use crate::models::{WeightKey, WeightLookup};

/// Fast path for weight reads and writes.
///
/// Every call is one round trip; nothing is retried. Transport failures
/// surface as `WeightsError::BackendUnavailable`.
#[allow(async_fn_in_trait)]
pub trait IFastHashBackend: Send + Sync {
    /// Look up one field. Never-written fields are `WeightLookup::Missing`.
    async fn get(&self, key: &WeightKey) -> WeightsResult<WeightLookup>;

    /// Overwrite one field.
    async fn set(&self, key: &WeightKey, value: f64) -> WeightsResult<()>;

    /// Look up many fields. Every requested key is present in the result.
    async fn get_many(&self, keys: &[WeightKey]) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>>;

    /// Every field in the namespace.
    async fn get_all(&self) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>>;
}

/// Blanket impl: `Arc<T>` delegates to the inner `T`, so one backend can be
/// shared by several stores.
impl<T: IFastHashBackend> IFastHashBackend for Arc<T> {
    async fn get(&self, key: &WeightKey) -> WeightsResult<WeightLookup> { (**self).get(key).await }
    async fn set(&self, key: &WeightKey, value: f64) -> WeightsResult<()> { (**self).set(key, value).await }
    async fn get_many(&self, keys: &[WeightKey]) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> { (**self).get_many(keys).await }
    async fn get_all(&self) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> { (**self).get_all().await }
}
