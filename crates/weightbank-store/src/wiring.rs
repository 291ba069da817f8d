//! Build a store from configuration: redis fast hash + SQLite records.

use weightbank_core::config::WeightsConfig;
use weightbank_core::errors::WeightsResult;
use weightbank_hash::RedisHashBackend;
use weightbank_storage::SqliteRecordStore;

use crate::engine::WeightStore;

/// The production pairing of backends.
pub type ConfiguredStore = WeightStore<RedisHashBackend, SqliteRecordStore>;

/// Connect both backends named by `config`.
pub async fn open_store(config: &WeightsConfig) -> WeightsResult<ConfiguredStore> {
    config.validate()?;
    let durable = SqliteRecordStore::from_config(&config.storage)?;
    let fast = RedisHashBackend::from_config(&config.hash).await?;
    tracing::info!(
        db_path = %config.storage.db_path,
        namespace = %config.hash.namespace,
        "weight store ready"
    );
    Ok(WeightStore::new(fast, durable, config.store.clone()))
}
