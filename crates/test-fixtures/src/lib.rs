//! Shared test fixtures for the weightbank workspace.
//!
//! Provides deterministic random sources and backends that fail on demand,
//! so store orchestration can be tested without a network.

use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use weightbank_core::errors::{WeightsError, WeightsResult};
use weightbank_core::models::{WeightKey, WeightLookup, WeightRecord};
use weightbank_core::random::RandomSource;
use weightbank_core::traits::{IDurableRecordBackend, IFastHashBackend};
use weightbank_hash::MemoryHashBackend;
use weightbank_storage::SqliteRecordStore;

/// Random source replaying a fixed list of unit draws, then cycling.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        let draws: VecDeque<f64> = draws.into_iter().collect();
        assert!(!draws.is_empty(), "scripted random needs at least one draw");
        Self { draws }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let next = self.draws.pop_front().unwrap_or(0.0);
        self.draws.push_back(next);
        next
    }
}

/// Fast hash whose every call fails as if the server were down.
#[derive(Debug, Default)]
pub struct UnavailableHashBackend;

impl IFastHashBackend for UnavailableHashBackend {
    async fn get(&self, _key: &WeightKey) -> WeightsResult<WeightLookup> {
        Err(WeightsError::fast_hash_unavailable("connection refused"))
    }
    async fn set(&self, _key: &WeightKey, _value: f64) -> WeightsResult<()> {
        Err(WeightsError::fast_hash_unavailable("connection refused"))
    }
    async fn get_many(&self, _keys: &[WeightKey]) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> {
        Err(WeightsError::fast_hash_unavailable("connection refused"))
    }
    async fn get_all(&self) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> {
        Err(WeightsError::fast_hash_unavailable("connection refused"))
    }
}

/// In-memory fast hash that starts failing writes after `allowed_sets`
/// successful ones. Reads always succeed.
#[derive(Debug)]
pub struct FailingAfterHashBackend {
    inner: MemoryHashBackend,
    allowed_sets: usize,
    sets: AtomicUsize,
}

impl FailingAfterHashBackend {
    pub fn new(allowed_sets: usize) -> Self {
        Self {
            inner: MemoryHashBackend::default(),
            allowed_sets,
            sets: AtomicUsize::new(0),
        }
    }

    pub fn inner(&self) -> &MemoryHashBackend {
        &self.inner
    }
}

impl IFastHashBackend for FailingAfterHashBackend {
    async fn get(&self, key: &WeightKey) -> WeightsResult<WeightLookup> {
        self.inner.get(key).await
    }
    async fn set(&self, key: &WeightKey, value: f64) -> WeightsResult<()> {
        if self.sets.fetch_add(1, Ordering::SeqCst) >= self.allowed_sets {
            return Err(WeightsError::fast_hash_unavailable("connection reset"));
        }
        self.inner.set(key, value).await
    }
    async fn get_many(&self, keys: &[WeightKey]) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> {
        self.inner.get_many(keys).await
    }
    async fn get_all(&self) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> {
        self.inner.get_all().await
    }
}

/// Durable backend whose every call fails as if the database were gone.
#[derive(Debug, Default)]
pub struct UnavailableRecordBackend;

impl IDurableRecordBackend for UnavailableRecordBackend {
    async fn upsert(&self, _feature: &str, _weight: f64) -> WeightsResult<WeightRecord> {
        Err(WeightsError::durable_unavailable("database is locked"))
    }
    async fn fetch(&self, _feature: &str) -> WeightsResult<Option<WeightRecord>> {
        Err(WeightsError::durable_unavailable("database is locked"))
    }
    async fn list(&self) -> WeightsResult<Vec<WeightRecord>> {
        Err(WeightsError::durable_unavailable("database is locked"))
    }
}

/// Shared in-memory backends, handy when a test needs to inspect both
/// stores behind a weight store.
pub fn memory_backends() -> (Arc<MemoryHashBackend>, Arc<SqliteRecordStore>) {
    let durable = SqliteRecordStore::open_in_memory().expect("in-memory sqlite should open");
    (Arc::new(MemoryHashBackend::default()), Arc::new(durable))
}
