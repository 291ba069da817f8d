//! In-process fast hash backed by a sharded concurrent map.

use std::collections::BTreeMap;

use dashmap::DashMap;

use weightbank_core::config::defaults::DEFAULT_HASH_NAMESPACE;
use weightbank_core::errors::WeightsResult;
use weightbank_core::models::{WeightKey, WeightLookup};
use weightbank_core::traits::IFastHashBackend;

use crate::wire;

/// One named hash held in memory. Values are kept as encoded strings so
/// reads go through the same decoding as a networked hash.
#[derive(Debug)]
pub struct MemoryHashBackend {
    namespace: String,
    fields: DashMap<String, String>,
}

impl MemoryHashBackend {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            fields: DashMap::new(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Store raw text under `key`, bypassing encoding. Used to load data
    /// written by other producers.
    pub fn set_raw(&self, key: &WeightKey, raw: impl Into<String>) {
        self.fields.insert(key.as_str().to_string(), raw.into());
    }

    /// Drop one field. Returns whether it existed.
    pub fn remove(&self, key: &WeightKey) -> bool {
        self.fields.remove(key.as_str()).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn lookup(&self, key: &WeightKey) -> WeightLookup {
        let entry = self.fields.get(key.as_str());
        wire::decode(entry.as_deref().map(String::as_str))
    }
}

impl Default for MemoryHashBackend {
    fn default() -> Self {
        Self::new(DEFAULT_HASH_NAMESPACE)
    }
}

impl IFastHashBackend for MemoryHashBackend {
    async fn get(&self, key: &WeightKey) -> WeightsResult<WeightLookup> {
        let lookup = self.lookup(key);
        tracing::trace!(namespace = %self.namespace, key = %key, ?lookup, "hash get");
        Ok(lookup)
    }

    async fn set(&self, key: &WeightKey, value: f64) -> WeightsResult<()> {
        tracing::trace!(namespace = %self.namespace, key = %key, value, "hash set");
        self.fields.insert(key.as_str().to_string(), wire::encode(value));
        Ok(())
    }

    async fn get_many(&self, keys: &[WeightKey]) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> {
        Ok(keys.iter().map(|k| (k.clone(), self.lookup(k))).collect())
    }

    async fn get_all(&self) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> {
        Ok(self
            .fields
            .iter()
            .map(|e| (WeightKey::from_raw(e.key().clone()), wire::decode(Some(e.value().as_str()))))
            .collect())
    }
}
