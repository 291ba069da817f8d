//! Fast hash on a redis server: one hash, fields are weight keys.

use std::collections::{BTreeMap, HashMap};

use redis::aio::MultiplexedConnection;
use redis::{AsyncCommands, RedisError};

use weightbank_core::config::HashConfig;
use weightbank_core::errors::{WeightsError, WeightsResult};
use weightbank_core::models::{WeightKey, WeightLookup};
use weightbank_core::traits::IFastHashBackend;

use crate::wire;

fn unavailable(op: &str, e: RedisError) -> WeightsError {
    WeightsError::fast_hash_unavailable(format!("{op}: {e}"))
}

/// Redis-backed fast hash. The multiplexed connection is cheap to clone and
/// pipelines concurrent requests over one socket.
#[derive(Clone)]
pub struct RedisHashBackend {
    conn: MultiplexedConnection,
    namespace: String,
}

impl RedisHashBackend {
    /// Connect to `url` and address the hash named `namespace`.
    pub async fn connect(url: &str, namespace: impl Into<String>) -> WeightsResult<Self> {
        let client = redis::Client::open(url).map_err(|e| unavailable("open", e))?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| unavailable("connect", e))?;
        let namespace = namespace.into();
        tracing::info!(namespace = %namespace, "connected to redis fast hash");
        Ok(Self { conn, namespace })
    }

    pub async fn from_config(config: &HashConfig) -> WeightsResult<Self> {
        Self::connect(&config.url, config.namespace.clone()).await
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl IFastHashBackend for RedisHashBackend {
    async fn get(&self, key: &WeightKey) -> WeightsResult<WeightLookup> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn
            .hget(&self.namespace, key.as_str())
            .await
            .map_err(|e| unavailable("HGET", e))?;
        tracing::trace!(namespace = %self.namespace, key = %key, ?raw, "hash get");
        Ok(wire::decode(raw.as_deref()))
    }

    async fn set(&self, key: &WeightKey, value: f64) -> WeightsResult<()> {
        let mut conn = self.conn.clone();
        let _: () = conn
            .hset(&self.namespace, key.as_str(), wire::encode(value))
            .await
            .map_err(|e| unavailable("HSET", e))?;
        tracing::trace!(namespace = %self.namespace, key = %key, value, "hash set");
        Ok(())
    }

    async fn get_many(&self, keys: &[WeightKey]) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> {
        if keys.is_empty() {
            return Ok(BTreeMap::new());
        }
        let mut conn = self.conn.clone();
        let fields: Vec<&str> = keys.iter().map(WeightKey::as_str).collect();
        // HMGET always replies with an array, one slot per field, nil when absent.
        let raw: Vec<Option<String>> = redis::cmd("HMGET")
            .arg(&self.namespace)
            .arg(&fields)
            .query_async(&mut conn)
            .await
            .map_err(|e| unavailable("HMGET", e))?;
        if raw.len() != keys.len() {
            return Err(WeightsError::fast_hash_unavailable(format!(
                "HMGET returned {} values for {} fields",
                raw.len(),
                keys.len()
            )));
        }
        Ok(keys
            .iter()
            .cloned()
            .zip(raw.iter().map(|r| wire::decode(r.as_deref())))
            .collect())
    }

    async fn get_all(&self) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> {
        let mut conn = self.conn.clone();
        let raw: HashMap<String, String> = conn
            .hgetall(&self.namespace)
            .await
            .map_err(|e| unavailable("HGETALL", e))?;
        Ok(raw
            .into_iter()
            .map(|(k, v)| (WeightKey::from_raw(k), wire::decode(Some(v.as_str()))))
            .collect())
    }
}
