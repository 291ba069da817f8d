//! WeightStore: orchestrates the fast hash and the durable record store.
//!
//! Nothing is cached between calls and nothing spans both backends
//! transactionally. A failure part way through a batch leaves the writes
//! that already completed in place, in either backend.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use weightbank_core::codec;
use weightbank_core::config::StoreConfig;
use weightbank_core::constants::CLASS_LABELS;
use weightbank_core::errors::WeightsResult;
use weightbank_core::models::{FeatureId, Polarity, WeightKey, WeightLookup, WeightMap};
use weightbank_core::random::{self, RandomSource};
use weightbank_core::traits::{IDurableRecordBackend, IFastHashBackend};

use crate::report::{RepairReport, SaveReport};

/// Weight store over a fast hash `H` and a durable record store `D`.
pub struct WeightStore<H, D> {
    fast: H,
    durable: D,
    config: StoreConfig,
    random: Mutex<Box<dyn RandomSource>>,
}

impl<H, D> WeightStore<H, D>
where
    H: IFastHashBackend,
    D: IDurableRecordBackend,
{
    /// Build a store. The random source is seeded from `config.random_seed`
    /// when set, from entropy otherwise.
    pub fn new(fast: H, durable: D, config: StoreConfig) -> Self {
        let source: Box<dyn RandomSource> = match config.random_seed {
            Some(seed) => Box::new(random::seeded_source(seed)),
            None => Box::new(random::default_source()),
        };
        Self {
            fast,
            durable,
            config,
            random: Mutex::new(source),
        }
    }

    /// Replace the source used by `initialize`.
    pub fn with_random_source(self, source: impl RandomSource + 'static) -> Self {
        Self {
            random: Mutex::new(Box::new(source)),
            ..self
        }
    }

    pub fn fast(&self) -> &H {
        &self.fast
    }

    pub fn durable(&self) -> &D {
        &self.durable
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn draw_weight(&self) -> f64 {
        let mut source = self.random.lock().unwrap_or_else(PoisonError::into_inner);
        random::random_weight(&mut **source)
    }

    /// Seed both polarity slots of `feature` with fresh random weights.
    pub async fn initialize(&self, feature: &FeatureId) -> WeightsResult<()> {
        let seeded = Polarity::ALL.map(|p| (codec::polarity_key(feature, p), self.draw_weight()));
        self.seed(feature, &seeded).await
    }

    /// Seed both polarity slots of `feature` under every class label.
    pub async fn initialize_labelled(&self, feature: &FeatureId) -> WeightsResult<()> {
        let mut seeded = Vec::with_capacity(CLASS_LABELS.len() * Polarity::ALL.len());
        for label in CLASS_LABELS {
            for polarity in Polarity::ALL {
                let key = codec::labelled_key(feature, polarity, label);
                seeded.push((key, self.draw_weight()));
            }
        }
        self.seed(feature, &seeded).await
    }

    async fn seed(&self, feature: &FeatureId, seeded: &[(WeightKey, f64)]) -> WeightsResult<()> {
        for (key, weight) in seeded {
            self.fast.set(key, *weight).await?;
        }
        if self.config.seed_durable_on_initialize {
            for (key, weight) in seeded {
                self.durable.upsert(key.as_str(), *weight).await?;
            }
        }
        tracing::debug!(
            feature = %feature,
            slots = seeded.len(),
            durable = self.config.seed_durable_on_initialize,
            "initialized weights"
        );
        Ok(())
    }

    /// Read `keys` from the fast hash. Every key is present in the result.
    pub async fn read_all(&self, keys: &[WeightKey]) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> {
        let lookups = self.fast.get_many(keys).await?;
        let absent = lookups.values().filter(|l| !l.is_usable()).count();
        if absent > 0 {
            tracing::debug!(requested = keys.len(), absent, "read weights with gaps");
        }
        Ok(lookups)
    }

    /// Read `keys` in the legacy float shape: missing or malformed values
    /// come back as NaN and must be checked by the caller.
    pub async fn read_all_lenient(&self, keys: &[WeightKey]) -> WeightsResult<WeightMap> {
        Ok(self
            .read_all(keys)
            .await?
            .into_iter()
            .map(|(k, l)| (k, l.to_lenient()))
            .collect())
    }

    /// Write every entry to the fast hash, then upsert every entry into the
    /// durable store under the same key.
    ///
    /// Not atomic: the first error is returned as-is and every write issued
    /// before it stays applied.
    pub async fn save_all(&self, weights: &WeightMap) -> WeightsResult<SaveReport> {
        tracing::info!(entries = weights.len(), "saving weights");
        let mut report = SaveReport::default();

        for (key, weight) in weights {
            if let Err(e) = self.fast.set(key, *weight).await {
                tracing::warn!(key = %key, applied = report.fast_written, error = %e, "fast write failed");
                return Err(e);
            }
            report.fast_written += 1;
        }

        for (key, weight) in weights {
            if let Err(e) = self.durable.upsert(key.as_str(), *weight).await {
                tracing::warn!(
                    key = %key,
                    fast_written = report.fast_written,
                    durable_written = report.durable_written,
                    error = %e,
                    "durable write failed, save partially applied"
                );
                return Err(e);
            }
            report.durable_written += 1;
        }

        tracing::info!(
            fast_written = report.fast_written,
            durable_written = report.durable_written,
            "saved weights"
        );
        Ok(report)
    }

    /// Restore fast values that are missing, malformed or NaN from their
    /// durable records. Keys already holding a usable value are left alone.
    pub async fn repair(&self, keys: &[WeightKey]) -> WeightsResult<RepairReport> {
        let lookups = self.fast.get_many(keys).await?;
        let mut report = RepairReport::default();

        for (key, lookup) in lookups {
            if lookup.is_usable() {
                report.healthy += 1;
                continue;
            }
            match self.durable.fetch(key.as_str()).await? {
                Some(record) => {
                    self.fast.set(&key, record.weight).await?;
                    tracing::debug!(key = %key, weight = record.weight, "restored fast weight");
                    report.restored.push(key);
                }
                None => report.unrecoverable.push(key),
            }
        }

        if !report.is_clean() {
            tracing::info!(
                restored = report.restored.len(),
                unrecoverable = report.unrecoverable.len(),
                "repaired fast weights"
            );
        }
        Ok(report)
    }

    /// Every weight currently held in the fast hash.
    pub async fn dump(&self) -> WeightsResult<BTreeMap<WeightKey, WeightLookup>> {
        self.fast.get_all().await
    }
}
