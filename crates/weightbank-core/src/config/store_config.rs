use serde::{Deserialize, Serialize};

use super::defaults;

/// Orchestration settings for the weight store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Also upsert freshly initialized weights into the durable store.
    pub seed_durable_on_initialize: bool,
    /// Fixed seed for the initialization source. Entropy when unset.
    pub random_seed: Option<u64>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_durable_on_initialize: defaults::DEFAULT_SEED_DURABLE_ON_INITIALIZE,
            random_seed: None,
        }
    }
}
