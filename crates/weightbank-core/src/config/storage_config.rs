use serde::{Deserialize, Serialize};

use super::defaults;

/// Durable record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    pub db_path: String,
    /// Enable WAL journal mode.
    pub wal_mode: bool,
    /// Busy timeout in milliseconds.
    pub busy_timeout_ms: u32,
    /// Reject NaN and infinite weights.
    pub require_finite: bool,
    /// Reject weights whose magnitude exceeds this bound.
    pub max_abs_weight: Option<f64>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: defaults::DEFAULT_DB_FILENAME.to_string(),
            wal_mode: defaults::DEFAULT_WAL_MODE,
            busy_timeout_ms: defaults::DEFAULT_BUSY_TIMEOUT_MS,
            require_finite: defaults::DEFAULT_REQUIRE_FINITE,
            max_abs_weight: None,
        }
    }
}
