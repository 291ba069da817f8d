// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "weightbank.db";
pub const DEFAULT_WAL_MODE: bool = true;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_REQUIRE_FINITE: bool = true;

// --- Fast hash ---
pub const DEFAULT_HASH_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_HASH_NAMESPACE: &str = "weights";

// --- Store ---
pub const DEFAULT_SEED_DURABLE_ON_INITIALIZE: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
