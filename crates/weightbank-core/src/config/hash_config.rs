use serde::{Deserialize, Serialize};

use super::defaults;

/// Fast hash backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HashConfig {
    /// Connection URL of the key-value server.
    pub url: String,
    /// Name of the hash holding every weight field.
    pub namespace: String,
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_HASH_URL.to_string(),
            namespace: defaults::DEFAULT_HASH_NAMESPACE.to_string(),
        }
    }
}
