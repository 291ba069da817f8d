use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Environment variable holding per-target log levels,
/// e.g. `WEIGHTBANK_LOG=weightbank=debug,weightbank_storage=trace`.
pub const LOG_ENV_VAR: &str = "WEIGHTBANK_LOG";

/// Initialize logging with defaults.
///
/// Falls back to `weightbank=info` if `WEIGHTBANK_LOG` is not set or is invalid.
/// Idempotent. A subscriber installed by the host process is left in place.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig {
        log_level: "weightbank=info".to_string(),
        ..ObservabilityConfig::default()
    });
}

/// Initialize logging from the observability section of the config.
/// `WEIGHTBANK_LOG` still wins over `log_level` when present.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);

        if config.json_logs {
            let _ = tracing_subscriber::registry()
                .with(layer.json())
                .with(filter)
                .try_init();
        } else {
            let _ = tracing_subscriber::registry()
                .with(layer)
                .with(filter)
                .try_init();
        }
    });
}
