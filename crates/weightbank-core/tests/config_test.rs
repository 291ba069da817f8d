use std::io::Write;

use weightbank_core::config::*;
use weightbank_core::errors::ConfigError;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = WeightsConfig::from_toml("").unwrap();

    assert_eq!(config.storage.db_path, "weightbank.db");
    assert!(config.storage.wal_mode);
    assert_eq!(config.storage.busy_timeout_ms, 5_000);
    assert!(config.storage.require_finite);
    assert!(config.storage.max_abs_weight.is_none());

    assert_eq!(config.hash.url, "redis://127.0.0.1:6379");
    assert_eq!(config.hash.namespace, "weights");

    assert!(!config.store.seed_durable_on_initialize);
    assert!(config.store.random_seed.is_none());

    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[storage]
db_path = "/var/lib/weights.db"
max_abs_weight = 10.0

[hash]
namespace = "weights-staging"

[store]
seed_durable_on_initialize = true
random_seed = 42
"#;
    let config = WeightsConfig::from_toml(toml).unwrap();
    assert_eq!(config.storage.db_path, "/var/lib/weights.db");
    assert_eq!(config.storage.max_abs_weight, Some(10.0));
    // Non-overridden fields keep defaults
    assert!(config.storage.wal_mode);
    assert_eq!(config.hash.url, "redis://127.0.0.1:6379");
    assert_eq!(config.hash.namespace, "weights-staging");
    assert!(config.store.seed_durable_on_initialize);
    assert_eq!(config.store.random_seed, Some(42));
}

#[test]
fn config_rejects_empty_namespace() {
    let err = WeightsConfig::from_toml("[hash]\nnamespace = \"  \"\n").unwrap_err();
    match err {
        ConfigError::InvalidValue { field, .. } => assert_eq!(field, "hash.namespace"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn config_rejects_non_positive_weight_bound() {
    let err = WeightsConfig::from_toml("[storage]\nmax_abs_weight = -1.0\n").unwrap_err();
    assert!(err.to_string().contains("storage.max_abs_weight"));
}

#[test]
fn config_reports_parse_errors() {
    let err = WeightsConfig::from_toml("[storage\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn config_from_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[observability]\nlog_level = \"debug\"\njson_logs = true").unwrap();

    let config = WeightsConfig::from_file(file.path()).unwrap();
    assert_eq!(config.observability.log_level, "debug");
    assert!(config.observability.json_logs);
}

#[test]
fn config_from_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = WeightsConfig::from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn config_from_deleted_file_is_not_found() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let path = file.path().to_path_buf();
    drop(file);

    match WeightsConfig::from_file(&path).unwrap_err() {
        ConfigError::FileNotFound { path: reported } => {
            assert_eq!(reported, path.display().to_string())
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}

#[test]
fn config_from_directory_is_a_read_error_not_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = WeightsConfig::from_file(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}
