use weightbank_core::errors::*;

#[test]
fn backend_unavailable_names_the_backend() {
    let err = WeightsError::fast_hash_unavailable("connection refused");
    let msg = err.to_string();
    assert!(msg.contains("fast hash"));
    assert!(msg.contains("connection refused"));
    assert!(err.is_backend_unavailable());

    let err = WeightsError::durable_unavailable("disk I/O error");
    assert!(err.to_string().contains("durable record"));
}

#[test]
fn validation_error_carries_feature_and_reason() {
    let err = WeightsError::validation("++f++", "weight must be finite");
    let msg = err.to_string();
    assert!(msg.contains("++f++"));
    assert!(msg.contains("finite"));
    assert!(err.is_validation());
    assert!(!err.is_backend_unavailable());
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(
        WeightsError::fast_hash_unavailable("x").error_code(),
        "BACKEND_UNAVAILABLE"
    );
    assert_eq!(WeightsError::validation("f", "x").error_code(), "VALIDATION_ERROR");
    assert_eq!(
        WeightsError::MigrationFailed { version: 2, reason: "x".into() }.error_code(),
        "MIGRATION_FAILED"
    );
}

#[test]
fn config_error_converts_and_keeps_code() {
    let err: WeightsError = ConfigError::FileNotFound { path: "w.toml".into() }.into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert_eq!(err.coded_string(), "[CONFIG_ERROR] config error: config file not found: w.toml");
}
