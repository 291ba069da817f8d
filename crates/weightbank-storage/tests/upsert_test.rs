use weightbank_core::traits::IDurableRecordBackend;
use weightbank_storage::{RecordRules, SqliteRecordStore};

#[tokio::test]
async fn upsert_creates_missing_record() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    assert!(store.fetch("f").await.unwrap().is_none());

    let record = store.upsert("f", 0.25).await.unwrap();
    assert_eq!(record.feature, "f");
    assert_eq!(record.weight, 0.25);
    assert_eq!(record.revision, 1);
    assert_eq!(record.created_at, record.updated_at);

    let stored = store.fetch("f").await.unwrap().expect("record should exist");
    assert_eq!(stored, record);
}

#[tokio::test]
async fn upsert_replaces_weight_and_bumps_revision() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    let first = store.upsert("f", 1.0).await.unwrap();
    let second = store.upsert("f", -2.0).await.unwrap();

    assert_eq!(second.weight, -2.0);
    assert_eq!(second.revision, 2);
    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);
}

#[tokio::test]
async fn repeated_upsert_keeps_one_record() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    store.upsert("f", 3.5).await.unwrap();
    store.upsert("f", 3.5).await.unwrap();

    let all = store.list().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].feature, "f");
    assert_eq!(all[0].weight, 3.5);
    assert_eq!(store.count().await.unwrap(), 1);
}

#[tokio::test]
async fn rejected_value_writes_nothing() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    store.upsert("f", 1.0).await.unwrap();

    let err = store.upsert("f", f64::NAN).await.unwrap_err();
    assert!(err.is_validation());

    let stored = store.fetch("f").await.unwrap().unwrap();
    assert_eq!(stored.weight, 1.0);
    assert_eq!(stored.revision, 1);
    assert_eq!(store.audit_trail("f").await.unwrap().len(), 1);
}

#[tokio::test]
async fn rejected_new_feature_is_not_created() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    assert!(store.upsert("g", f64::INFINITY).await.unwrap_err().is_validation());
    assert!(store.upsert("", 0.0).await.unwrap_err().is_validation());
    assert!(store.fetch("g").await.unwrap().is_none());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn configured_bound_is_enforced() {
    let store = SqliteRecordStore::open_in_memory_with_rules(RecordRules {
        require_finite: true,
        max_abs_weight: Some(1.0),
    })
    .unwrap();
    store.upsert("f", 1.0).await.unwrap();
    assert!(store.upsert("f", -1.5).await.unwrap_err().is_validation());
    assert_eq!(store.fetch("f").await.unwrap().unwrap().weight, 1.0);
}

#[tokio::test]
async fn infinities_allowed_when_finite_rule_is_off() {
    let store = SqliteRecordStore::open_in_memory_with_rules(RecordRules {
        require_finite: false,
        max_abs_weight: None,
    })
    .unwrap();
    let record = store.upsert("f", f64::NEG_INFINITY).await.unwrap();
    assert_eq!(record.weight, f64::NEG_INFINITY);
}

#[tokio::test]
async fn list_is_ordered_by_feature() {
    let store = SqliteRecordStore::open_in_memory().unwrap();
    for (f, w) in [("c", 3.0), ("a", 1.0), ("b", 2.0)] {
        store.upsert(f, w).await.unwrap();
    }
    let features: Vec<String> = store.list().await.unwrap().into_iter().map(|r| r.feature).collect();
    assert_eq!(features, vec!["a", "b", "c"]);
}
