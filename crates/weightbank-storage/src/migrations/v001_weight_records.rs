//! v001: weight_records, one row per feature.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS weight_records (
    feature     TEXT PRIMARY KEY NOT NULL CHECK (length(feature) > 0),
    weight      REAL NOT NULL,
    revision    INTEGER NOT NULL DEFAULT 1,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);
";
