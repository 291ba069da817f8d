//! v002: weight_audit, append-only log of durable mutations.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS weight_audit (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    feature     TEXT NOT NULL,
    operation   TEXT NOT NULL CHECK (operation IN ('create', 'replace')),
    old_weight  REAL,
    new_weight  REAL NOT NULL,
    revision    INTEGER NOT NULL,
    timestamp   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_weight_audit_feature ON weight_audit(feature);
";
