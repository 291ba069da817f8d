use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Durable copy of one weight, matched on `feature`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightRecord {
    pub feature: String,
    pub weight: f64,
    /// 1 on create, incremented by every replace.
    pub revision: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Kind of durable mutation recorded in the audit log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOperation {
    Create,
    Replace,
}

impl AuditOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Replace => "replace",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "create" => Some(Self::Create),
            "replace" => Some(Self::Replace),
            _ => None,
        }
    }
}

/// One append-only audit row per durable upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub feature: String,
    pub operation: AuditOperation,
    pub old_weight: Option<f64>,
    pub new_weight: f64,
    pub revision: u64,
    pub timestamp: DateTime<Utc>,
}
