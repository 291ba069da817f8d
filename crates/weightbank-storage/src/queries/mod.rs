pub mod audit_ops;
pub mod record_ops;

use chrono::{DateTime, Utc};

use weightbank_core::errors::WeightsResult;

use crate::to_storage_err;

pub(crate) fn parse_timestamp(raw: &str) -> WeightsResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| to_storage_err(format!("bad timestamp {raw:?}: {e}")))
}
