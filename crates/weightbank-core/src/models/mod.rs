mod feature;
mod lookup;
mod record;
mod weight_key;

use std::collections::BTreeMap;

pub use feature::FeatureId;
pub use lookup::WeightLookup;
pub use record::{AuditEntry, AuditOperation, WeightRecord};
pub use weight_key::{Polarity, WeightKey};

/// Weights addressed by their storage key, ordered for stable iteration.
pub type WeightMap = BTreeMap<WeightKey, f64>;
