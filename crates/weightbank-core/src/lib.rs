//! # weightbank-core
//!
//! Foundation crate for the weightbank workspace.
//! Defines the weight key codec, models, backend traits, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod codec;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod random;
pub mod tracing;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::WeightsConfig;
pub use errors::{WeightsError, WeightsResult};
pub use models::{FeatureId, Polarity, WeightKey, WeightLookup, WeightMap, WeightRecord};
