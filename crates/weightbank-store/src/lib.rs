//! # weightbank-store
//!
//! Composes a fast hash backend and a durable record backend into one
//! weight store. Writes go to both, fast first. Reads come from the fast
//! hash. The durable store is the source of truth for repair.

pub mod engine;
pub mod report;
#[cfg(feature = "redis")]
pub mod wiring;

pub use engine::WeightStore;
pub use report::{RepairReport, SaveReport};
