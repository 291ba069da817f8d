//! Error taxonomy for every weightbank crate.

pub mod config_error;
pub mod error_code;
pub mod weights_error;

pub use config_error::ConfigError;
pub use error_code::WeightsErrorCode;
pub use weights_error::{BackendKind, WeightsError};

/// Result alias used across the workspace.
pub type WeightsResult<T> = Result<T, WeightsError>;
