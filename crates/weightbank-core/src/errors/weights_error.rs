use std::fmt;

use super::config_error::ConfigError;
use super::error_code::{self, WeightsErrorCode};

/// Which of the two backing stores an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    FastHash,
    DurableRecord,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FastHash => f.write_str("fast hash"),
            Self::DurableRecord => f.write_str("durable record"),
        }
    }
}

/// Top-level error for weight storage operations.
///
/// Missing or unparseable fast-hash values are not errors; they surface as
/// [`crate::models::WeightLookup::Missing`] and
/// [`crate::models::WeightLookup::Malformed`].
#[derive(Debug, thiserror::Error)]
pub enum WeightsError {
    #[error("{backend} backend unavailable: {reason}")]
    BackendUnavailable { backend: BackendKind, reason: String },

    #[error("validation failed for feature {feature:?}: {reason}")]
    ValidationError { feature: String, reason: String },

    #[error("migration failed at version {version}: {reason}")]
    MigrationFailed { version: u32, reason: String },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl WeightsError {
    pub fn fast_hash_unavailable(reason: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            backend: BackendKind::FastHash,
            reason: reason.into(),
        }
    }

    pub fn durable_unavailable(reason: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            backend: BackendKind::DurableRecord,
            reason: reason.into(),
        }
    }

    pub fn validation(feature: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            feature: feature.into(),
            reason: reason.into(),
        }
    }

    pub fn is_backend_unavailable(&self) -> bool {
        matches!(self, Self::BackendUnavailable { .. })
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }
}

impl WeightsErrorCode for WeightsError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BackendUnavailable { .. } => error_code::BACKEND_UNAVAILABLE,
            Self::ValidationError { .. } => error_code::VALIDATION_ERROR,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::Config(e) => e.error_code(),
        }
    }
}
