//! Stable error codes for callers that match on strings (logs, bindings).

/// Every error enum in the workspace maps to a stable code string.
pub trait WeightsErrorCode {
    /// Returns the code string (e.g., "VALIDATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const BACKEND_UNAVAILABLE: &str = "BACKEND_UNAVAILABLE";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
