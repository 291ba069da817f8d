/// Prefix and suffix wrapped around a feature to form its positive key.
pub const POSITIVE_MARKER: &str = "++";

/// Prefix and suffix wrapped around a feature to form its negative key.
pub const NEGATIVE_MARKER: &str = "--";

/// Divisor applied to the difference of two unit draws at initialization.
/// Keeps freshly initialized weights inside (-0.2, 0.2).
pub const INIT_WEIGHT_DIVISOR: f64 = 5.0;

/// Exclusive bound on the magnitude of an initialized weight.
pub const INIT_WEIGHT_BOUND: f64 = 1.0 / INIT_WEIGHT_DIVISOR;

/// Class labels carried by labelled weight keys.
pub const CLASS_LABELS: [usize; 2] = [0, 1];

/// Tracing target prefix used across the workspace.
pub const LOG_TARGET: &str = "weightbank";
