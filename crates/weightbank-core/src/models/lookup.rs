use serde::{Deserialize, Serialize};

/// Outcome of reading one field from the fast hash.
///
/// Keeps "never written" and "written but unparseable" apart from a stored
/// value, including a stored `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum WeightLookup {
    Present(f64),
    Missing,
    /// The raw stored text did not parse as a float.
    Malformed(String),
}

impl WeightLookup {
    /// Parse a raw field value as read off the wire.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Missing,
            Some(text) => match text.trim().parse::<f64>() {
                Ok(v) => Self::Present(v),
                Err(_) => Self::Malformed(text.to_string()),
            },
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Present(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Present and not NaN. A stored `"NaN"` parses, but no durable record
    /// can hold it, so it counts as a gap.
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Present(v) if !v.is_nan())
    }

    /// Collapse to the legacy float view: anything not present becomes NaN.
    pub fn to_lenient(&self) -> f64 {
        self.value().unwrap_or(f64::NAN)
    }
}
