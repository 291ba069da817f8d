use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{NEGATIVE_MARKER, POSITIVE_MARKER};

/// Which of a feature's two weight slots a key addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    pub const ALL: [Polarity; 2] = [Polarity::Positive, Polarity::Negative];

    /// Marker wrapped around the feature identifier for this polarity.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Positive => POSITIVE_MARKER,
            Self::Negative => NEGATIVE_MARKER,
        }
    }

    /// Classify a key by its markers. The key must open and close with the
    /// same marker, optionally followed by a decimal class label; anything
    /// else was not produced by the codec and returns `None`.
    pub fn of_key(key: &WeightKey) -> Option<Self> {
        Self::ALL.into_iter().find(|p| {
            let m = p.marker();
            let unlabelled = key.as_str().trim_end_matches(|c: char| c.is_ascii_digit());
            unlabelled
                .strip_prefix(m)
                .is_some_and(|rest| rest.ends_with(m))
        })
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Positive => f.write_str("positive"),
            Self::Negative => f.write_str("negative"),
        }
    }
}

/// Storage key of one weight slot inside the shared hash namespace.
///
/// Built by [`crate::codec`] from a feature identifier, or taken verbatim
/// from a caller that already holds keys (e.g. the output of a read).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightKey(String);

impl WeightKey {
    /// Wrap an existing key string without derivation.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WeightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WeightKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for WeightKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for WeightKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
