//! Weight key codec: derives storage keys from feature identifiers.
//!
//! `positive("f") = "++f++"`, `negative("f") = "--f--"`. The markers differ
//! in their first character, so a positive key never equals a negative key,
//! and stripping the fixed-width markers recovers the identifier, so keys of
//! distinct identifiers never collide. Labelled keys append a decimal class
//! label, which contains no marker characters.

use crate::models::{FeatureId, Polarity, WeightKey};

/// Key for the given polarity slot of `feature`.
pub fn polarity_key(feature: &FeatureId, polarity: Polarity) -> WeightKey {
    let marker = polarity.marker();
    let mut key = String::with_capacity(feature.as_str().len() + 2 * marker.len());
    key.push_str(marker);
    key.push_str(feature.as_str());
    key.push_str(marker);
    WeightKey::from_raw(key)
}

pub fn positive_key(feature: &FeatureId) -> WeightKey {
    polarity_key(feature, Polarity::Positive)
}

pub fn negative_key(feature: &FeatureId) -> WeightKey {
    polarity_key(feature, Polarity::Negative)
}

/// Both slots of `feature`, positive first.
pub fn polarity_keys(feature: &FeatureId) -> [WeightKey; 2] {
    [positive_key(feature), negative_key(feature)]
}

/// Key for one polarity slot of `feature` under a class label.
pub fn labelled_key(feature: &FeatureId, polarity: Polarity, class_label: usize) -> WeightKey {
    let base = polarity_key(feature, polarity);
    WeightKey::from_raw(format!("{base}{class_label}"))
}
