use std::collections::HashSet;

use proptest::prelude::*;

use weightbank_core::codec::*;
use weightbank_core::models::{FeatureId, Polarity, WeightKey};

#[test]
fn polarity_keys_are_positive_then_negative() {
    let f = FeatureId::from("parent(a, b)");
    let [pos, neg] = polarity_keys(&f);
    assert_eq!(pos, positive_key(&f));
    assert_eq!(neg, negative_key(&f));
}

#[test]
fn polarity_of_key_round_trips() {
    let f = FeatureId::from("f");
    assert_eq!(Polarity::of_key(&positive_key(&f)), Some(Polarity::Positive));
    assert_eq!(Polarity::of_key(&negative_key(&f)), Some(Polarity::Negative));
    assert_eq!(Polarity::of_key(&WeightKey::from("plain")), None);
    assert_eq!(Polarity::of_key(&WeightKey::from("++")), None);
    assert_eq!(Polarity::of_key(&WeightKey::from("++plain")), None);
    assert_eq!(Polarity::of_key(&WeightKey::from("++a--")), None);
    assert_eq!(Polarity::of_key(&WeightKey::from("++f++x")), None);
    assert_eq!(Polarity::of_key(&WeightKey::from("--x++yz")), None);
    assert_eq!(Polarity::of_key(&WeightKey::from("+++")), None);
}

#[test]
fn polarity_of_labelled_and_digit_features() {
    for label in weightbank_core::constants::CLASS_LABELS {
        for polarity in Polarity::ALL {
            let key = labelled_key(&FeatureId::from("f"), polarity, label);
            assert_eq!(Polarity::of_key(&key), Some(polarity));
        }
    }
    assert_eq!(Polarity::of_key(&positive_key(&FeatureId::from("7"))), Some(Polarity::Positive));
    assert_eq!(Polarity::of_key(&negative_key(&FeatureId::from(""))), Some(Polarity::Negative));
}

#[test]
fn markers_inside_features_do_not_collide() {
    // Identifiers that themselves contain markers.
    let features = ["", "+", "++", "-", "--", "a++", "++a", "a--b", "--a--"];
    let mut seen = HashSet::new();
    for f in features {
        let f = FeatureId::from(f);
        for key in polarity_keys(&f) {
            assert!(seen.insert(key.clone()), "duplicate key {key}");
        }
    }
}

#[test]
fn labelled_keys_are_distinct_per_class_and_polarity() {
    let f = FeatureId::from("f");
    let mut seen = HashSet::new();
    for label in weightbank_core::constants::CLASS_LABELS {
        for polarity in Polarity::ALL {
            assert!(seen.insert(labelled_key(&f, polarity, label)));
        }
    }
    assert!(!seen.contains(&positive_key(&f)));
    assert!(!seen.contains(&negative_key(&f)));
}

proptest! {
    #[test]
    fn prop_keys_of_distinct_features_are_disjoint(a in ".{0,24}", b in ".{0,24}") {
        prop_assume!(a != b);
        let fa = FeatureId::from(a.as_str());
        let fb = FeatureId::from(b.as_str());
        let ka: HashSet<WeightKey> = polarity_keys(&fa).into_iter().collect();
        let kb: HashSet<WeightKey> = polarity_keys(&fb).into_iter().collect();
        prop_assert_eq!(ka.len(), 2);
        prop_assert!(ka.is_disjoint(&kb));
    }

    #[test]
    fn prop_codec_is_deterministic(a in ".{0,24}") {
        let f = FeatureId::from(a.as_str());
        prop_assert_eq!(positive_key(&f), positive_key(&f.clone()));
        prop_assert_eq!(negative_key(&f), negative_key(&f.clone()));
    }

    #[test]
    fn prop_labelled_keys_injective(
        a in "[a-z+\\-0-9]{0,8}",
        b in "[a-z+\\-0-9]{0,8}",
        la in 0usize..4,
        lb in 0usize..4,
    ) {
        prop_assume!(a != b || la != lb);
        let ka = labelled_key(&FeatureId::from(a.as_str()), Polarity::Positive, la);
        let kb = labelled_key(&FeatureId::from(b.as_str()), Polarity::Positive, lb);
        prop_assert_ne!(ka, kb);
    }
}
