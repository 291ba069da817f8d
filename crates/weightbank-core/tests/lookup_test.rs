use weightbank_core::models::WeightLookup;

#[test]
fn absent_field_is_missing() {
    assert_eq!(WeightLookup::parse(None), WeightLookup::Missing);
}

#[test]
fn stored_zero_is_present_not_missing() {
    let lookup = WeightLookup::parse(Some("0"));
    assert_eq!(lookup, WeightLookup::Present(0.0));
    assert!(lookup.is_present());
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(WeightLookup::parse(Some(" -0.125\n")), WeightLookup::Present(-0.125));
}

#[test]
fn unparseable_text_is_malformed() {
    let lookup = WeightLookup::parse(Some("heavy"));
    assert_eq!(lookup, WeightLookup::Malformed("heavy".to_string()));
    assert_eq!(lookup.value(), None);
}

#[test]
fn lenient_view_collapses_to_nan() {
    assert!(WeightLookup::Missing.to_lenient().is_nan());
    assert!(WeightLookup::Malformed("x".into()).to_lenient().is_nan());
    assert_eq!(WeightLookup::Present(1.5).to_lenient(), 1.5);
}

#[test]
fn stored_nan_is_present_but_not_usable() {
    let lookup = WeightLookup::parse(Some("NaN"));
    assert!(lookup.is_present());
    assert!(!lookup.is_usable());
    assert!(WeightLookup::Present(-0.0).is_usable());
    assert!(!WeightLookup::Missing.is_usable());
}
