//! String encoding of weights inside the hash.

use weightbank_core::models::WeightLookup;

/// Encode a weight as stored text. `f64`'s `Display` is the shortest
/// representation that parses back to the same bits.
pub fn encode(value: f64) -> String {
    value.to_string()
}

/// Decode a stored field. `None` means the field does not exist.
pub fn decode(raw: Option<&str>) -> WeightLookup {
    WeightLookup::parse(raw)
}
