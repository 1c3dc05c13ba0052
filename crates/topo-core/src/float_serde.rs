//! Serde adapter for `f64` fields that may hold the `+inf` disconnection
//! sentinel.
//!
//! Finite values are written as plain numbers. Non-finite values are written
//! as the strings `"inf"`, `"-inf"` and `"nan"`, since JSON has no literal
//! for them and `serde_json` would otherwise emit `null`. Use with
//! `#[serde(with = "topo_core::float_serde")]`.

use serde::de::{self, Deserialize, Deserializer};
use serde::Serializer;

/// Writes `value` as a number when finite and as a tagged string otherwise.
pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("nan")
    } else if value.is_sign_positive() {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

/// Reads either a number or one of the strings written by [`serialize`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(serde::Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    match Repr::deserialize(deserializer)? {
        Repr::Number(value) => Ok(value),
        Repr::Text(text) => match text.as_str() {
            "inf" | "+inf" | "infinity" => Ok(f64::INFINITY),
            "-inf" | "-infinity" => Ok(f64::NEG_INFINITY),
            "nan" => Ok(f64::NAN),
            other => Err(de::Error::invalid_value(
                de::Unexpected::Str(other),
                &"a number, \"inf\", \"-inf\" or \"nan\"",
            )),
        },
    }
}
