//! Lenient deserializers for numeric fields of the external API.
//!
//! Across backend snapshots the same field arrives sometimes as a JSON
//! number and sometimes as a numeric string (`"precio_unitario": "1234.50"`).
//! Every wire type normalizes such fields here, at deserialization time;
//! nothing downstream re-parses strings ad hoc.

use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumOrString {
    I64(i64),
    F64(f64),
    String(String),
}

fn to_f64<E: de::Error>(raw: NumOrString) -> Result<f64, E> {
    match raw {
        NumOrString::F64(v) => Ok(v),
        NumOrString::I64(v) => Ok(v as f64),
        NumOrString::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(&s), &"a numeric string")),
    }
}

fn to_i32<E: de::Error>(raw: NumOrString) -> Result<i32, E> {
    match raw {
        NumOrString::I64(v) => i32::try_from(v)
            .map_err(|_| de::Error::invalid_value(Unexpected::Signed(v), &"an i32 value")),
        NumOrString::F64(v) if v.fract() == 0.0 => Ok(v as i32),
        NumOrString::F64(v) => Err(de::Error::invalid_value(
            Unexpected::Float(v),
            &"an integer value",
        )),
        NumOrString::String(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| de::Error::invalid_value(Unexpected::Str(&s), &"an integer string")),
    }
}

/// `f64` from a JSON number or a numeric string.
pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    to_f64(NumOrString::deserialize(deserializer)?)
}

/// `Option<f64>` from a JSON number, a numeric string, or null.
pub fn opt_f64_lenient<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumOrString>::deserialize(deserializer)?
        .map(to_f64)
        .transpose()
}

/// `i32` from a JSON integer or a numeric string. Fractional input is rejected.
pub fn i32_lenient<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    to_i32(NumOrString::deserialize(deserializer)?)
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Price {
        #[serde(deserialize_with = "super::f64_lenient")]
        value: f64,
    }

    #[derive(Deserialize)]
    struct MaybePrice {
        #[serde(default, deserialize_with = "super::opt_f64_lenient")]
        value: Option<f64>,
    }

    #[derive(Deserialize)]
    struct Stock {
        #[serde(deserialize_with = "super::i32_lenient")]
        value: i32,
    }

    #[test]
    fn f64_from_number_and_string() {
        let p: Price = serde_json::from_str(r#"{"value": 1234.5}"#).unwrap();
        assert_eq!(p.value, 1234.5);
        let p: Price = serde_json::from_str(r#"{"value": "1234.50"}"#).unwrap();
        assert_eq!(p.value, 1234.5);
        let p: Price = serde_json::from_str(r#"{"value": 7}"#).unwrap();
        assert_eq!(p.value, 7.0);
        let p: Price = serde_json::from_str(r#"{"value": "-3.25"}"#).unwrap();
        assert_eq!(p.value, -3.25);
    }

    #[test]
    fn opt_f64_accepts_null_and_missing() {
        let p: MaybePrice = serde_json::from_str(r#"{"value": null}"#).unwrap();
        assert_eq!(p.value, None);
        let p: MaybePrice = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(p.value, None);
        let p: MaybePrice = serde_json::from_str(r#"{"value": "12"}"#).unwrap();
        assert_eq!(p.value, Some(12.0));
    }

    #[test]
    fn i32_from_number_and_string() {
        let s: Stock = serde_json::from_str(r#"{"value": 42}"#).unwrap();
        assert_eq!(s.value, 42);
        let s: Stock = serde_json::from_str(r#"{"value": "42"}"#).unwrap();
        assert_eq!(s.value, 42);
    }

    #[test]
    fn malformed_strings_are_rejected() {
        assert!(serde_json::from_str::<Price>(r#"{"value": "abc"}"#).is_err());
        assert!(serde_json::from_str::<Stock>(r#"{"value": "1.5"}"#).is_err());
        assert!(serde_json::from_str::<Stock>(r#"{"value": 1.5}"#).is_err());
    }
}
