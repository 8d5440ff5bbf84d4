//! Dynamic JSON value walked by the diff engine.
//!
//! Claim files carry large opaque subtrees (node summaries, CNI plugin
//! configuration, hardware inventories) whose shape is not known ahead of
//! time. [`Value`] is the closed sum type those subtrees decode into.
//!
//! Objects are stored in a `BTreeMap`, so iterating an object always visits
//! its keys in sorted order regardless of their order in the source document.
use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A decoded JSON value.
///
/// Integers and floats are kept apart so that integral numbers render without
/// a fractional part, but they compare equal by numeric value (see the
/// [`PartialEq`] impl).
///
/// Decoding builds the tree directly from the deserializer. Serialization
/// goes through `serde_json::Value`; a non-finite float serializes as `null`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(into = "serde_json::Value")]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer (fits in i64).
    Integer(i64),
    /// Unsigned integer above `i64::MAX`.
    UnsignedInteger(u64),
    /// IEEE 754 double-precision float.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Ordered sequence of values.
    Array(Vec<Value>),
    /// String-keyed map, iterated in sorted key order.
    Object(BTreeMap<String, Value>),
}

/// A string-keyed map of values.
pub type Map = BTreeMap<String, Value>;

/// Returns `true` when float `f` holds exactly the integer `i`.
fn float_eq_int(f: f64, i: i128) -> bool {
    // 2^64 bounds cover both i64 and u64 without the cast saturating.
    const BOUND: f64 = 18_446_744_073_709_551_616.0;
    f.is_finite() && f.fract() == 0.0 && f > -BOUND && f < BOUND && f as i128 == i
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::UnsignedInteger(a), Self::UnsignedInteger(b)) => a == b,
            (Self::Integer(a), Self::UnsignedInteger(b))
            | (Self::UnsignedInteger(b), Self::Integer(a)) => {
                u64::try_from(*a).is_ok_and(|a| a == *b)
            }
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits() || a == b,
            (Self::Float(f), Self::Integer(i)) | (Self::Integer(i), Self::Float(f)) => {
                float_eq_int(*f, i128::from(*i))
            }
            (Self::Float(f), Self::UnsignedInteger(u))
            | (Self::UnsignedInteger(u), Self::Float(f)) => float_eq_int(*f, i128::from(*u)),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Returns the inner map if this is an object.
    pub fn as_object(&self) -> Option<&Map> {
        if let Self::Object(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[Value]> {
        if let Self::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    /// Returns `true` for `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_u64().map(Self::UnsignedInteger))
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Integer(i) => Self::from(i),
            Value::UnsignedInteger(u) => Self::from(u),
            Value::Float(f) => serde_json::Number::from_f64(f).map_or(Self::Null, Self::Number),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("any JSON value")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::UnsignedInteger(v), Value::Integer))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Value, A::Error> {
        let mut entries = Map::new();
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            entries.insert(key, value);
        }
        Ok(Value::Object(entries))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

/// Plain-text rendering used in report rows and `path=value` entries.
///
/// Strings are written without quotes. Floats use the shortest form that
/// round-trips, so `58.0` renders as `58`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::UnsignedInteger(u) => write!(f, "{u}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => f.write_str(s),
            Self::Array(_) => f.write_str("[...]"),
            Self::Object(_) => f.write_str("{...}"),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn parse(json: &str) -> Value {
        serde_json::from_str(json).expect("valid JSON")
    }

    #[test]
    fn object_keys_iterate_sorted() {
        let v = parse(r#"{"zeta": 1, "alpha": 2, "mid": 3}"#);
        let keys: Vec<&str> = v
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn numbers_decode_by_kind() {
        assert!(matches!(parse("58"), Value::Integer(58)));
        assert!(matches!(parse("-3"), Value::Integer(-3)));
        assert!(matches!(parse("1.5"), Value::Float(_)));
        assert!(matches!(
            parse("18446744073709551615"),
            Value::UnsignedInteger(u64::MAX)
        ));
    }

    #[test]
    fn integer_equals_integral_float() {
        assert_eq!(Value::Integer(58), Value::Float(58.0));
        assert_eq!(Value::Float(58.0), Value::Integer(58));
        assert_ne!(Value::Integer(58), Value::Float(58.5));
        assert_eq!(
            Value::UnsignedInteger(1 << 63),
            Value::Float(9_223_372_036_854_775_808.0)
        );
    }

    #[test]
    fn cross_integer_width_equality() {
        assert_eq!(Value::Integer(42), Value::UnsignedInteger(42));
        assert_ne!(Value::Integer(-1), Value::UnsignedInteger(u64::MAX));
    }

    #[test]
    fn mismatched_kinds_are_not_equal() {
        assert_ne!(Value::String("1".to_owned()), Value::Integer(1));
        assert_ne!(Value::Bool(true), Value::Integer(1));
        assert_ne!(Value::Null, Value::String(String::new()));
    }

    #[test]
    fn nested_equality_is_structural() {
        assert_eq!(parse(r#"{"a": [1, {"b": 2.0}]}"#), parse(r#"{"a": [1.0, {"b": 2}]}"#));
        assert_ne!(parse(r#"{"a": [1, 2]}"#), parse(r#"{"a": [2, 1]}"#));
    }

    #[test]
    fn display_variants() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Integer(-5).to_string(), "-5");
        assert_eq!(Value::Float(58.0).to_string(), "58");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::String("hi".to_owned()).to_string(), "hi");
        assert_eq!(Value::Array(vec![]).to_string(), "[...]");
        assert_eq!(Value::Object(Map::new()).to_string(), "{...}");
    }

    #[test]
    fn serde_json_conversion_round_trip() {
        let original = serde_json::json!({"a": [1, "two", true, null], "b": 2.5});
        let value = Value::from(original.clone());
        assert_eq!(serde_json::Value::from(value), original);
    }

    #[test]
    fn serializes_as_plain_json() {
        let v = parse(r#"{"b": [1, "x"], "a": null}"#);
        let json = serde_json::to_string(&v).expect("serialize");
        assert_eq!(json, r#"{"a":null,"b":[1,"x"]}"#);
    }

    #[test]
    fn decodes_without_intermediate_tree() {
        let mut de = serde_json::Deserializer::from_str(r#"{"a": [1, 2.5, "x", null, false]}"#);
        let v = Value::deserialize(&mut de).expect("decode");
        let items = v.get("a").and_then(Value::as_array).expect("array");
        assert!(matches!(items[0], Value::Integer(1)));
        assert!(matches!(items[1], Value::Float(_)));
        assert_eq!(items[2], Value::from("x"));
        assert!(items[3].is_null());
        assert_eq!(items[4], Value::Bool(false));
    }

    #[test]
    fn rejects_truncated_documents() {
        assert!(serde_json::from_str::<Value>(r#"{"a": [1, 2"#).is_err());
    }

    #[test]
    fn get_on_object() {
        let v = parse(r#"{"k": true}"#);
        assert_eq!(v.get("k"), Some(&Value::Bool(true)));
        assert_eq!(v.get("missing"), None);
        assert_eq!(Value::Integer(1).get("k"), None);
    }
}
