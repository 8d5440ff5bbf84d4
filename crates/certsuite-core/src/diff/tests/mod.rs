#![allow(clippy::expect_used)]

mod compare_tests;

use crate::value::Value;

pub(crate) fn json(text: &str) -> Value {
    serde_json::from_str(text).expect("test JSON should parse")
}

pub(crate) fn filters(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_owned()).collect()
}
