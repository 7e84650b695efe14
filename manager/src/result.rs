use std::collections::BTreeMap;

use argmatch_core::Value;
use serde::Serialize;

use crate::error::MissingParameter;

/// Outcome of a parse: the final value of every parameter by destination.
///
/// `missing` is only non-empty when the missing-argument policy does not
/// raise. `unclaimed` lists the tokens no parameter claimed; the scan drops
/// them, and callers that want to reject unknown arguments can inspect it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ParseResult {
    pub values: BTreeMap<String, Value>,
    #[serde(skip)]
    pub missing: Vec<MissingParameter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unclaimed: Vec<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub help_requested: bool,
}

impl ParseResult {
    pub fn get(&self, destination: &str) -> Option<&Value> {
        self.values.get(destination)
    }

    pub fn get_str(&self, destination: &str) -> Option<&str> {
        self.get(destination).and_then(Value::as_str)
    }

    /// Returns the boolean state of a switch, `false` when unknown.
    pub fn flag(&self, destination: &str) -> bool {
        self.get(destination).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn contains(&self, destination: &str) -> bool {
        self.values.contains_key(destination)
    }

    /// `true` when no mandatory parameter is missing.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), serde_json::Value::from(v.clone())))
                .collect(),
        )
    }
}
