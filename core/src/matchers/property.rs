use std::collections::BTreeMap;

use crate::matcher::property_assignment;
use crate::validate::ValidationError;
use crate::{Claim, Fragment, Matcher, MissingValueError, Value};

/// Collects every property assignment token (`key=value`) into a map.
///
/// Tokens that are not assignments are left for other matchers.
///
/// # Examples
///
/// ```
/// use argmatch_core::{Claim, KeyValueCatchAll, Matcher};
///
/// let mut props = KeyValueCatchAll::new();
/// let tokens: Vec<String> = vec!["key=value".into(), "novalue".into()];
/// assert_eq!(props.offer(&tokens, 0).unwrap(), Claim::Single);
/// assert_eq!(props.offer(&tokens, 1).unwrap(), Claim::NotClaimed);
/// assert_eq!(props.state().get("key").and_then(|v| v.as_str()), Some("value"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeyValueCatchAll {
    values: BTreeMap<String, String>,
}

impl KeyValueCatchAll {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Matcher for KeyValueCatchAll {
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
        match property_assignment(&tokens[cursor]) {
            Some((key, value)) => {
                self.values.insert(key.to_string(), value.to_string());
                Ok(Claim::Single)
            }
            None => Ok(Claim::NotClaimed),
        }
    }

    fn state(&self) -> Value {
        Value::Map(
            self.values
                .iter()
                .map(|(k, v)| (k.clone(), Value::Text(v.clone())))
                .collect(),
        )
    }

    fn describe_help(&self, _name: &str) -> Fragment {
        "key=value ...".into()
    }

    fn reset(&mut self) {
        self.values.clear();
    }
}

/// Captures the value of a single named property (`mode=fast`).
///
/// The matching assignment is claimed, so matchers registered later (such
/// as a [`KeyValueCatchAll`]) never see it. Assignments to other properties
/// are left alone.
///
/// # Examples
///
/// ```
/// use argmatch_core::{Claim, KeyValueNamed, Matcher};
///
/// let mut mode = KeyValueNamed::new("mode");
/// let tokens: Vec<String> = vec!["mode=fast".into(), "level=3".into()];
/// assert_eq!(mode.offer(&tokens, 0).unwrap(), Claim::Single);
/// assert_eq!(mode.offer(&tokens, 1).unwrap(), Claim::NotClaimed);
/// assert_eq!(mode.state().as_str(), Some("fast"));
/// ```
#[derive(Debug, Clone)]
pub struct KeyValueNamed {
    property: String,
    default: Option<String>,
    value: Option<String>,
}

impl KeyValueNamed {
    pub fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            default: None,
            value: None,
        }
    }

    /// Sets the state reported when the property is never assigned.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn property(&self) -> &str {
        &self.property
    }
}

impl Matcher for KeyValueNamed {
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
        match property_assignment(&tokens[cursor]) {
            Some((key, value)) if key == self.property => {
                self.value = Some(value.to_string());
                Ok(Claim::Single)
            }
            _ => Ok(Claim::NotClaimed),
        }
    }

    fn state(&self) -> Value {
        self.value.clone().or_else(|| self.default.clone()).into()
    }

    fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    fn describe_help(&self, name: &str) -> Fragment {
        format!("{}=<{name}>", self.property).into()
    }

    fn validate(&self) -> Vec<ValidationError> {
        if self.property.trim().is_empty() {
            return vec![ValidationError::EmptyPropertyName];
        }
        Vec::new()
    }

    fn reset(&mut self) {
        self.value = None;
    }
}
