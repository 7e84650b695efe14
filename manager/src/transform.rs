//! Post-scan value conversion.
//!
//! A transform turns the raw text a matcher collected into a typed value.
//! Failures never abort a parse: the orchestrator logs them and keeps the
//! untransformed value.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use argmatch_core::Value;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while converting a parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("expected a number, got {0:?}")]
    InvalidNumber(String),
    #[error("expected an integer, got {0:?}")]
    InvalidInteger(String),
    #[error("expected a boolean, got {0:?}")]
    InvalidBoolean(String),
    /// Failure reported by a caller-supplied transform.
    #[error("{0}")]
    Custom(String),
}

/// Named value types for parameters.
///
/// Conversion applies to every text leaf of a state: list elements, tuple
/// members, and map values. `null` and boolean leaves pass through.
///
/// # Examples
///
/// ```
/// use argmatch_core::Value;
/// use argmatch_manager::ValueType;
///
/// assert_eq!(ValueType::Integer.convert(&Value::from("12")), Ok(Value::Integer(12)));
/// assert_eq!(
///     ValueType::Number.convert(&Value::list(["1.5", "2"])),
///     Ok(Value::List(vec![Value::Number(1.5), Value::Number(2.0)]))
/// );
/// assert!(ValueType::Number.convert(&Value::from("abc")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Raw text (no conversion, the default).
    #[default]
    String,
    /// Floating-point number.
    Number,
    /// Signed integer.
    Integer,
    /// `true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0`.
    Boolean,
}

impl ValueType {
    pub fn convert(self, value: &Value) -> Result<Value, TransformError> {
        match value {
            Value::Text(text) => self.convert_text(text),
            Value::List(items) => items
                .iter()
                .map(|item| self.convert(item))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::List),
            Value::Map(map) => map
                .iter()
                .map(|(k, v)| self.convert(v).map(|v| (k.clone(), v)))
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Value::Map),
            other => Ok(other.clone()),
        }
    }

    fn convert_text(self, text: &str) -> Result<Value, TransformError> {
        let trimmed = text.trim();
        match self {
            Self::String => Ok(Value::Text(text.to_string())),
            Self::Number => trimmed
                .parse::<f64>()
                .map(Value::Number)
                .map_err(|_| TransformError::InvalidNumber(text.to_string())),
            Self::Integer => trimmed
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| TransformError::InvalidInteger(text.to_string())),
            Self::Boolean => match trimmed.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Ok(Value::Bool(true)),
                "false" | "no" | "off" | "0" => Ok(Value::Bool(false)),
                _ => Err(TransformError::InvalidBoolean(text.to_string())),
            },
        }
    }
}

type TransformFn = dyn Fn(&Value) -> Result<Value, TransformError> + Send + Sync;

/// A conversion applied to a parameter's final state.
#[derive(Clone)]
pub enum Transform {
    /// Convert text leaves to a named type.
    Type(ValueType),
    /// Caller-supplied conversion of the whole state.
    Custom(Arc<TransformFn>),
}

impl Transform {
    /// Wraps a closure as a transform.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmatch_core::Value;
    /// use argmatch_manager::Transform;
    ///
    /// let upper = Transform::custom(|v| Ok(Value::from(v.to_string().to_uppercase())));
    /// assert_eq!(upper.apply(&Value::from("abc")), Ok(Value::from("ABC")));
    /// ```
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&Value) -> Result<Value, TransformError> + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    pub fn apply(&self, value: &Value) -> Result<Value, TransformError> {
        match self {
            Self::Type(value_type) => value_type.convert(value),
            Self::Custom(f) => f(value),
        }
    }
}

impl From<ValueType> for Transform {
    fn from(value_type: ValueType) -> Self {
        Self::Type(value_type)
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(value_type) => f.debug_tuple("Type").field(value_type).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
