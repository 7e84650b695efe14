//! Error types for parsing and parser definitions.
//!
//! [`ParseError`] covers everything that can end a parse early: a matcher
//! running out of tokens mid-scan, mandatory parameters left unclaimed (when
//! the policy raises), or an inconsistent registry. Transform failures are
//! deliberately absent: they are reported as diagnostics and never abort.

use std::fmt;

use argmatch_core::{MissingValueError, ValidationError};
use thiserror::Error;

use crate::parameter::{Description, Parameter};

/// Snapshot of a mandatory parameter that was never claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingParameter {
    pub destination: String,
    /// Usage clauses of the parameter, as they appear in the usage line.
    pub usage: Vec<String>,
    pub description: Option<Description>,
}

impl MissingParameter {
    pub(crate) fn from_parameter(parameter: &Parameter) -> Self {
        Self {
            destination: parameter.destination().to_string(),
            usage: parameter.usage().into_parts(),
            description: parameter.description().cloned(),
        }
    }
}

/// One or more mandatory parameters never reached a non-empty state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct MissingParameterError {
    /// Missing parameters in registration order.
    pub missing: Vec<MissingParameter>,
}

impl fmt::Display for MissingParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let usages: Vec<String> = self.missing.iter().map(|p| p.usage.join(" ")).collect();
        write!(f, "missing mandatory argument(s): {}", usages.join(", "))
    }
}

/// Errors that can end a parse.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A matcher needed trailing values past the end of the token stream.
    #[error(transparent)]
    MissingValue(#[from] MissingValueError),

    /// Mandatory parameters were not supplied and the policy raises.
    #[error(transparent)]
    MissingParameters(#[from] MissingParameterError),

    /// The registered parameters are inconsistent.
    #[error("invalid parameter registry: {}", join_errors(.0))]
    InvalidRegistry(Vec<ValidationError>),
}

/// Errors that can occur while loading or building a parser definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing or serialization failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// The definition describes an inconsistent registry.
    #[error("invalid definition: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),

    /// A `default` was given for a parameter kind that ignores it.
    #[error("`default` is not supported for `{0}` parameters")]
    UnsupportedDefault(String),
}

/// Convenience alias for results with [`ParseError`].
pub type Result<T> = std::result::Result<T, ParseError>;

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_error_display() {
        let err = MissingParameterError {
            missing: vec![
                MissingParameter {
                    destination: "param".into(),
                    usage: vec!["<param>".into()],
                    description: None,
                },
                MissingParameter {
                    destination: "switch".into(),
                    usage: vec!["-s".into()],
                    description: Some("A switch".into()),
                },
            ],
        };
        assert_eq!(err.to_string(), "missing mandatory argument(s): <param>, -s");
    }

    #[test]
    fn test_invalid_registry_display() {
        let err = ParseError::InvalidRegistry(vec![ValidationError::DuplicateDestination("f".into())]);
        assert_eq!(err.to_string(), "invalid parameter registry: duplicate destination: f");
    }

    #[test]
    fn test_missing_value_is_transparent() {
        let err = ParseError::from(MissingValueError::new("-f", 1, 0));
        assert_eq!(err.to_string(), "argument -f must be followed by 1 value(s), found 0");
    }
}
