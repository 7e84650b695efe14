//! Structural validation of matcher configurations and registries.
//!
//! Catches configuration mistakes such as empty trigger sets, triggers
//! containing whitespace, zero-arity tuples, and duplicate destination
//! names before a scan silently misbehaves.
//!
//! # Examples
//!
//! ```
//! use argmatch_core::*;
//!
//! assert!(validate_triggers(&Triggers::from(["-v", "--verbose"])).is_empty());
//!
//! // Invalid: a trigger can never match a token containing whitespace
//! let errors = validate_triggers(&Triggers::from("--out file"));
//! assert_eq!(errors, vec![ValidationError::InvalidTrigger("--out file".into())]);
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::Triggers;

/// Registry validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A trigger-based matcher has no triggers.
    #[error("trigger set cannot be empty")]
    EmptyTriggerSet,
    /// A trigger is empty or contains whitespace.
    #[error("invalid trigger: {0:?}")]
    InvalidTrigger(String),
    /// A tuple matcher consumes no values.
    #[error("tuple matcher on {0} must have a non-zero arity")]
    ZeroArity(String),
    /// Member names given for a tuple do not match its arity.
    #[error("tuple matcher on {trigger} has arity {arity} but {names} member name(s)")]
    ArityNameMismatch {
        trigger: String,
        arity: usize,
        names: usize,
    },
    /// A named property matcher has an empty property name.
    #[error("property name cannot be empty")]
    EmptyPropertyName,
    /// No destination could be supplied or inferred.
    #[error("parameter destination cannot be empty")]
    EmptyDestination,
    /// Two parameters write to the same destination.
    #[error("duplicate destination: {0}")]
    DuplicateDestination(String),
}

/// Validates a trigger set.
pub fn validate_triggers(triggers: &Triggers) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if triggers.is_empty() {
        errors.push(ValidationError::EmptyTriggerSet);
        return errors;
    }

    for trigger in triggers.as_slice() {
        if trigger.is_empty() || trigger.chars().any(char::is_whitespace) {
            errors.push(ValidationError::InvalidTrigger(trigger.clone()));
            return errors;
        }
    }

    errors
}

/// Validates destination names in registration order.
///
/// # Examples
///
/// ```
/// use argmatch_core::{ValidationError, validate_destinations};
///
/// assert!(validate_destinations(["file", "verbose"]).is_empty());
/// assert_eq!(
///     validate_destinations(["file", "file"]),
///     vec![ValidationError::DuplicateDestination("file".into())]
/// );
/// ```
pub fn validate_destinations<'a, I>(destinations: I) -> Vec<ValidationError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for dest in destinations {
        if dest.trim().is_empty() {
            errors.push(ValidationError::EmptyDestination);
            return errors;
        }
        if !seen.insert(dest) {
            errors.push(ValidationError::DuplicateDestination(dest.to_string()));
            return errors;
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_triggers_rejects_empty_set() {
        let errors = validate_triggers(&Triggers::default());
        assert_eq!(errors, vec![ValidationError::EmptyTriggerSet]);
    }

    #[test]
    fn test_validate_triggers_rejects_empty_trigger() {
        let errors = validate_triggers(&Triggers::from(["-v", ""]));
        assert_eq!(errors, vec![ValidationError::InvalidTrigger(String::new())]);
    }

    #[test]
    fn test_validate_destinations_rejects_blank() {
        let errors = validate_destinations(["ok", " "]);
        assert_eq!(errors, vec![ValidationError::EmptyDestination]);
    }

    #[test]
    fn test_validate_destinations_accepts_unique() {
        assert!(validate_destinations(["a", "b", "c"]).is_empty());
    }
}
