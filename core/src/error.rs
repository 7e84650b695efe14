//! Error raised while a matcher consumes tokens.

use thiserror::Error;

/// A trigger-based matcher needed trailing values the token stream did not
/// supply.
///
/// This aborts the scan that raised it; it is distinct from a mandatory
/// parameter that was never claimed, which is only detected after the scan.
///
/// # Examples
///
/// ```
/// use argmatch_core::MissingValueError;
///
/// let err = MissingValueError::new("-f", 1, 0);
/// assert_eq!(err.to_string(), "argument -f must be followed by 1 value(s), found 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("argument {trigger} must be followed by {expected} value(s), found {found}")]
pub struct MissingValueError {
    /// The trigger token that required the values.
    pub trigger: String,
    /// Number of trailing values the matcher needed.
    pub expected: usize,
    /// Number of tokens that actually remained after the trigger.
    pub found: usize,
}

impl MissingValueError {
    pub fn new(trigger: impl Into<String>, expected: usize, found: usize) -> Self {
        Self {
            trigger: trigger.into(),
            expected,
            found,
        }
    }
}
