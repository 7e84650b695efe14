//! The matcher contract shared by every parameter variant.
//!
//! A scan offers each token to the registered matchers in priority order.
//! The first matcher that returns something other than
//! [`Claim::NotClaimed`] owns the token (and, for a [`Claim::Span`], the
//! tokens that follow it). Matchers accumulate their own state while being
//! offered tokens; the orchestrator only reads it back through
//! [`Matcher::state`] once the scan is over.
//!
//! # Implementing a custom matcher
//!
//! ```
//! use argmatch_core::{Claim, Fragment, Matcher, MissingValueError, Value};
//!
//! /// Counts how many times `-v` appears.
//! #[derive(Debug, Default)]
//! struct Verbosity(i64);
//!
//! impl Matcher for Verbosity {
//!     fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
//!         if tokens[cursor] == "-v" {
//!             self.0 += 1;
//!             return Ok(Claim::Single);
//!         }
//!         Ok(Claim::NotClaimed)
//!     }
//!
//!     fn state(&self) -> Value {
//!         Value::Integer(self.0)
//!     }
//!
//!     fn is_empty(&self) -> bool {
//!         self.0 == 0
//!     }
//!
//!     fn describe_help(&self, _name: &str) -> Fragment {
//!         "-v".into()
//!     }
//!
//!     fn describe_usage(&self, _name: &str) -> Fragment {
//!         "(-v)...".into()
//!     }
//!
//!     fn reset(&mut self) {
//!         self.0 = 0;
//!     }
//! }
//!
//! let tokens: Vec<String> = vec!["-v".into(), "-v".into()];
//! let mut m = Verbosity::default();
//! assert_eq!(m.offer(&tokens, 0).unwrap(), Claim::Single);
//! assert_eq!(m.offer(&tokens, 1).unwrap(), Claim::Single);
//! assert_eq!(m.state(), Value::Integer(2));
//! ```

use std::fmt;

use crate::error::MissingValueError;
use crate::triggers::Triggers;
use crate::validate::ValidationError;
use crate::value::Value;

/// Outcome of offering the token at the cursor to a matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// The token is not relevant to this matcher; offer it to the next one.
    NotClaimed,
    /// The matcher consumed this token only.
    Single,
    /// The matcher consumed this token plus the next `k` tokens.
    Span(usize),
}

impl Claim {
    pub fn is_claimed(self) -> bool {
        !matches!(self, Self::NotClaimed)
    }

    /// Number of tokens the cursor advances past after this claim.
    ///
    /// An unclaimed token still advances the cursor by one: the scan drops it.
    pub fn width(self) -> usize {
        match self {
            Self::NotClaimed | Self::Single => 1,
            Self::Span(k) => k + 1,
        }
    }
}

/// Usage or help text for one parameter: either a single clause or several
/// independent clauses (e.g. a matcher exposing two mutually exclusive
/// triggers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Single(String),
    Multi(Vec<String>),
}

impl Fragment {
    /// Returns the clauses in order.
    pub fn parts(&self) -> Vec<&str> {
        match self {
            Self::Single(s) => vec![s.as_str()],
            Self::Multi(parts) => parts.iter().map(String::as_str).collect(),
        }
    }

    pub fn into_parts(self) -> Vec<String> {
        match self {
            Self::Single(s) => vec![s],
            Self::Multi(parts) => parts,
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, Self::Multi(_))
    }
}

impl From<String> for Fragment {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<&str> for Fragment {
    fn from(s: &str) -> Self {
        Self::Single(s.to_string())
    }
}

impl From<Vec<String>> for Fragment {
    fn from(parts: Vec<String>) -> Self {
        Self::Multi(parts)
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.parts().join(" "))
    }
}

/// A polymorphic unit of matching.
///
/// A matcher instance owns mutable accumulated state for one scan. Running
/// a second scan requires a [`reset`](Matcher::reset) first; the
/// orchestrator in `argmatch-manager` does this at the start of every parse.
pub trait Matcher: fmt::Debug {
    /// Decides whether the token at `cursor` belongs to this matcher.
    ///
    /// A matcher returning [`Claim::Span(k)`](Claim::Span) must not read past
    /// `cursor + k`. When it needs tokens beyond the end of the stream it
    /// fails with [`MissingValueError`].
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError>;

    /// Returns the accumulated state. Side-effect free.
    fn state(&self) -> Value;

    /// Whether the state is the matcher's empty sentinel, i.e. a mandatory
    /// parameter using this matcher was never satisfied.
    fn is_empty(&self) -> bool {
        self.state().is_empty()
    }

    /// Plain syntax of the arguments this matcher looks for, used in help
    /// lines.
    fn describe_help(&self, name: &str) -> Fragment;

    /// Syntax used in the usage line, including repetition markers.
    fn describe_usage(&self, name: &str) -> Fragment {
        self.describe_help(name)
    }

    /// `true` when [`describe_usage`](Matcher::describe_usage) already embeds
    /// its own optionality brackets.
    fn optionality_is_self_rendered(&self) -> bool {
        false
    }

    /// Literal triggers this matcher watches for, if any.
    fn triggers(&self) -> Option<&Triggers> {
        None
    }

    /// Structural problems with this matcher's configuration.
    fn validate(&self) -> Vec<ValidationError> {
        self.triggers()
            .map(crate::validate::validate_triggers)
            .unwrap_or_default()
    }

    /// Restores the construction-time state.
    fn reset(&mut self);
}

/// Returns the `count` tokens following `cursor`, or the error naming the
/// trigger at `cursor` when the stream ends too early.
pub fn trailing_values(
    tokens: &[String],
    cursor: usize,
    count: usize,
) -> Result<&[String], MissingValueError> {
    let start = cursor + 1;
    let available = tokens.len().saturating_sub(start);
    if available < count {
        return Err(MissingValueError::new(
            tokens.get(cursor).cloned().unwrap_or_default(),
            count,
            available,
        ));
    }
    Ok(&tokens[start..start + count])
}

/// Splits a property assignment token (`key=value`).
///
/// The token must split on `=` into exactly two parts with a non-empty key.
///
/// # Examples
///
/// ```
/// use argmatch_core::property_assignment;
///
/// assert_eq!(property_assignment("mode=fast"), Some(("mode", "fast")));
/// assert_eq!(property_assignment("mode="), Some(("mode", "")));
/// assert_eq!(property_assignment("novalue"), None);
/// assert_eq!(property_assignment("a=b=c"), None);
/// assert_eq!(property_assignment("=x"), None);
/// ```
pub fn property_assignment(token: &str) -> Option<(&str, &str)> {
    let (key, value) = token.split_once('=')?;
    if key.is_empty() || value.contains('=') {
        return None;
    }
    Some((key, value))
}
