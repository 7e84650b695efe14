use crate::{Claim, Fragment, Matcher, MissingValueError, Value};

/// Which offered token a [`Positional`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionalMode {
    /// Claim the first token offered and leave the rest to other matchers.
    #[default]
    First,
    /// Claim every token offered and keep the last one.
    Last,
}

/// A trigger-less parameter matched by position.
///
/// Only tokens that no earlier-registered matcher claimed reach it.
///
/// # Examples
///
/// ```
/// use argmatch_core::{Claim, Matcher, Positional, Value};
///
/// let tokens: Vec<String> = vec!["a".into(), "b".into()];
///
/// let mut first = Positional::first();
/// assert_eq!(first.offer(&tokens, 0).unwrap(), Claim::Single);
/// assert_eq!(first.offer(&tokens, 1).unwrap(), Claim::NotClaimed);
/// assert_eq!(first.state(), Value::from("a"));
///
/// let mut last = Positional::last();
/// last.offer(&tokens, 0).unwrap();
/// last.offer(&tokens, 1).unwrap();
/// assert_eq!(last.state(), Value::from("b"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Positional {
    mode: PositionalMode,
    default: Option<String>,
    value: Option<String>,
}

impl Positional {
    pub fn new(mode: PositionalMode) -> Self {
        Self {
            mode,
            default: None,
            value: None,
        }
    }

    pub fn first() -> Self {
        Self::new(PositionalMode::First)
    }

    pub fn last() -> Self {
        Self::new(PositionalMode::Last)
    }

    /// Sets the state reported when no token is claimed.
    ///
    /// The default does not count as a claim: a [`PositionalMode::First`]
    /// matcher with a default still takes the first token offered to it, and
    /// stays [`is_empty`](Matcher::is_empty) until it does.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn mode(&self) -> PositionalMode {
        self.mode
    }
}

impl Matcher for Positional {
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
        if self.value.is_some() && self.mode == PositionalMode::First {
            return Ok(Claim::NotClaimed);
        }
        self.value = Some(tokens[cursor].clone());
        Ok(Claim::Single)
    }

    fn state(&self) -> Value {
        self.value.clone().or_else(|| self.default.clone()).into()
    }

    fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    fn describe_help(&self, name: &str) -> Fragment {
        format!("<{name}>").into()
    }

    fn reset(&mut self) {
        self.value = None;
    }
}

/// Accumulates every token offered to it.
#[derive(Debug, Clone, Default)]
pub struct CatchAll {
    values: Vec<String>,
}

impl CatchAll {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Matcher for CatchAll {
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
        self.values.push(tokens[cursor].clone());
        Ok(Claim::Single)
    }

    fn state(&self) -> Value {
        Value::list(self.values.iter().cloned())
    }

    fn describe_help(&self, name: &str) -> Fragment {
        format!("<{name}> ...").into()
    }

    fn reset(&mut self) {
        self.values.clear();
    }
}
