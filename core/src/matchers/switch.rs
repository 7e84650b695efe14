use crate::{Claim, Fragment, Matcher, MissingValueError, Triggers, Value};

/// Looks for one of its triggers and records whether it was seen.
///
/// # Examples
///
/// ```
/// use argmatch_core::{Claim, Matcher, Switch, Value};
///
/// let mut sw = Switch::new("-d");
/// let tokens = vec!["-d".to_string()];
/// assert_eq!(sw.offer(&tokens, 0).unwrap(), Claim::Single);
/// assert_eq!(sw.state(), Value::Bool(true));
/// ```
#[derive(Debug, Clone)]
pub struct Switch {
    triggers: Triggers,
    seen: bool,
}

impl Switch {
    pub fn new(triggers: impl Into<Triggers>) -> Self {
        Self {
            triggers: triggers.into(),
            seen: false,
        }
    }
}

impl Matcher for Switch {
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
        if self.triggers.matches(&tokens[cursor]) {
            self.seen = true;
            return Ok(Claim::Single);
        }
        Ok(Claim::NotClaimed)
    }

    fn state(&self) -> Value {
        Value::Bool(self.seen)
    }

    fn describe_help(&self, _name: &str) -> Fragment {
        self.triggers.to_string().into()
    }

    fn triggers(&self) -> Option<&Triggers> {
        Some(&self.triggers)
    }

    fn reset(&mut self) {
        self.seen = false;
    }
}
