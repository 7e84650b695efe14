use crate::matcher::trailing_values;
use crate::{Claim, Fragment, Matcher, MissingValueError, Triggers, Value};

/// Looks for a trigger and saves the token that follows it (`-f filename`).
///
/// Repeated occurrences overwrite the value. Until the trigger is seen the
/// state is the configured default, or `null`.
///
/// # Examples
///
/// ```
/// use argmatch_core::{Claim, Matcher, SingleValue, Value};
///
/// let mut opt = SingleValue::new(["-f", "--file"]);
/// let tokens: Vec<String> = vec!["-f".into(), "x.txt".into()];
/// assert_eq!(opt.offer(&tokens, 0).unwrap(), Claim::Span(1));
/// assert_eq!(opt.state(), Value::from("x.txt"));
/// ```
#[derive(Debug, Clone)]
pub struct SingleValue {
    triggers: Triggers,
    default: Option<String>,
    value: Option<String>,
}

impl SingleValue {
    pub fn new(triggers: impl Into<Triggers>) -> Self {
        Self {
            triggers: triggers.into(),
            default: None,
            value: None,
        }
    }

    /// Sets the state reported when the trigger never appears.
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }
}

impl Matcher for SingleValue {
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
        if !self.triggers.matches(&tokens[cursor]) {
            return Ok(Claim::NotClaimed);
        }
        let values = trailing_values(tokens, cursor, 1)?;
        self.value = Some(values[0].clone());
        Ok(Claim::Span(1))
    }

    fn state(&self) -> Value {
        self.value.clone().or_else(|| self.default.clone()).into()
    }

    fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    fn describe_help(&self, name: &str) -> Fragment {
        format!("{} <{name}>", self.triggers).into()
    }

    fn triggers(&self) -> Option<&Triggers> {
        Some(&self.triggers)
    }

    fn reset(&mut self) {
        self.value = None;
    }
}

/// Like [`SingleValue`], but keeps every value in order of appearance
/// (`-m a -m b`).
#[derive(Debug, Clone)]
pub struct MultiValue {
    triggers: Triggers,
    values: Vec<String>,
}

impl MultiValue {
    pub fn new(triggers: impl Into<Triggers>) -> Self {
        Self {
            triggers: triggers.into(),
            values: Vec::new(),
        }
    }
}

impl Matcher for MultiValue {
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
        if !self.triggers.matches(&tokens[cursor]) {
            return Ok(Claim::NotClaimed);
        }
        let values = trailing_values(tokens, cursor, 1)?;
        self.values.push(values[0].clone());
        Ok(Claim::Span(1))
    }

    fn state(&self) -> Value {
        Value::list(self.values.iter().cloned())
    }

    fn describe_help(&self, name: &str) -> Fragment {
        format!("{} <{name}>", self.triggers).into()
    }

    fn describe_usage(&self, name: &str) -> Fragment {
        format!("({} <{name}>)...", self.triggers).into()
    }

    fn triggers(&self) -> Option<&Triggers> {
        Some(&self.triggers)
    }

    fn reset(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matchers::tokens;

    #[test]
    fn test_single_value_takes_next_token() {
        let mut opt = SingleValue::new("-f");
        let t = tokens(&["-f", "x.txt"]);
        assert_eq!(opt.offer(&t, 0).unwrap(), Claim::Span(1));
        assert_eq!(opt.state(), Value::from("x.txt"));
    }

    #[test]
    fn test_single_value_default_when_absent() {
        let opt = SingleValue::new("-f");
        assert_eq!(opt.state(), Value::Null);
        assert!(opt.is_empty());

        let opt = SingleValue::new("-f").with_default("out.txt");
        assert_eq!(opt.state(), Value::from("out.txt"));
        assert!(opt.is_empty(), "a default does not satisfy a mandatory option");
    }

    #[test]
    fn test_single_value_last_occurrence_wins() {
        let mut opt = SingleValue::new("-f");
        let t = tokens(&["-f", "a", "-f", "b"]);
        opt.offer(&t, 0).unwrap();
        opt.offer(&t, 2).unwrap();
        assert_eq!(opt.state(), Value::from("b"));
    }

    #[test]
    fn test_single_value_missing_value() {
        let mut opt = SingleValue::new(["-f", "--file"]);
        let t = tokens(&["--file"]);
        let err = opt.offer(&t, 0).unwrap_err();
        assert_eq!(err, MissingValueError::new("--file", 1, 0));
    }

    #[test]
    fn test_single_value_state_is_idempotent() {
        let mut opt = SingleValue::new("-f");
        opt.offer(&tokens(&["-f", "x"]), 0).unwrap();
        assert_eq!(opt.state(), opt.state());
    }

    #[test]
    fn test_multi_value_preserves_order() {
        let mut opt = MultiValue::new("-m");
        let t = tokens(&["-m", "a", "-m", "b"]);
        assert_eq!(opt.offer(&t, 0).unwrap(), Claim::Span(1));
        assert_eq!(opt.offer(&t, 2).unwrap(), Claim::Span(1));
        assert_eq!(opt.state(), Value::list(["a", "b"]));
    }

    #[test]
    fn test_multi_value_empty_and_reset() {
        let mut opt = MultiValue::new("-m");
        assert!(opt.is_empty());
        opt.offer(&tokens(&["-m", "a"]), 0).unwrap();
        assert!(!opt.is_empty());
        opt.reset();
        assert_eq!(opt.state(), Value::List(Vec::new()));
    }

    #[test]
    fn test_describe_fragments() {
        let single = SingleValue::new(["-o", "--option"]);
        assert_eq!(single.describe_usage("option"), Fragment::from("-o/--option <option>"));

        let multi = MultiValue::new("-m");
        assert_eq!(multi.describe_help("m"), Fragment::from("-m <m>"));
        assert_eq!(multi.describe_usage("m"), Fragment::from("(-m <m>)..."));
    }
}
