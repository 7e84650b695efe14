use crate::matcher::trailing_values;
use crate::validate::{ValidationError, validate_triggers};
use crate::{Claim, Fragment, Matcher, MissingValueError, Triggers, Value};

/// Shared configuration of the tuple matchers.
#[derive(Debug, Clone)]
struct TupleShape {
    triggers: Triggers,
    arity: usize,
    names: Option<Vec<String>>,
}

impl TupleShape {
    fn members(&self, name: &str) -> String {
        match &self.names {
            Some(names) => names.iter().map(|n| format!("<{n}>")).collect::<Vec<_>>().join(" "),
            None => (0..self.arity)
                .map(|i| format!("<{name}{i}>"))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    fn describe(&self, name: &str) -> String {
        format!("{} {}", self.triggers, self.members(name))
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = validate_triggers(&self.triggers);
        if !errors.is_empty() {
            return errors;
        }
        if self.arity == 0 {
            errors.push(ValidationError::ZeroArity(self.triggers.to_string()));
            return errors;
        }
        if let Some(names) = &self.names {
            if names.len() != self.arity {
                errors.push(ValidationError::ArityNameMismatch {
                    trigger: self.triggers.to_string(),
                    arity: self.arity,
                    names: names.len(),
                });
            }
        }
        errors
    }

    /// Consumes exactly `arity` tokens after a matching trigger.
    fn take<'a>(
        &self,
        tokens: &'a [String],
        cursor: usize,
    ) -> Result<Option<&'a [String]>, MissingValueError> {
        if !self.triggers.matches(&tokens[cursor]) {
            return Ok(None);
        }
        trailing_values(tokens, cursor, self.arity).map(Some)
    }
}

/// Looks for a trigger and saves exactly `arity` following tokens
/// (`-p A B C`). Tokens past the arity are left for other matchers.
///
/// # Examples
///
/// ```
/// use argmatch_core::{Claim, FixedArityTuple, Matcher, Value};
///
/// let mut point = FixedArityTuple::new("-p", 3);
/// let tokens: Vec<String> = ["-p", "A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
/// assert_eq!(point.offer(&tokens, 0).unwrap(), Claim::Span(3));
/// assert_eq!(point.state(), Value::list(["A", "B", "C"]));
/// ```
#[derive(Debug, Clone)]
pub struct FixedArityTuple {
    shape: TupleShape,
    values: Option<Vec<String>>,
}

impl FixedArityTuple {
    pub fn new(triggers: impl Into<Triggers>, arity: usize) -> Self {
        Self {
            shape: TupleShape {
                triggers: triggers.into(),
                arity,
                names: None,
            },
            values: None,
        }
    }

    /// Names each member in usage text instead of `<name0> <name1> ...`.
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shape.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn arity(&self) -> usize {
        self.shape.arity
    }
}

impl Matcher for FixedArityTuple {
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
        match self.shape.take(tokens, cursor)? {
            Some(values) => {
                self.values = Some(values.to_vec());
                Ok(Claim::Span(self.shape.arity))
            }
            None => Ok(Claim::NotClaimed),
        }
    }

    fn state(&self) -> Value {
        Value::list(self.values.iter().flatten().cloned())
    }

    fn is_empty(&self) -> bool {
        self.values.is_none()
    }

    fn describe_help(&self, name: &str) -> Fragment {
        self.shape.describe(name).into()
    }

    fn triggers(&self) -> Option<&Triggers> {
        Some(&self.shape.triggers)
    }

    fn validate(&self) -> Vec<ValidationError> {
        self.shape.validate()
    }

    fn reset(&mut self) {
        self.values = None;
    }
}

/// Like [`FixedArityTuple`], but keeps every occurrence as its own tuple.
#[derive(Debug, Clone)]
pub struct MultiFixedArityTuple {
    shape: TupleShape,
    values: Vec<Vec<String>>,
}

impl MultiFixedArityTuple {
    pub fn new(triggers: impl Into<Triggers>, arity: usize) -> Self {
        Self {
            shape: TupleShape {
                triggers: triggers.into(),
                arity,
                names: None,
            },
            values: Vec::new(),
        }
    }

    /// Names each member in usage text instead of `<name0> <name1> ...`.
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.shape.names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn arity(&self) -> usize {
        self.shape.arity
    }
}

impl Matcher for MultiFixedArityTuple {
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
        match self.shape.take(tokens, cursor)? {
            Some(values) => {
                self.values.push(values.to_vec());
                Ok(Claim::Span(self.shape.arity))
            }
            None => Ok(Claim::NotClaimed),
        }
    }

    fn state(&self) -> Value {
        Value::List(
            self.values
                .iter()
                .map(|tuple| Value::list(tuple.iter().cloned()))
                .collect(),
        )
    }

    fn describe_help(&self, name: &str) -> Fragment {
        self.shape.describe(name).into()
    }

    fn describe_usage(&self, name: &str) -> Fragment {
        format!("({})...", self.shape.describe(name)).into()
    }

    fn triggers(&self) -> Option<&Triggers> {
        Some(&self.shape.triggers)
    }

    fn validate(&self) -> Vec<ValidationError> {
        self.shape.validate()
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
    fn test_tuple_consumes_exactly_arity() {
        let mut point = FixedArityTuple::new("-p", 3);
        let t = tokens(&["-p", "A", "B", "C", "D"]);
        let claim = point.offer(&t, 0).unwrap();
        assert_eq!(claim, Claim::Span(3));
        assert_eq!(claim.width(), 4);
        assert_eq!(t[claim.width()], "D");
        assert_eq!(point.state(), Value::list(["A", "B", "C"]));
    }

    #[test]
    fn test_tuple_short_stream_fails() {
        let mut point = FixedArityTuple::new("-p", 3);
        let t = tokens(&["-p", "A"]);
        let err = point.offer(&t, 0).unwrap_err();
        assert_eq!(err, MissingValueError::new("-p", 3, 1));
        assert!(point.is_empty());
    }

    #[test]
    fn test_tuple_empty_until_claimed() {
        let point = FixedArityTuple::new("-p", 2);
        assert!(point.is_empty());
        assert_eq!(point.state(), Value::List(Vec::new()));
    }

    #[test]
    fn test_tuple_default_member_names() {
        let point = FixedArityTuple::new("-p", 3);
        assert_eq!(point.describe_help("p"), Fragment::from("-p <p0> <p1> <p2>"));

        let named = FixedArityTuple::new(["-s", "--size"], 2).with_names(["w", "h"]);
        assert_eq!(named.describe_help("size"), Fragment::from("-s/--size <w> <h>"));
    }

    #[test]
    fn test_tuple_validation() {
        assert_eq!(
            FixedArityTuple::new("-p", 0).validate(),
            vec![ValidationError::ZeroArity("-p".into())]
        );
        assert_eq!(
            FixedArityTuple::new("-p", 2).with_names(["x"]).validate(),
            vec![ValidationError::ArityNameMismatch {
                trigger: "-p".into(),
                arity: 2,
                names: 1
            }]
        );
        assert!(FixedArityTuple::new("-p", 2).validate().is_empty());
    }

    #[test]
    fn test_multi_tuple_accumulates() {
        let mut edges = MultiFixedArityTuple::new("-e", 2);
        let t = tokens(&["-e", "a", "b", "-e", "c", "d"]);
        assert_eq!(edges.offer(&t, 0).unwrap(), Claim::Span(2));
        assert_eq!(edges.offer(&t, 3).unwrap(), Claim::Span(2));
        assert_eq!(
            edges.state(),
            Value::List(vec![Value::list(["a", "b"]), Value::list(["c", "d"])])
        );
        assert_eq!(edges.describe_usage("e"), Fragment::from("(-e <e0> <e1>)..."));

        edges.reset();
        assert!(edges.is_empty());
    }
}
