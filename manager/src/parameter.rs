//! Parameter registration records.

use argmatch_core::{Fragment, Matcher, Value};
use serde::{Deserialize, Serialize};

use crate::transform::{Transform, TransformError, ValueType};

/// Help text for a parameter.
///
/// A list pairs with the clauses of a multi-fragment matcher; a single
/// string is repeated for every clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Description {
    Single(String),
    Multi(Vec<String>),
}

impl Description {
    /// Returns the description for the clause at `index`.
    pub fn for_clause(&self, index: usize) -> Option<&str> {
        match self {
            Self::Single(text) => Some(text),
            Self::Multi(parts) => parts.get(index).map(String::as_str),
        }
    }
}

impl From<&str> for Description {
    fn from(text: &str) -> Self {
        Self::Single(text.to_string())
    }
}

impl From<String> for Description {
    fn from(text: String) -> Self {
        Self::Single(text)
    }
}

impl From<Vec<String>> for Description {
    fn from(parts: Vec<String>) -> Self {
        Self::Multi(parts)
    }
}

impl From<Vec<&str>> for Description {
    fn from(parts: Vec<&str>) -> Self {
        Self::Multi(parts.into_iter().map(String::from).collect())
    }
}

/// Options accepted by the registration methods of
/// [`ArgumentsManager`](crate::ArgumentsManager).
///
/// Parameters are optional unless marked [`mandatory`](Self::mandatory).
///
/// # Examples
///
/// ```
/// use argmatch_manager::{ParameterOptions, ValueType};
///
/// let opts = ParameterOptions::new()
///     .dest("count")
///     .description("How many times")
///     .value_type(ValueType::Integer)
///     .mandatory();
/// assert!(!opts.is_optional());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParameterOptions {
    pub(crate) dest: Option<String>,
    pub(crate) description: Option<Description>,
    pub(crate) mandatory: bool,
    pub(crate) hidden: bool,
    pub(crate) transform: Option<Transform>,
    pub(crate) default: Option<String>,
}

impl ParameterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit destination name instead of inferring one.
    pub fn dest(mut self, dest: impl Into<String>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn description(mut self, description: impl Into<Description>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the parameter as mandatory.
    pub fn mandatory(mut self) -> Self {
        self.mandatory = true;
        self
    }

    /// Sets whether the parameter is mandatory.
    pub fn required(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Omits the parameter from usage and help text. It is still parsed.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Converts the final value to the given type.
    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.transform = Some(Transform::Type(value_type));
        self
    }

    pub fn transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Default value for value-bearing matchers.
    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn is_optional(&self) -> bool {
        !self.mandatory
    }
}

/// A registered parameter: a matcher plus the metadata that describes
/// where and how its state is reported.
#[derive(Debug)]
pub struct Parameter {
    pub(crate) matcher: Box<dyn Matcher>,
    pub(crate) destination: String,
    pub(crate) optional: bool,
    pub(crate) description: Option<Description>,
    pub(crate) hidden: bool,
    pub(crate) transform: Option<Transform>,
}

impl Parameter {
    pub(crate) fn new(matcher: Box<dyn Matcher>, destination: String, options: ParameterOptions) -> Self {
        Self {
            matcher,
            destination,
            optional: !options.mandatory,
            description: options.description,
            hidden: options.hidden,
            transform: options.transform,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn matcher(&self) -> &dyn Matcher {
        self.matcher.as_ref()
    }

    /// Usage-line fragment, before optionality wrapping.
    pub fn usage(&self) -> Fragment {
        self.matcher.describe_usage(&self.destination)
    }

    /// Help-line fragment.
    pub fn help(&self) -> Fragment {
        self.matcher.describe_help(&self.destination)
    }

    /// Wraps each usage clause in `[...]` unless the parameter is mandatory
    /// or its matcher brackets itself.
    pub fn wrapped_usage(&self) -> Vec<String> {
        let wrap = self.optional && !self.matcher.optionality_is_self_rendered();
        self.usage()
            .into_parts()
            .into_iter()
            .map(|part| if wrap { format!("[{part}]") } else { part })
            .collect()
    }

    /// Mandatory parameters whose matcher is still in its empty state.
    pub(crate) fn is_missing(&self) -> bool {
        !self.optional && self.matcher.is_empty()
    }

    pub(crate) fn transformed_state(&self) -> (Value, Option<TransformError>) {
        let state = self.matcher.state();
        match &self.transform {
            Some(transform) => match transform.apply(&state) {
                Ok(value) => (value, None),
                Err(err) => (state, Some(err)),
            },
            None => (state, None),
        }
    }
}
