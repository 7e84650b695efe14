//! The parameter registry and the orchestration of a parse.

use argmatch_core::{
    CatchAll, FixedArityTuple, KeyValueCatchAll, KeyValueNamed, Matcher, MultiFixedArityTuple,
    MultiValue, OutputMode, Positional, PositionalMode, SingleValue, Switch, Triggers,
    ValidationError, validate_destinations,
};
use tracing::debug;

use crate::error::{MissingParameter, ParseError, Result};
use crate::hooks::{Diagnostic, Hooks};
use crate::parameter::{Parameter, ParameterOptions};
use crate::policy::MissingArgumentPolicy;
use crate::render;
use crate::result::ParseResult;
use crate::scan::scan;

/// Destination of the parameter registered by
/// [`enable_help_parameter`](ArgumentsManager::enable_help_parameter).
pub const HELP_DESTINATION: &str = "help";
const HELP_TRIGGERS: [&str; 2] = ["-h", "--help"];
const HELP_DESCRIPTION: &str = "Print this help message";

/// An ordered registry of parameters and the single-pass parser over them.
///
/// Registration order is priority order: when two matchers would claim the
/// same token, the earlier-registered one gets it. Every parse resets all
/// matchers first, so a manager can parse any number of token streams.
///
/// # Examples
///
/// ```
/// use argmatch_manager::{ArgumentsManager, ParameterOptions, ValueType};
///
/// let mut manager = ArgumentsManager::new("test-parser");
/// manager
///     .add_switch("-s", ParameterOptions::new().dest("switch"))
///     .add_option(["-n", "--number"], ParameterOptions::new().value_type(ValueType::Integer))
///     .add_parameter("param", ParameterOptions::new().description("A parameter"))
///     .enable_property_arguments("props");
///
/// let result = manager.parse(["-n", "12", "first", "-s", "mode=fast"]).unwrap();
/// assert_eq!(result.get_str("param"), Some("first"));
/// assert!(result.flag("switch"));
/// assert_eq!(result.get("number").and_then(|v| v.as_i64()), Some(12));
/// assert_eq!(
///     result.get("props").and_then(|v| v.get("mode")).and_then(|v| v.as_str()),
///     Some("fast")
/// );
/// assert_eq!(
///     manager.make_usage("test-parser"),
///     "Usage : test-parser [-s] [-n/--number <number>] [<param>] [key=value ...]"
/// );
/// ```
#[derive(Debug)]
pub struct ArgumentsManager {
    program: String,
    abstract_text: Option<String>,
    parameters: Vec<Parameter>,
    policy: MissingArgumentPolicy,
    hooks: Hooks,
    help_exit: Option<bool>,
}

impl ArgumentsManager {
    /// Creates an empty registry. `program` is the name used for the help
    /// text shown by the help parameter.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            abstract_text: None,
            parameters: Vec::new(),
            policy: MissingArgumentPolicy::default(),
            hooks: Hooks::default(),
            help_exit: None,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Renames the program shown in help text triggered during a parse.
    pub fn set_program(&mut self, program: impl Into<String>) -> &mut Self {
        self.program = program.into();
        self
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn policy(&self) -> &MissingArgumentPolicy {
        &self.policy
    }

    /// Registers any matcher under an explicit destination.
    ///
    /// This is the extension point for custom matchers; `options.dest` is
    /// ignored in favor of `dest`.
    pub fn add_matcher(
        &mut self,
        dest: impl Into<String>,
        matcher: impl Matcher + 'static,
        options: ParameterOptions,
    ) -> &mut Self {
        let dest = dest.into();
        debug!(destination = %dest, "Registering parameter");
        self.parameters
            .push(Parameter::new(Box::new(matcher), dest, options));
        self
    }

    /// Registers a trigger-based matcher, inferring the destination from
    /// its triggers unless one is given.
    fn add_triggered(
        &mut self,
        triggers: &Triggers,
        matcher: impl Matcher + 'static,
        options: ParameterOptions,
    ) -> &mut Self {
        let dest = options
            .dest
            .clone()
            .or_else(|| triggers.destination())
            .unwrap_or_default();
        self.add_matcher(dest, matcher, options)
    }

    /// Registers a switch (`-d`): `true` once any trigger is seen.
    pub fn add_switch(&mut self, triggers: impl Into<Triggers>, options: ParameterOptions) -> &mut Self {
        let triggers = triggers.into();
        let matcher = Switch::new(triggers.clone());
        self.add_triggered(&triggers, matcher, options)
    }

    /// Registers an option that takes the next token as its value.
    pub fn add_option(&mut self, triggers: impl Into<Triggers>, options: ParameterOptions) -> &mut Self {
        let triggers = triggers.into();
        let mut matcher = SingleValue::new(triggers.clone());
        if let Some(default) = &options.default {
            matcher = matcher.with_default(default.clone());
        }
        self.add_triggered(&triggers, matcher, options)
    }

    /// Registers an option that may repeat; every value is kept.
    pub fn add_multi_option(&mut self, triggers: impl Into<Triggers>, options: ParameterOptions) -> &mut Self {
        let triggers = triggers.into();
        let matcher = MultiValue::new(triggers.clone());
        self.add_triggered(&triggers, matcher, options)
    }

    /// Registers an option taking exactly `arity` values. `names` label the
    /// members in usage text.
    pub fn add_tuple_option(
        &mut self,
        triggers: impl Into<Triggers>,
        arity: usize,
        names: Option<Vec<String>>,
        options: ParameterOptions,
    ) -> &mut Self {
        let triggers = triggers.into();
        let mut matcher = FixedArityTuple::new(triggers.clone(), arity);
        if let Some(names) = names {
            matcher = matcher.with_names(names);
        }
        self.add_triggered(&triggers, matcher, options)
    }

    /// Like [`add_tuple_option`](Self::add_tuple_option), but every
    /// occurrence is kept.
    pub fn add_multi_tuple_option(
        &mut self,
        triggers: impl Into<Triggers>,
        arity: usize,
        names: Option<Vec<String>>,
        options: ParameterOptions,
    ) -> &mut Self {
        let triggers = triggers.into();
        let mut matcher = MultiFixedArityTuple::new(triggers.clone(), arity);
        if let Some(names) = names {
            matcher = matcher.with_names(names);
        }
        self.add_triggered(&triggers, matcher, options)
    }

    /// Registers a positional parameter that takes the first token offered.
    pub fn add_parameter(&mut self, name: impl Into<String>, options: ParameterOptions) -> &mut Self {
        self.add_positional(name, PositionalMode::First, options)
    }

    /// Registers a positional parameter with an explicit mode.
    pub fn add_positional(
        &mut self,
        name: impl Into<String>,
        mode: PositionalMode,
        options: ParameterOptions,
    ) -> &mut Self {
        let mut matcher = Positional::new(mode);
        if let Some(default) = &options.default {
            matcher = matcher.with_default(default.clone());
        }
        let dest = options.dest.clone().unwrap_or_else(|| name.into());
        self.add_matcher(dest, matcher, options)
    }

    /// Registers a catch-all collecting every token offered to it.
    pub fn add_multi_parameter(&mut self, name: impl Into<String>, options: ParameterOptions) -> &mut Self {
        let dest = options.dest.clone().unwrap_or_else(|| name.into());
        self.add_matcher(dest, CatchAll::new(), options)
    }

    /// Registers a matcher for one named property (`name=value`).
    pub fn add_property(&mut self, property: impl Into<String>, options: ParameterOptions) -> &mut Self {
        let property = property.into();
        let mut matcher = KeyValueNamed::new(property.clone());
        if let Some(default) = &options.default {
            matcher = matcher.with_default(default.clone());
        }
        let dest = options.dest.clone().unwrap_or(property);
        self.add_matcher(dest, matcher, options)
    }

    /// Collects every `key=value` token into a map under `dest`.
    pub fn enable_property_arguments(&mut self, dest: impl Into<String>) -> &mut Self {
        self.add_matcher(dest, KeyValueCatchAll::new(), ParameterOptions::new())
    }

    /// Registers the `-o <file>` / `--stringified-output` / `--log-output`
    /// output-mode matcher.
    pub fn add_output_mode(&mut self, dest: impl Into<String>, options: ParameterOptions) -> &mut Self {
        self.add_matcher(dest, OutputMode::new(), options)
    }

    /// Registers `-h`/`--help` ahead of every other parameter, so a
    /// positional or catch-all can never swallow it.
    ///
    /// When it is seen, the help text is sent to the help hook, missing
    /// parameters are not reported, and the terminator is invoked with code 0
    /// if `exit` is set.
    ///
    /// Calling it again only updates `exit`.
    pub fn enable_help_parameter(&mut self, exit: bool) -> &mut Self {
        if self.help_exit.replace(exit).is_some() {
            return self;
        }
        let options = ParameterOptions::new()
            .dest(HELP_DESTINATION)
            .description(HELP_DESCRIPTION);
        let help = Parameter::new(
            Box::new(Switch::new(HELP_TRIGGERS)),
            HELP_DESTINATION.to_string(),
            options,
        );
        self.parameters.insert(0, help);
        self
    }

    /// Sets the program summary shown under the usage line in help.
    pub fn set_abstract(&mut self, text: impl Into<String>) -> &mut Self {
        self.abstract_text = Some(text.into());
        self
    }

    /// Configures what happens when mandatory parameters are missing.
    pub fn set_missing_argument_behavior(
        &mut self,
        message: Option<&str>,
        exit_code: Option<i32>,
        raise: bool,
    ) -> &mut Self {
        self.policy = MissingArgumentPolicy::new(message, exit_code, raise);
        self
    }

    pub fn set_missing_argument_policy(&mut self, policy: MissingArgumentPolicy) -> &mut Self {
        self.policy = policy;
        self
    }

    /// Replaces the diagnostic, help, and termination hooks.
    pub fn set_hooks(&mut self, hooks: Hooks) -> &mut Self {
        self.hooks = hooks;
        self
    }

    /// Checks matcher configurations and destination uniqueness.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors: Vec<ValidationError> = self
            .parameters
            .iter()
            .flat_map(|p| p.matcher().validate())
            .collect();
        if errors.is_empty() {
            errors.extend(validate_destinations(
                self.parameters.iter().map(Parameter::destination),
            ));
        }
        errors
    }

    /// Renders the usage line.
    pub fn make_usage(&self, program: &str) -> String {
        render::usage_line(program, &self.parameters)
    }

    /// Renders the help text: usage line, abstract, one line per clause.
    pub fn make_help(&self, program: &str) -> String {
        render::help_text(program, self.abstract_text.as_deref(), &self.parameters)
    }

    /// Parses a token stream.
    ///
    /// # Errors
    ///
    /// - [`ParseError::InvalidRegistry`] if [`validate`](Self::validate)
    ///   reports problems.
    /// - [`ParseError::MissingValue`] if a matcher needs trailing values the
    ///   stream does not have.
    /// - [`ParseError::MissingParameters`] if mandatory parameters are
    ///   missing and the policy raises.
    pub fn parse<I, S>(&mut self, tokens: I) -> Result<ParseResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();

        let errors = self.validate();
        if !errors.is_empty() {
            return Err(ParseError::InvalidRegistry(errors));
        }

        for parameter in &mut self.parameters {
            parameter.matcher.reset();
        }

        let report = scan(&tokens, &mut self.parameters)?;

        let mut result = ParseResult {
            unclaimed: report.unclaimed.into_iter().map(|(_, token)| token).collect(),
            ..ParseResult::default()
        };

        for parameter in &self.parameters {
            if parameter.is_missing() {
                result.missing.push(MissingParameter::from_parameter(parameter));
            }
            let (value, error) = parameter.transformed_state();
            if let Some(error) = error {
                self.hooks.report(&Diagnostic::TransformFailed {
                    destination: parameter.destination().to_string(),
                    error,
                });
            }
            result.values.insert(parameter.destination().to_string(), value);
        }

        if let Some(exit) = self.help_exit {
            if result.flag(HELP_DESTINATION) {
                result.help_requested = true;
                result.missing.clear();
                self.hooks.show_help(&self.make_help(&self.program));
                if exit {
                    self.hooks.terminate(0);
                }
                return Ok(result);
            }
        }

        if !result.missing.is_empty() {
            if let Some(err) = self.policy.apply(&result.missing, &self.hooks) {
                return Err(err.into());
            }
        }

        debug!(
            values = result.values.len(),
            unclaimed = result.unclaimed.len(),
            "Parse complete"
        );
        Ok(result)
    }
}
