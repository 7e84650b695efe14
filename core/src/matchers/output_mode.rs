use std::collections::BTreeMap;

use crate::matcher::trailing_values;
use crate::{Claim, Fragment, Matcher, MissingValueError, Value};

const FILE_TRIGGER: &str = "-o";
const STRING_TRIGGER: &str = "--stringified-output";
const LOG_TRIGGER: &str = "--log-output";

/// Selects where a program writes its output.
///
/// Consumes `-o <file>` (state `file`), and the mutually exclusive
/// `--stringified-output` / `--log-output` switches (state `stdout` set to
/// `"string"` or `"log"`). It renders as two independent clauses and
/// brackets them itself.
///
/// # Examples
///
/// ```
/// use argmatch_core::{Fragment, Matcher, OutputMode, Value};
///
/// let mut out = OutputMode::new();
/// let tokens: Vec<String> = vec!["--log-output".into(), "-o".into(), "out.txt".into()];
/// out.offer(&tokens, 0).unwrap();
/// out.offer(&tokens, 1).unwrap();
/// assert_eq!(out.state().get("stdout"), Some(&Value::from("log")));
/// assert_eq!(out.state().get("file"), Some(&Value::from("out.txt")));
/// assert!(out.optionality_is_self_rendered());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OutputMode {
    default_file: Option<String>,
    default_stdout: Option<String>,
    file: Option<String>,
    stdout: Option<String>,
}

impl OutputMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults(stdout: Option<&str>, file: Option<&str>) -> Self {
        Self {
            default_file: file.map(String::from),
            default_stdout: stdout.map(String::from),
            ..Self::default()
        }
    }
}

impl Matcher for OutputMode {
    fn offer(&mut self, tokens: &[String], cursor: usize) -> Result<Claim, MissingValueError> {
        match tokens[cursor].as_str() {
            FILE_TRIGGER => {
                let values = trailing_values(tokens, cursor, 1)?;
                self.file = Some(values[0].clone());
                Ok(Claim::Span(1))
            }
            STRING_TRIGGER => {
                self.stdout = Some("string".to_string());
                Ok(Claim::Single)
            }
            LOG_TRIGGER => {
                self.stdout = Some("log".to_string());
                Ok(Claim::Single)
            }
            _ => Ok(Claim::NotClaimed),
        }
    }

    fn state(&self) -> Value {
        let mut map = BTreeMap::new();
        let file = self.file.clone().or_else(|| self.default_file.clone());
        let stdout = self.stdout.clone().or_else(|| self.default_stdout.clone());
        map.insert("file".to_string(), Value::from(file));
        map.insert("stdout".to_string(), Value::from(stdout));
        Value::Map(map)
    }

    fn is_empty(&self) -> bool {
        self.file.is_none() && self.stdout.is_none()
    }

    fn describe_help(&self, _name: &str) -> Fragment {
        vec![
            format!("{FILE_TRIGGER} <file>"),
            format!("{STRING_TRIGGER} | {LOG_TRIGGER}"),
        ]
        .into()
    }

    fn describe_usage(&self, _name: &str) -> Fragment {
        vec![
            format!("[{FILE_TRIGGER} <file>]"),
            format!("[{STRING_TRIGGER} | {LOG_TRIGGER}]"),
        ]
        .into()
    }

    fn optionality_is_self_rendered(&self) -> bool {
        true
    }

    fn reset(&mut self) {
        self.file = None;
        self.stdout = None;
    }
}
