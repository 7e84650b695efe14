//! What happens when mandatory parameters are missing after a scan.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MissingParameter, MissingParameterError};
use crate::hooks::{Diagnostic, Hooks};

/// Default diagnostic message for missing mandatory parameters.
pub const DEFAULT_MISSING_MESSAGE: &str = "Missing mandatory argument";

/// Missing-argument behavior.
///
/// The three behaviors are independent and fire in a fixed order: log the
/// diagnostic, invoke the terminator, raise [`MissingParameterError`].
///
/// # Examples
///
/// ```
/// use argmatch_manager::MissingArgumentPolicy;
///
/// let policy = MissingArgumentPolicy::default();
/// assert!(policy.raise);
/// assert_eq!(policy.exit_code, None);
///
/// let quiet = MissingArgumentPolicy::new(None, Some(2), false);
/// assert!(quiet.message.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissingArgumentPolicy {
    /// Diagnostic message; `None` disables logging.
    pub message: Option<String>,
    /// Code passed to the terminator; `None` disables termination.
    pub exit_code: Option<i32>,
    /// Whether to return [`MissingParameterError`].
    pub raise: bool,
}

impl MissingArgumentPolicy {
    pub fn new(message: Option<&str>, exit_code: Option<i32>, raise: bool) -> Self {
        Self {
            message: message.map(String::from),
            exit_code,
            raise,
        }
    }

    /// Applies the policy to a non-empty list of missing parameters.
    ///
    /// Returns the error to raise, if raising is enabled.
    pub(crate) fn apply(
        &self,
        missing: &[MissingParameter],
        hooks: &Hooks,
    ) -> Option<MissingParameterError> {
        debug!(count = missing.len(), "Applying missing-argument policy");

        if let Some(message) = &self.message {
            hooks.report(&Diagnostic::MissingParameters {
                message: message.clone(),
                usages: missing.iter().map(|p| p.usage.join(" ")).collect(),
            });
        }

        if let Some(code) = self.exit_code {
            hooks.terminate(code);
        }

        self.raise.then(|| MissingParameterError {
            missing: missing.to_vec(),
        })
    }
}

impl Default for MissingArgumentPolicy {
    fn default() -> Self {
        Self {
            message: Some(DEFAULT_MISSING_MESSAGE.to_string()),
            exit_code: None,
            raise: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn missing() -> Vec<MissingParameter> {
        vec![MissingParameter {
            destination: "param".into(),
            usage: vec!["<param>".into()],
            description: None,
        }]
    }

    /// Records every hook invocation in order.
    fn recording_hooks() -> (Hooks, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let diag_log = Rc::clone(&log);
        let exit_log = Rc::clone(&log);
        let hooks = Hooks::default()
            .on_diagnostic(move |d| diag_log.borrow_mut().push(d.to_string()))
            .on_terminate(move |code| exit_log.borrow_mut().push(format!("exit {code}")));
        (hooks, log)
    }

    #[test]
    fn test_all_behaviors_fire_in_order() {
        let (hooks, log) = recording_hooks();
        let policy = MissingArgumentPolicy::new(Some("Missing"), Some(3), true);

        let err = policy.apply(&missing(), &hooks);
        assert_eq!(*log.borrow(), vec!["Missing : <param>", "exit 3"]);
        assert_eq!(err.map(|e| e.missing.len()), Some(1));
    }

    #[test]
    fn test_silent_policy() {
        let (hooks, log) = recording_hooks();
        let policy = MissingArgumentPolicy::new(None, None, false);

        assert!(policy.apply(&missing(), &hooks).is_none());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_policy_deserializes_with_defaults() {
        let policy: MissingArgumentPolicy = serde_yaml::from_str("exit_code: 2").unwrap();
        assert_eq!(policy.exit_code, Some(2));
        assert!(policy.raise);
        assert_eq!(policy.message.as_deref(), Some(DEFAULT_MISSING_MESSAGE));
    }
}
