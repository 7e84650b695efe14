//! Trigger sets and destination-name inference.

use std::fmt;

/// One or more literal tokens a matcher watches for (e.g. `-n`, `--number`).
///
/// # Examples
///
/// ```
/// use argmatch_core::Triggers;
///
/// let t = Triggers::from(["-n", "--number"]);
/// assert!(t.matches("--number"));
/// assert!(!t.matches("-x"));
/// assert_eq!(t.to_string(), "-n/--number");
/// assert_eq!(t.destination().as_deref(), Some("number"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Triggers(Vec<String>);

impl Triggers {
    pub fn new(triggers: Vec<String>) -> Self {
        Self(triggers)
    }

    /// Checks if `token` is one of the triggers.
    pub fn matches(&self, token: &str) -> bool {
        self.0.iter().any(|t| t == token)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Infers a destination name from the triggers.
    ///
    /// Leading dashes are stripped from each trigger. A long trigger (`--x`)
    /// or a bare word takes precedence over short triggers regardless of
    /// position, and the last such trigger wins. Without any, the last
    /// trigger wins. Returns `None` for an empty set.
    ///
    /// # Examples
    ///
    /// ```
    /// use argmatch_core::Triggers;
    ///
    /// assert_eq!(Triggers::from(["--number", "-n"]).destination().as_deref(), Some("number"));
    /// assert_eq!(Triggers::from(["-a", "-b"]).destination().as_deref(), Some("b"));
    /// assert_eq!(Triggers::from("verbose").destination().as_deref(), Some("verbose"));
    /// ```
    pub fn destination(&self) -> Option<String> {
        let mut dest = None;
        let mut found_long = false;
        for trigger in &self.0 {
            let candidate = trigger.trim_start_matches('-');
            let is_short = trigger.starts_with('-') && !trigger.starts_with("--");
            if !is_short {
                dest = Some(candidate.to_string());
                found_long = true;
            } else if !found_long {
                dest = Some(candidate.to_string());
            }
        }
        dest
    }
}

impl fmt::Display for Triggers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

impl From<&str> for Triggers {
    fn from(trigger: &str) -> Self {
        Self(vec![trigger.to_string()])
    }
}

impl From<String> for Triggers {
    fn from(trigger: String) -> Self {
        Self(vec![trigger])
    }
}

impl From<Vec<String>> for Triggers {
    fn from(triggers: Vec<String>) -> Self {
        Self(triggers)
    }
}

impl From<&[&str]> for Triggers {
    fn from(triggers: &[&str]) -> Self {
        Self(triggers.iter().map(|t| t.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Triggers {
    fn from(triggers: [&str; N]) -> Self {
        Self(triggers.iter().map(|t| t.to_string()).collect())
    }
}
