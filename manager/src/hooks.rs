//! Injected side effects.
//!
//! The manager never writes to the console or exits the process itself.
//! Diagnostics, help output, and termination are routed through [`Hooks`],
//! whose defaults only log through `tracing`.

use std::fmt;

use tracing::{error, info, warn};

use crate::transform::TransformError;

/// Something worth reporting that happened during a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Mandatory parameters were never claimed.
    MissingParameters {
        message: String,
        usages: Vec<String>,
    },
    /// A transform failed; the raw value was kept.
    TransformFailed {
        destination: String,
        error: TransformError,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingParameters { message, usages } => {
                write!(f, "{message} : {}", usages.join(", "))
            }
            Self::TransformFailed { destination, error } => {
                write!(f, "could not convert value of {destination}: {error}")
            }
        }
    }
}

type DiagnosticSink = Box<dyn Fn(&Diagnostic)>;
type HelpSink = Box<dyn Fn(&str)>;
type Terminator = Box<dyn Fn(i32)>;

/// Callbacks for diagnostics, help output, and process termination.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use argmatch_manager::Hooks;
///
/// let codes = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&codes);
/// let hooks = Hooks::default().on_terminate(move |code| sink.borrow_mut().push(code));
/// hooks.terminate(2);
/// assert_eq!(*codes.borrow(), vec![2]);
/// ```
pub struct Hooks {
    diagnostics: DiagnosticSink,
    help: HelpSink,
    terminator: Option<Terminator>,
}

impl Hooks {
    /// Replaces the diagnostic sink.
    pub fn on_diagnostic(mut self, sink: impl Fn(&Diagnostic) + 'static) -> Self {
        self.diagnostics = Box::new(sink);
        self
    }

    /// Replaces the sink that receives rendered help text.
    pub fn on_help(mut self, sink: impl Fn(&str) + 'static) -> Self {
        self.help = Box::new(sink);
        self
    }

    /// Installs the termination callback. It is expected to halt the
    /// process, but the manager does not rely on it.
    pub fn on_terminate(mut self, terminator: impl Fn(i32) + 'static) -> Self {
        self.terminator = Some(Box::new(terminator));
        self
    }

    pub fn report(&self, diagnostic: &Diagnostic) {
        (self.diagnostics)(diagnostic);
    }

    pub fn show_help(&self, text: &str) {
        (self.help)(text);
    }

    /// Invokes the terminator, or logs that none is installed.
    pub fn terminate(&self, code: i32) {
        match &self.terminator {
            Some(terminator) => terminator(code),
            None => warn!(code, "Termination requested but no terminator is installed"),
        }
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self {
            diagnostics: Box::new(|diagnostic| match diagnostic {
                Diagnostic::MissingParameters { .. } => error!("{diagnostic}"),
                Diagnostic::TransformFailed { .. } => warn!("{diagnostic}"),
            }),
            help: Box::new(|text| info!("{text}")),
            terminator: None,
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("terminator", &self.terminator.is_some())
            .finish_non_exhaustive()
    }
}
