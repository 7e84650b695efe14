//! Parameter registry, single-pass scan, and usage rendering.
//!
//! An [`ArgumentsManager`] holds an ordered list of registered parameters,
//! each pairing a [`Matcher`](argmatch_core::Matcher) with a destination
//! name and metadata. [`parse`](ArgumentsManager::parse) runs one
//! left-to-right scan in which every token is offered to the matchers in
//! registration order, then assembles a [`ParseResult`] keyed by
//! destination.
//!
//! # Main entry points
//!
//! - [`ArgumentsManager`]: builder-style registration, parsing, and
//!   [`make_usage`](ArgumentsManager::make_usage) /
//!   [`make_help`](ArgumentsManager::make_help).
//! - [`ParserDefinition`]: the same registry described as YAML or JSON.
//! - [`MissingArgumentPolicy`] and [`Hooks`]: what happens when mandatory
//!   parameters are missing, and where diagnostics, help text, and
//!   termination requests go.
//!
//! # Example
//!
//! ```
//! use argmatch_manager::{ArgumentsManager, ParameterOptions, ParseError};
//!
//! let mut manager = ArgumentsManager::new("copy");
//! manager
//!     .add_switch(["-f", "--force"], ParameterOptions::new().description("Overwrite"))
//!     .add_parameter("source", ParameterOptions::new().mandatory())
//!     .add_parameter("dest", ParameterOptions::new().mandatory());
//!
//! let result = manager.parse(["a.txt", "--force", "b.txt"]).unwrap();
//! assert!(result.flag("force"));
//! assert_eq!(result.get_str("source"), Some("a.txt"));
//! assert_eq!(result.get_str("dest"), Some("b.txt"));
//!
//! // The default policy raises when mandatory parameters are missing.
//! let err = manager.parse(["a.txt"]).unwrap_err();
//! assert!(matches!(err, ParseError::MissingParameters(ref e) if e.missing[0].destination == "dest"));
//! ```

mod definition;
mod error;
mod hooks;
mod manager;
mod parameter;
mod policy;
mod render;
mod result;
mod scan;
mod transform;

pub use definition::{CommonSpec, ParameterSpec, ParserDefinition};
pub use error::{DefinitionError, MissingParameter, MissingParameterError, ParseError, Result};
pub use hooks::{Diagnostic, Hooks};
pub use manager::{ArgumentsManager, HELP_DESTINATION};
pub use parameter::{Description, Parameter, ParameterOptions};
pub use policy::{DEFAULT_MISSING_MESSAGE, MissingArgumentPolicy};
pub use render::UNDOCUMENTED;
pub use result::ParseResult;
pub use transform::{Transform, TransformError, ValueType};
