//! Matcher contract and built-in matchers for declarative argument parsing.
//!
//! This crate defines the unit of matching used by `argmatch-manager`:
//!
//! - [`Matcher`]: the per-token claim protocol every parameter variant
//!   implements: [`offer`](Matcher::offer) a token, read back the
//!   accumulated [`Value`], describe the expected syntax as a [`Fragment`].
//! - [`Claim`]: the outcome of an offer: not claimed, claimed alone, or
//!   claimed together with a fixed number of following tokens.
//! - [`Triggers`]: literal tokens a matcher watches for, with
//!   destination-name inference.
//! - Built-in variants: [`Switch`], [`SingleValue`], [`MultiValue`],
//!   [`FixedArityTuple`], [`MultiFixedArityTuple`], [`Positional`],
//!   [`CatchAll`], [`KeyValueCatchAll`], [`KeyValueNamed`], [`OutputMode`].
//!
//! Validation ([`validate_triggers`], [`validate_destinations`]) catches
//! configuration mistakes before a scan.
//!
//! # Example
//!
//! ```
//! use argmatch_core::*;
//!
//! let tokens: Vec<String> = ["-n", "12", "input.txt"].iter().map(|s| s.to_string()).collect();
//! let mut number = SingleValue::new(["-n", "--number"]);
//! let mut input = Positional::first();
//!
//! assert_eq!(number.offer(&tokens, 0).unwrap(), Claim::Span(1));
//! assert_eq!(input.offer(&tokens, 2).unwrap(), Claim::Single);
//!
//! assert_eq!(number.state(), Value::from("12"));
//! assert_eq!(input.state(), Value::from("input.txt"));
//! assert_eq!(number.triggers().and_then(Triggers::destination).as_deref(), Some("number"));
//! ```

mod error;
mod matcher;
mod matchers;
mod triggers;
mod validate;
mod value;

pub use error::MissingValueError;
pub use matcher::{Claim, Fragment, Matcher, property_assignment, trailing_values};
pub use matchers::*;
pub use triggers::Triggers;
pub use validate::{ValidationError, validate_destinations, validate_triggers};
pub use value::Value;
