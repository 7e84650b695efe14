//! Built-in matcher variants.
//!
//! | Matcher | Claims | State |
//! |---------|--------|-------|
//! | [`Switch`] | a trigger | `true` once seen, else `false` |
//! | [`SingleValue`] | a trigger and the next token | last value, or the default |
//! | [`MultiValue`] | a trigger and the next token, repeatedly | list of values |
//! | [`FixedArityTuple`] | a trigger and the next `n` tokens | list of `n` values |
//! | [`MultiFixedArityTuple`] | the same, repeatedly | list of `n`-value lists |
//! | [`Positional`] | the first (or every) token offered | a single value |
//! | [`CatchAll`] | every token offered | list of tokens |
//! | [`KeyValueCatchAll`] | every `key=value` token | key/value map |
//! | [`KeyValueNamed`] | `name=value` for one property | the value |
//! | [`OutputMode`] | `-o <file>`, `--stringified-output`, `--log-output` | `{file, stdout}` map |

mod option;
mod output_mode;
mod positional;
mod property;
mod switch;
mod tuple;

pub use option::{MultiValue, SingleValue};
pub use output_mode::OutputMode;
pub use positional::{CatchAll, Positional, PositionalMode};
pub use property::{KeyValueCatchAll, KeyValueNamed};
pub use switch::Switch;
pub use tuple::{FixedArityTuple, MultiFixedArityTuple};

#[cfg(test)]
pub(crate) fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
