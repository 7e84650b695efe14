//! Declarative parser definitions.
//!
//! A [`ParserDefinition`] describes a whole registry as data, so a parser
//! can be configured from a YAML or JSON file instead of builder calls.
//!
//! # Example YAML
//!
//! ```yaml
//! program: test-parser
//! abstract: A test program
//! help: true
//! missing_arguments:
//!   message: Missing mandatory argument
//!   exit_code: 2
//!   raise: false
//! parameters:
//!   - kind: switch
//!     triggers: ["-s"]
//!     dest: switch
//!     description: A switch
//!   - kind: option
//!     triggers: ["-n", "--number"]
//!     type: number
//!   - kind: tuple
//!     triggers: ["-p"]
//!     arity: 3
//!     names: [x, y, z]
//!   - kind: positional
//!     name: param
//!     mandatory: true
//!   - kind: catch_all
//!     name: files
//! ```

use std::io::{BufReader, BufWriter};
use std::path::Path;

use argmatch_core::PositionalMode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DefinitionError;
use crate::manager::ArgumentsManager;
use crate::parameter::{Description, ParameterOptions};
use crate::policy::MissingArgumentPolicy;
use crate::transform::ValueType;

/// Fields shared by every parameter kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonSpec {
    /// Destination name; inferred when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dest: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Description>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub mandatory: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub hidden: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

impl CommonSpec {
    fn options(&self) -> ParameterOptions {
        let mut options = ParameterOptions::new().required(self.mandatory);
        if let Some(dest) = &self.dest {
            options = options.dest(dest.clone());
        }
        if let Some(description) = &self.description {
            options = options.description(description.clone());
        }
        if self.hidden {
            options = options.hidden();
        }
        if let Some(value_type) = self.value_type {
            options = options.value_type(value_type);
        }
        if let Some(default) = &self.default {
            options = options.default_value(default.clone());
        }
        options
    }
}

/// One parameter of a definition, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterSpec {
    Switch {
        triggers: Vec<String>,
        #[serde(flatten)]
        common: CommonSpec,
    },
    #[serde(rename = "option")]
    SingleOption {
        triggers: Vec<String>,
        #[serde(flatten)]
        common: CommonSpec,
    },
    MultiOption {
        triggers: Vec<String>,
        #[serde(flatten)]
        common: CommonSpec,
    },
    Tuple {
        triggers: Vec<String>,
        arity: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        names: Option<Vec<String>>,
        #[serde(flatten)]
        common: CommonSpec,
    },
    MultiTuple {
        triggers: Vec<String>,
        arity: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        names: Option<Vec<String>>,
        #[serde(flatten)]
        common: CommonSpec,
    },
    Positional {
        name: String,
        /// Keep the last token offered instead of the first.
        #[serde(default, skip_serializing_if = "std::ops::Not::not")]
        last: bool,
        #[serde(flatten)]
        common: CommonSpec,
    },
    CatchAll {
        name: String,
        #[serde(flatten)]
        common: CommonSpec,
    },
    Properties {
        name: String,
        #[serde(flatten)]
        common: CommonSpec,
    },
    Property {
        property: String,
        #[serde(flatten)]
        common: CommonSpec,
    },
    OutputMode {
        name: String,
        #[serde(flatten)]
        common: CommonSpec,
    },
}

impl ParameterSpec {
    /// The `kind` tag of this entry.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Switch { .. } => "switch",
            Self::SingleOption { .. } => "option",
            Self::MultiOption { .. } => "multi_option",
            Self::Tuple { .. } => "tuple",
            Self::MultiTuple { .. } => "multi_tuple",
            Self::Positional { .. } => "positional",
            Self::CatchAll { .. } => "catch_all",
            Self::Properties { .. } => "properties",
            Self::Property { .. } => "property",
            Self::OutputMode { .. } => "output_mode",
        }
    }

    pub fn common(&self) -> &CommonSpec {
        match self {
            Self::Switch { common, .. }
            | Self::SingleOption { common, .. }
            | Self::MultiOption { common, .. }
            | Self::Tuple { common, .. }
            | Self::MultiTuple { common, .. }
            | Self::Positional { common, .. }
            | Self::CatchAll { common, .. }
            | Self::Properties { common, .. }
            | Self::Property { common, .. }
            | Self::OutputMode { common, .. } => common,
        }
    }

    /// Only single-value kinds (`option`, `positional`, `property`) accept
    /// a `default`.
    pub fn accepts_default(&self) -> bool {
        matches!(
            self,
            Self::SingleOption { .. } | Self::Positional { .. } | Self::Property { .. }
        )
    }

    fn register(&self, manager: &mut ArgumentsManager) {
        match self {
            Self::Switch { triggers, common } => {
                manager.add_switch(triggers.clone(), common.options());
            }
            Self::SingleOption { triggers, common } => {
                manager.add_option(triggers.clone(), common.options());
            }
            Self::MultiOption { triggers, common } => {
                manager.add_multi_option(triggers.clone(), common.options());
            }
            Self::Tuple {
                triggers,
                arity,
                names,
                common,
            } => {
                manager.add_tuple_option(triggers.clone(), *arity, names.clone(), common.options());
            }
            Self::MultiTuple {
                triggers,
                arity,
                names,
                common,
            } => {
                manager.add_multi_tuple_option(
                    triggers.clone(),
                    *arity,
                    names.clone(),
                    common.options(),
                );
            }
            Self::Positional { name, last, common } => {
                let mode = if *last {
                    PositionalMode::Last
                } else {
                    PositionalMode::First
                };
                manager.add_positional(name.clone(), mode, common.options());
            }
            Self::CatchAll { name, common } => {
                manager.add_multi_parameter(name.clone(), common.options());
            }
            Self::Properties { name, common } => {
                let dest = common.dest.clone().unwrap_or_else(|| name.clone());
                manager.add_matcher(dest, argmatch_core::KeyValueCatchAll::new(), common.options());
            }
            Self::Property { property, common } => {
                manager.add_property(property.clone(), common.options());
            }
            Self::OutputMode { name, common } => {
                let dest = common.dest.clone().unwrap_or_else(|| name.clone());
                manager.add_output_mode(dest, common.options());
            }
        }
    }
}

/// A complete parser configuration.
///
/// # Examples
///
/// ```
/// use argmatch_manager::ParserDefinition;
///
/// let definition = ParserDefinition::from_yaml_str(
///     "program: demo\nparameters:\n  - kind: switch\n    triggers: [-v, --verbose]\n",
/// )
/// .unwrap();
///
/// let mut manager = definition.build().unwrap();
/// let result = manager.parse(["--verbose"]).unwrap();
/// assert!(result.flag("verbose"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserDefinition {
    /// Program name used in usage and help text.
    pub program: String,
    /// Summary shown under the usage line.
    #[serde(default, rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    /// Registers `-h`/`--help`.
    #[serde(default)]
    pub help: bool,
    #[serde(default)]
    pub missing_arguments: MissingArgumentPolicy,
    #[serde(default)]
    pub parameters: Vec<ParameterSpec>,
}

impl ParserDefinition {
    /// Loads a definition from a YAML or JSON file, chosen by extension
    /// (`.json` is JSON, anything else is YAML).
    ///
    /// # Errors
    ///
    /// Returns [`IoError`](DefinitionError::IoError) if the file cannot be
    /// read, or a parse error for the selected format.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let path = path.as_ref();
        let reader = BufReader::new(std::fs::File::open(path)?);
        let definition = if is_json(path) {
            serde_json::from_reader(reader)?
        } else {
            serde_yaml::from_reader(reader)?
        };
        debug!(path = %path.display(), "Loaded parser definition");
        Ok(definition)
    }

    /// Saves the definition, in JSON for `.json` paths and YAML otherwise.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DefinitionError> {
        let path = path.as_ref();
        let writer = BufWriter::new(std::fs::File::create(path)?);
        if is_json(path) {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_yaml::to_writer(writer, self)?;
        }
        Ok(())
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, DefinitionError> {
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Builds a manager with default hooks.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedDefault`](DefinitionError::UnsupportedDefault)
    /// when a `default` is given for a kind that cannot use it, and
    /// [`Invalid`](DefinitionError::Invalid) when the resulting registry
    /// fails validation.
    pub fn build(&self) -> Result<ArgumentsManager, DefinitionError> {
        if let Some(spec) = self
            .parameters
            .iter()
            .find(|spec| spec.common().default.is_some() && !spec.accepts_default())
        {
            return Err(DefinitionError::UnsupportedDefault(spec.kind().to_string()));
        }

        let mut manager = ArgumentsManager::new(self.program.clone());
        for spec in &self.parameters {
            spec.register(&mut manager);
        }
        if let Some(text) = &self.abstract_text {
            manager.set_abstract(text.clone());
        }
        if self.help {
            manager.enable_help_parameter(true);
        }
        manager.set_missing_argument_policy(self.missing_arguments.clone());

        let errors = manager.validate();
        if !errors.is_empty() {
            return Err(DefinitionError::Invalid(errors));
        }
        Ok(manager)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
