//! Error types for schema compilation and option matching.
//!
//! Parsing is deliberately forgiving: malformed or unexpected tokens degrade to
//! positional arguments rather than failing. Only a handful of conditions are
//! reported as errors.
//!
//! ## Error Categories
//!
//! - **Definition errors**: the same alias is declared twice in one schema
//! - **Invalid patterns**: a parameter's `=pattern` is not a valid regular expression
//! - **Duplicate values**: an option was repeated under [`Duplicates::Error`](crate::Duplicates::Error)
//! - **Unknown options**: an unrecognized switch was seen while
//!   [`UnknownOptions`](crate::UnknownOptions) rejection is enabled
//!
//! ## Examples
//!
//! ```rust
//! use get_options::{parse, Error, Schema};
//!
//! let schema = Schema::new().option("-a, --all", "").option("-A, --all", "");
//! let result = parse(["-a"], &schema);
//!
//! match result {
//!     Err(Error::Definition { alias }) => assert_eq!(alias, "--all"),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

use crate::registry::OptionDef;
use crate::Value;
use std::fmt;
use thiserror::Error;

/// Represents every failure the parser can report.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// An alias was declared by more than one option.
    #[error("Option \"{alias}\" already defined")]
    Definition { alias: String },

    /// A parameter pattern could not be compiled.
    #[error("Invalid pattern for parameter \"{param}\": /{pattern}/: {source}")]
    InvalidPattern {
        param: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// An option was given more than once under the `error` duplicate policy.
    #[error("Attempting to reassign option \"{name}\" with value(s) {value}")]
    DuplicateValue {
        name: String,
        option: Box<OptionDef>,
        value: Value,
    },

    /// An unrecognized switch was encountered while unknown options are rejected.
    #[error("{message}")]
    UnknownOption { token: String, message: String },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a definition error for an alias, given with its leading dashes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::Error;
    ///
    /// let err = Error::definition("-v");
    /// assert_eq!(err.to_string(), "Option \"-v\" already defined");
    /// ```
    pub fn definition(alias: &str) -> Self {
        Error::Definition {
            alias: alias.to_string(),
        }
    }

    /// Creates an unknown-option error with the default message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::Error;
    ///
    /// let err = Error::unknown_option("--frobnicate");
    /// assert_eq!(err.to_string(), "Unknown option: \"--frobnicate\"");
    /// ```
    pub fn unknown_option(token: &str) -> Self {
        Error::UnknownOption {
            token: token.to_string(),
            message: format!("Unknown option: \"{}\"", token),
        }
    }

    /// Creates an unknown-option error from a message template.
    ///
    /// The first `%s` in `template` is replaced with the offending token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::Error;
    ///
    /// let err = Error::unknown_option_with("Weird option: `%s`", "--foo");
    /// assert_eq!(err.to_string(), "Weird option: `--foo`");
    /// ```
    pub fn unknown_option_with(template: &str, token: &str) -> Self {
        Error::UnknownOption {
            token: token.to_string(),
            message: template.replacen("%s", token, 1),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the option descriptor attached to a duplicate-value error.
    #[must_use]
    pub fn affected_option(&self) -> Option<&OptionDef> {
        match self {
            Error::DuplicateValue { option, .. } => Some(option.as_ref()),
            _ => None,
        }
    }

    /// Returns the rejected value attached to a duplicate-value error.
    #[must_use]
    pub fn affected_value(&self) -> Option<&Value> {
        match self {
            Error::DuplicateValue { value, .. } => Some(value),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
