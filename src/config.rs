//! Run-time configuration for option matching.
//!
//! This module provides types that adjust how tokens are matched against a schema:
//!
//! - [`Config`]: main configuration struct
//! - [`AliasPropagation`]: which alias names receive an option's value
//! - [`Duplicates`]: what happens when an option is given more than once
//! - [`UnknownOptions`]: whether unrecognized switches are errors
//! - [`Terminator`]: tokens that stop option parsing
//!
//! ## Examples
//!
//! ```rust
//! use get_options::{parse_with_config, AliasPropagation, Config, Duplicates, Schema};
//!
//! let schema = Schema::new().option("-I, --include", "<dir>");
//! let config = Config::new()
//!     .with_alias_propagation(AliasPropagation::FirstOnly)
//!     .with_duplicates(Duplicates::Append);
//!
//! let parsed = parse_with_config(["-I", "src", "-I", "lib"], &schema, &config).unwrap();
//! assert_eq!(
//!     parsed.options.get("include").and_then(|v| v.as_strings()),
//!     Some(vec!["src", "lib"])
//! );
//! ```

use crate::Error;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Controls which names an option's value is written under.
///
/// # Examples
///
/// ```rust
/// use get_options::AliasPropagation;
///
/// assert_eq!(AliasPropagation::default(), AliasPropagation::All);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AliasPropagation {
    /// Every alias the option recognizes.
    #[default]
    All,
    /// Only the alias that was typed on the command line.
    MatchedOnly,
    /// Only the first long name, or the first short name if there is none.
    FirstOnly,
}

/// Policy applied when an option receives a value more than once.
///
/// # Examples
///
/// ```rust
/// use get_options::Duplicates;
///
/// let policy: Duplicates = "stack-values".parse().unwrap();
/// assert_eq!(policy, Duplicates::StackValues);
/// assert_eq!(policy.as_str(), "stack-values");
/// assert!("merge".parse::<Duplicates>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Duplicates {
    /// Keep the first value and silently discard later ones.
    UseFirst,
    /// Overwrite earlier values with later ones.
    #[default]
    UseLast,
    /// Keep the first value; later occurrences become positional arguments.
    LimitFirst,
    /// Keep the last value; earlier occurrences become positional arguments.
    LimitLast,
    /// Fail with [`Error::DuplicateValue`].
    Error,
    /// Concatenate every occurrence's values into one flat list.
    Append,
    /// Keep each occurrence's values as a separate group.
    Stack,
    /// Group values by parameter position across occurrences.
    StackValues,
}

impl Duplicates {
    /// Every policy, in declaration order.
    pub const ALL: [Duplicates; 8] = [
        Duplicates::UseFirst,
        Duplicates::UseLast,
        Duplicates::LimitFirst,
        Duplicates::LimitLast,
        Duplicates::Error,
        Duplicates::Append,
        Duplicates::Stack,
        Duplicates::StackValues,
    ];

    /// Returns the kebab-case name of this policy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Duplicates::UseFirst => "use-first",
            Duplicates::UseLast => "use-last",
            Duplicates::LimitFirst => "limit-first",
            Duplicates::LimitLast => "limit-last",
            Duplicates::Error => "error",
            Duplicates::Append => "append",
            Duplicates::Stack => "stack",
            Duplicates::StackValues => "stack-values",
        }
    }
}

impl fmt::Display for Duplicates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Duplicates {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Duplicates::ALL
            .into_iter()
            .find(|policy| policy.as_str() == s)
            .ok_or_else(|| Error::custom(format!("unknown duplicate policy \"{}\"", s)))
    }
}

/// Builds the error raised for an unrecognized switch.
pub type UnknownOptionFactory = Arc<dyn Fn(&str) -> Error + Send + Sync + 'static>;

/// How tokens that look like options but match no alias are handled.
///
/// A token "looks like an option" when it is a dash followed by at least one
/// more character.
#[derive(Clone, Default)]
pub enum UnknownOptions {
    /// Pass them through to `argv`.
    #[default]
    Allow,
    /// Fail with the default `Unknown option: "<token>"` message.
    Reject,
    /// Fail with a message template; the first `%s` is replaced by the token.
    Message(String),
    /// Fail with whatever error the factory builds from the token.
    With(UnknownOptionFactory),
    /// Fail with this exact error.
    Raise(Box<Error>),
}

impl UnknownOptions {
    /// Creates a policy from an error-building closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::{parse_with_config, Config, Error, Schema, UnknownOptions};
    ///
    /// let config = Config::new().with_unknown_options(UnknownOptions::with(|token| {
    ///     Error::custom(format!("no such switch {}", token.trim_start_matches('-')))
    /// }));
    /// let err = parse_with_config(["--nope"], &Schema::new(), &config).unwrap_err();
    /// assert_eq!(err.to_string(), "Error: no such switch nope");
    /// ```
    pub fn with<F>(factory: F) -> Self
    where
        F: Fn(&str) -> Error + Send + Sync + 'static,
    {
        UnknownOptions::With(Arc::new(factory))
    }

    /// Returns `true` unless unknown options are passed through.
    #[must_use]
    pub fn rejects(&self) -> bool {
        !matches!(self, UnknownOptions::Allow)
    }

    /// Builds the error to raise for `token`, or `None` when unknown options are allowed.
    #[must_use]
    pub fn error_for(&self, token: &str) -> Option<Error> {
        match self {
            UnknownOptions::Allow => None,
            UnknownOptions::Reject => Some(Error::unknown_option(token)),
            UnknownOptions::Message(template) => Some(Error::unknown_option_with(template, token)),
            UnknownOptions::With(factory) => Some(factory(token)),
            UnknownOptions::Raise(error) => Some((**error).clone()),
        }
    }
}

impl fmt::Debug for UnknownOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownOptions::Allow => f.write_str("Allow"),
            UnknownOptions::Reject => f.write_str("Reject"),
            UnknownOptions::Message(template) => f.debug_tuple("Message").field(template).finish(),
            UnknownOptions::With(_) => f.write_str("With(<factory>)"),
            UnknownOptions::Raise(error) => f.debug_tuple("Raise").field(error).finish(),
        }
    }
}

impl From<bool> for UnknownOptions {
    fn from(reject: bool) -> Self {
        if reject {
            UnknownOptions::Reject
        } else {
            UnknownOptions::Allow
        }
    }
}

impl From<&str> for UnknownOptions {
    fn from(template: &str) -> Self {
        UnknownOptions::Message(template.to_string())
    }
}

impl From<Error> for UnknownOptions {
    fn from(error: Error) -> Self {
        UnknownOptions::Raise(Box::new(error))
    }
}

/// A token, or token pattern, that ends option parsing.
///
/// Terminators are only consulted for tokens that are not known aliases. The
/// terminator itself is dropped and every token after it is passed to `argv`
/// verbatim.
///
/// # Examples
///
/// ```rust
/// use get_options::Terminator;
/// use regex::Regex;
///
/// assert!(Terminator::from("--").matches("--"));
/// assert!(!Terminator::from("").matches(""));
/// assert!(Terminator::from(Regex::new("^STOP").unwrap()).matches("STOP!"));
/// ```
#[derive(Clone, Debug)]
pub enum Terminator {
    Exact(String),
    Pattern(Regex),
}

impl Terminator {
    /// Returns `true` if `token` triggers this terminator.
    #[must_use]
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Terminator::Exact(s) => !s.is_empty() && s == token,
            Terminator::Pattern(re) => re.is_match(token),
        }
    }
}

impl From<&str> for Terminator {
    fn from(value: &str) -> Self {
        Terminator::Exact(value.to_string())
    }
}

impl From<String> for Terminator {
    fn from(value: String) -> Self {
        Terminator::Exact(value)
    }
}

impl From<Regex> for Terminator {
    fn from(value: Regex) -> Self {
        Terminator::Pattern(value)
    }
}

/// Configuration options for option matching.
///
/// # Examples
///
/// ```rust
/// use get_options::{Config, Duplicates};
///
/// // Defaults: propagate to all aliases, camelCase keys, bundling and
/// // `--name=value` expansion on, options and positionals may interleave.
/// let config = Config::new();
/// assert!(config.camel_case && config.bundling && config.equals && config.mixed_order);
///
/// let config = Config::new()
///     .with_camel_case(false)
///     .with_terminator("--")
///     .with_duplicates(Duplicates::Stack);
/// assert_eq!(config.terminators.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    pub alias_propagation: AliasPropagation,
    pub camel_case: bool,
    pub bundling: bool,
    pub mixed_order: bool,
    pub equals: bool,
    pub unknown_options: UnknownOptions,
    pub terminators: Vec<Terminator>,
    pub duplicates: Duplicates,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            alias_propagation: AliasPropagation::default(),
            camel_case: true,
            bundling: true,
            mixed_order: true,
            equals: true,
            unknown_options: UnknownOptions::default(),
            terminators: Vec::new(),
            duplicates: Duplicates::default(),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets which alias names receive a matched option's value.
    #[must_use]
    pub fn with_alias_propagation(mut self, propagation: AliasPropagation) -> Self {
        self.alias_propagation = propagation;
        self
    }

    /// Enables or disables kebab-case to camelCase conversion of result keys.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::{parse_with_config, Config, Schema};
    ///
    /// let schema = Schema::new().option("--dry-run", "");
    /// let config = Config::new().with_camel_case(false);
    /// let parsed = parse_with_config(["--dry-run"], &schema, &config).unwrap();
    /// assert!(parsed.options.contains_key("dry-run"));
    /// ```
    #[must_use]
    pub fn with_camel_case(mut self, enabled: bool) -> Self {
        self.camel_case = enabled;
        self
    }

    /// Enables or disables expansion of bundled short options (`-abc`).
    #[must_use]
    pub fn with_bundling(mut self, enabled: bool) -> Self {
        self.bundling = enabled;
        self
    }

    /// Allows or forbids options after the first positional argument.
    ///
    /// When disabled, the first stray token and everything after it is positional.
    #[must_use]
    pub fn with_mixed_order(mut self, enabled: bool) -> Self {
        self.mixed_order = enabled;
        self
    }

    /// Enables or disables `--name=value` expansion.
    #[must_use]
    pub fn with_equals(mut self, enabled: bool) -> Self {
        self.equals = enabled;
        self
    }

    /// Sets how unrecognized switches are handled.
    #[must_use]
    pub fn with_unknown_options(mut self, policy: impl Into<UnknownOptions>) -> Self {
        self.unknown_options = policy.into();
        self
    }

    /// Adds a terminator. May be called repeatedly; any match terminates.
    #[must_use]
    pub fn with_terminator(mut self, terminator: impl Into<Terminator>) -> Self {
        self.terminators.push(terminator.into());
        self
    }

    /// Sets the duplicate-value policy.
    #[must_use]
    pub fn with_duplicates(mut self, duplicates: Duplicates) -> Self {
        self.duplicates = duplicates;
        self
    }

    /// Returns `true` if `token` matches any configured terminator.
    #[must_use]
    pub fn is_terminator(&self, token: &str) -> bool {
        self.terminators.iter().any(|t| t.matches(token))
    }
}
