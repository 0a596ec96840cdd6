//! # get_options
//!
//! A getopt-style command-line parser driven by a declarative option schema.
//!
//! ## What does it do?
//!
//! Given a list of tokens (or a single command string) and a description of the
//! options a program accepts, `get_options` splits the input into named option
//! values and positional arguments. There is no help generation and no type
//! coercion: values come back as strings, flags as `true`.
//!
//! ## Key Features
//!
//! - **Declarative schemas**: `"-n, --number-of-lines" => "<number=\\d+>"`, getopt
//!   shorthand (`"ho:v"`), or no schema at all
//! - **Bundling**: `-hvn2` expands to `-h -v -n 2` using each parameter's pattern
//! - **Equals assignment**: `--width=80` is the same as `--width 80`
//! - **Duplicate policies**: keep the first or last occurrence, append, stack,
//!   transpose, push extras back to `argv`, or fail
//! - **Serde output**: results serialize straight to JSON-shaped data
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! get-options = "0.1"
//! ```
//!
//! ```rust
//! use get_options::{parse, schema, Value};
//!
//! let schema = schema! {
//!     "-h, --help" => "",
//!     "-v, --version" => "",
//!     "-n, --number-of-lines" => "<number=\\d+>",
//! };
//!
//! let parsed = parse(["-hvn2", "file.txt"], &schema).unwrap();
//!
//! assert_eq!(parsed.options.get("help"), Some(&Value::Flag));
//! assert_eq!(parsed.options.get("h"), Some(&Value::Flag));
//! assert_eq!(parsed.options.get("numberOfLines"), Some(&Value::from("2")));
//! assert_eq!(parsed.argv, vec!["file.txt"]);
//! ```
//!
//! ### Parsing a command string
//!
//! ```rust
//! use get_options::{parse_str, Schema, Value};
//!
//! let schema = Schema::new().option("--foo", "<value>");
//! let parsed = parse_str(r#"--foo "bar baz" qux"#, &schema).unwrap();
//!
//! assert_eq!(parsed.options.get("foo"), Some(&Value::from("bar baz")));
//! assert_eq!(parsed.argv, vec!["qux"]);
//! ```
//!
//! ### Serializing results
//!
//! ```rust
//! use get_options::{parse_with_config, Config, Duplicates, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new().option("-s, --set-size", "<width> <height>");
//! let config = Config::new().with_duplicates(Duplicates::Stack);
//! let parsed = parse_with_config(
//!     ["-s", "640", "480", "alpha", "-s", "1024", "768"],
//!     &schema,
//!     &config,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     serde_json::to_value(&parsed).unwrap(),
//!     json!({
//!         "options": {
//!             "s": [["640", "480"], ["1024", "768"]],
//!             "setSize": [["640", "480"], ["1024", "768"]]
//!         },
//!         "argv": ["alpha"]
//!     })
//! );
//! ```
//!
//! ## Pipeline
//!
//! 1. [`tokenize`] a command string, if one was given
//! 2. [`Registry::compile`] the schema
//! 3. [`Registry::expand`] bundles and `--name=value` tokens
//! 4. [`Registry::parse`] the expanded tokens into a [`ParsedArgs`]
//!
//! Callers parsing many inputs with one schema can compile a [`Registry`] once
//! and call [`Registry::parse`] directly.
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events: `debug` when a
//! schema is compiled or a duplicate policy fires, `trace` for each rewrite and
//! match. No subscriber is installed.
//!
//! ## Syntax reference
//!
//! See the [`syntax`] module for the full schema and command-line grammar.
//!
//! ## Examples
//!
//! The `demos/` directory contains runnable programs:
//!
//! - **`basic.rs`** - Schemas, bundling and alias propagation
//! - **`duplicates.rs`** - Every duplicate policy side by side
//! - **`string_input.rs`** - Quoting and escaping in command strings
//!
//! Run any of them with: `cargo run --example <name>`

mod auto;
pub mod config;
mod duplicates;
pub mod error;
pub mod macros;
pub mod map;
mod matcher;
mod preprocess;
pub mod registry;
pub mod schema;
pub mod syntax;
pub mod tokenizer;
pub mod value;

pub use config::{AliasPropagation, Config, Duplicates, Terminator, UnknownOptions};
pub use error::{Error, Result};
pub use map::OptionMap;
pub use registry::{OptionDef, Param, Registry};
pub use schema::{Schema, SchemaEntry};
pub use tokenizer::tokenize;
pub use value::Value;

use serde::Serialize;

/// The outcome of a parse: named option values and positional arguments.
///
/// Serializes as `{"options": {...}, "argv": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ParsedArgs {
    /// Option values keyed by formatted name, in first-assignment order.
    pub options: OptionMap,
    /// Positional arguments, including anything after a terminator.
    pub argv: Vec<String>,
}

/// Parse command-line tokens against a schema with the default [`Config`].
///
/// # Examples
///
/// ```rust
/// use get_options::{parse, Schema, Value};
///
/// let schema = Schema::shorthand("ab:");
/// let parsed = parse(["-a", "-b", "x", "rest"], &schema).unwrap();
///
/// assert_eq!(parsed.options.get("a"), Some(&Value::Flag));
/// assert_eq!(parsed.options.get("b"), Some(&Value::from("x")));
/// assert_eq!(parsed.argv, vec!["rest"]);
/// ```
///
/// # Errors
///
/// Returns an error if the schema does not compile.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse<I, S>(input: I, schema: &Schema) -> Result<ParsedArgs>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parse_with_config(input, schema, &Config::default())
}

/// Parse command-line tokens against a schema.
///
/// An empty input yields an empty result without looking at the schema. An
/// [auto](Schema::auto) schema classifies tokens heuristically.
///
/// # Examples
///
/// ```rust
/// use get_options::{parse_with_config, Config, Schema};
///
/// let schema = Schema::new().option("-v, --verbose", "");
/// let config = Config::new().with_mixed_order(false);
/// let parsed = parse_with_config(["file", "-v"], &schema, &config).unwrap();
///
/// assert!(parsed.options.is_empty());
/// assert_eq!(parsed.argv, vec!["file", "-v"]);
/// ```
///
/// # Errors
///
/// Returns an error if the schema does not compile, if an option repeats
/// under [`Duplicates::Error`], or if an unknown switch is rejected.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with_config<I, S>(input: I, schema: &Schema, config: &Config) -> Result<ParsedArgs>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens: Vec<String> = input.into_iter().map(Into::into).collect();
    if tokens.is_empty() {
        return Ok(ParsedArgs::default());
    }
    Registry::compile(schema)?.parse(tokens, config)
}

/// Parse a command string against a schema with the default [`Config`].
///
/// The string is split with [`tokenize`] first.
///
/// # Examples
///
/// ```rust
/// use get_options::{parse_str, Schema, Value};
///
/// let schema = Schema::new().option("--foo", "").option("--bar", "");
/// let parsed = parse_str(r#""--foo" "--bar""#, &schema).unwrap();
/// assert_eq!(parsed.options.get("bar"), Some(&Value::Flag));
///
/// let parsed = parse_str(r#""--foo --bar""#, &schema).unwrap();
/// assert_eq!(parsed.argv, vec!["--foo --bar"]);
/// ```
///
/// # Errors
///
/// Same as [`parse_with_config`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str(input: &str, schema: &Schema) -> Result<ParsedArgs> {
    parse_str_with_config(input, schema, &Config::default())
}

/// Parse a command string against a schema.
///
/// # Errors
///
/// Same as [`parse_with_config`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_str_with_config(input: &str, schema: &Schema, config: &Config) -> Result<ParsedArgs> {
    parse_with_config(tokenize(input), schema, config)
}
