//! Schema and command-line syntax reference.
//!
//! This module documents the syntax accepted by this library. It contains no code.
//!
//! # Schemas
//!
//! ## Names
//!
//! An option's names are a comma-separated list. Surrounding whitespace is
//! ignored.
//!
//! | Written      | Kind  | Typed as     | Result key (camel case on) |
//! |--------------|-------|--------------|----------------------------|
//! | `-v`         | short | `-v`         | `v`                        |
//! | `--verbose`  | long  | `--verbose`  | `verbose`                  |
//! | `-foo`       | long  | `--foo`      | `foo`                      |
//! | `--set-size` | long  | `--set-size` | `setSize`                  |
//!
//! A short name is exactly one dash and one character other than a dash or
//! whitespace. Everything else is a long name with its leading dashes removed,
//! so `-foo` is only reachable as `--foo`. Declaring the same name twice fails
//! with [`Error::Definition`](crate::Error::Definition).
//!
//! ```rust
//! use get_options::{parse, Schema, Value};
//!
//! let schema = Schema::new().option("-s, -T, --set-type", "<key>");
//! let parsed = parse(["-T", "x"], &schema).unwrap();
//!
//! for key in ["s", "T", "setType"] {
//!     assert_eq!(parsed.options.get(key), Some(&Value::from("x")));
//! }
//! ```
//!
//! ## Parameters
//!
//! Parameters are separated by whitespace:
//!
//! ```text
//! <name>            one parameter, pattern .+
//! [name=\d+]        brackets are decoration: <>, [] and () are equivalent
//! (name=)           an empty pattern also means .+
//! <rest...>         a trailing ... makes the option variadic
//! ```
//!
//! Patterns are [`regex`](https://docs.rs/regex) syntax and only matter for
//! bundles: outside a bundle any token is accepted as a value.
//!
//! ```rust
//! use get_options::{parse, Schema, Value};
//!
//! let schema = Schema::new().option("-n", "<count=\\d+>");
//!
//! // Outside a bundle the pattern is not checked
//! let parsed = parse(["-n", "many"], &schema).unwrap();
//! assert_eq!(parsed.options.get("n"), Some(&Value::from("many")));
//! ```
//!
//! ## Shorthand
//!
//! `Schema::shorthand("ab:c")` declares `-a`, `-b <arg>` and `-c`. Whitespace
//! and stray colons are ignored; repeating a letter redefines it.
//!
//! # Command lines
//!
//! ## Values
//!
//! | Declared parameters        | Value shape                                   |
//! |----------------------------|-----------------------------------------------|
//! | none                       | `true`                                        |
//! | exactly one, not variadic  | the string, or `null` if nothing followed     |
//! | several                    | list of what was collected, possibly short    |
//! | variadic                   | list of every token up to the next option     |
//!
//! ```rust
//! use get_options::{parse, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::new()
//!     .option("--foo", "<a>")
//!     .option("--bar", "<a> <b>")
//!     .option("--baz", "");
//! let parsed = parse(["--foo", "--bar", "--baz"], &schema).unwrap();
//!
//! assert_eq!(
//!     serde_json::to_value(&parsed.options).unwrap(),
//!     json!({ "foo": null, "bar": [], "baz": true })
//! );
//! ```
//!
//! ## Bundles
//!
//! A token is a bundle when a single dash is followed by a declared short
//! name. Each short name in it becomes its own token, and characters matching
//! the parameter patterns become that option's values:
//!
//! ```text
//! -hvn2         ->  -h -v -n 2
//! -ab0c         ->  -a -b 0c        (-a, -b niladic; 0 is not a short name)
//! -cda0         ->  -c -d a0        (-d takes <arg>)
//! ```
//!
//! ## Equals
//!
//! `--name=value` becomes `--name value` when `--name` is declared and the
//! value is not empty. Unknown names and `--name=` are left alone.
//!
//! ## Ending option parsing
//!
//! - A [terminator](crate::Terminator) ends parsing. It is dropped and every
//!   token after it is positional. There is no default terminator with a
//!   schema; without one, the first `--` plays this role.
//! - With mixed ordering disabled, the first positional argument ends parsing
//!   and is kept along with everything after it.
//!
//! ```rust
//! use get_options::{parse_with_config, Config, Schema};
//!
//! let schema = Schema::new().option("-v", "");
//! let config = Config::new().with_terminator("--");
//! let parsed = parse_with_config(["-v", "--", "-v"], &schema, &config).unwrap();
//!
//! assert_eq!(parsed.argv, vec!["-v"]);
//! ```
//!
//! # Command strings
//!
//! [`tokenize`](crate::tokenize) splits on unquoted spaces, tabs and newlines.
//! `'`, `"` and `` ` `` quote; a backslash escapes the next character and is
//! dropped when it escapes whitespace, a dash, a quote or another backslash.
