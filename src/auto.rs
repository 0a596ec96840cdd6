//! Heuristic parsing used when no schema is given.
//!
//! Without a schema the parser guesses:
//!
//! - anything starting with a dash is an option name
//! - `--name=value` assigns `value` directly
//! - the non-option tokens between an option and the next option are its
//!   value: a single string for one token, a list for several
//! - an option with nothing after it, or followed only by non-options up to
//!   the end of input, is a flag
//! - everything after the first bare `--` is positional
//!
//! Repeated options overwrite earlier ones.
//!
//! ```rust
//! use get_options::{parse, Schema, Value};
//!
//! let parsed = parse(
//!     ["--files", "a", "b", "--mode=fast", "--dry-run", "x", "--", "--y"],
//!     &Schema::auto(),
//! )
//! .unwrap();
//!
//! assert_eq!(parsed.options.get("files"), Some(&Value::from(vec!["a", "b"])));
//! assert_eq!(parsed.options.get("mode"), Some(&Value::from("fast")));
//! assert_eq!(parsed.options.get("dryRun"), Some(&Value::Flag));
//! assert_eq!(parsed.argv, vec!["x", "--y"]);
//! ```

use crate::registry::format_name;
use crate::{Config, OptionMap, ParsedArgs, Value};
use tracing::trace;

const END_OF_OPTIONS: &str = "--";

/// Parses `tokens` without a schema.
pub(crate) fn parse_auto(mut tokens: Vec<String>, config: &Config) -> ParsedArgs {
    let tail = match tokens.iter().position(|t| t == END_OF_OPTIONS) {
        Some(split) => {
            let mut tail = tokens.split_off(split);
            tail.remove(0);
            tail
        }
        None => Vec::new(),
    };

    let mut options = OptionMap::new();
    let mut argv = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let token = &tokens[i];
        if !is_option(token) {
            argv.push(token.clone());
            i += 1;
            continue;
        }

        if config.equals {
            if let Some((name, value)) = token.split_once('=') {
                options.insert(format_name(name, config.camel_case), Value::from(value));
                i += 1;
                continue;
            }
        }

        let name = format_name(token, config.camel_case);
        let next_is_value = tokens.get(i + 1).is_some_and(|next| !is_option(next));
        let next_option = tokens[i + 1..]
            .iter()
            .position(|t| is_option(t))
            .map(|offset| i + 1 + offset);

        match next_option {
            Some(end) if next_is_value => {
                let values = &tokens[i + 1..end];
                let value = if values.len() == 1 {
                    Value::from(values[0].as_str())
                } else {
                    Value::from(values.to_vec())
                };
                trace!(%name, %value, "guessed option value");
                options.insert(name, value);
                i = end;
            }
            // Trailing non-options stay positional
            _ => {
                options.insert(name, Value::Flag);
                i += 1;
            }
        }
    }

    argv.extend(tail);
    ParsedArgs { options, argv }
}

fn is_option(token: &str) -> bool {
    token.starts_with('-')
}
