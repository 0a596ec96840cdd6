//! Token rewriting ahead of matching.
//!
//! Two rewrites are applied in a single forward pass that builds a new token
//! vector:
//!
//! - **Bundle expansion**: `-hvn2` becomes `-h -v -n 2` when `-h` and `-v` are
//!   niladic and `-n` takes a parameter whose pattern accepts `2`.
//! - **Equals expansion**: `--width=320` becomes `--width 320` when `--width`
//!   is a known alias.
//!
//! Neither rewrite re-scans what it produces. Running the output through again
//! changes nothing, unless an inline or `=` value is itself an option cluster:
//! `--width=-hv` becomes `--width -hv`, which a second pass would split.
//!
//! ```rust
//! use get_options::{Config, Registry, Schema};
//!
//! let schema = Schema::new()
//!     .option("-h, --help", "")
//!     .option("-v, --version", "")
//!     .option("-n, --number-of-lines", "<number=\\d+>");
//! let registry = Registry::compile(&schema).unwrap();
//!
//! let tokens = registry.expand(["-hvn2", "--number-of-lines=5"], &Config::new());
//! assert_eq!(tokens, vec!["-h", "-v", "-n", "2", "--number-of-lines", "5"]);
//! ```

use crate::registry::{Bundler, Registry};
use crate::Config;
use std::collections::VecDeque;
use tracing::trace;

impl Registry {
    /// Expands bundled short options and `--name=value` tokens.
    ///
    /// Unrecognized tokens pass through unchanged. Bundle expansion is skipped
    /// when disabled in `config` or when no option has a short name; equals
    /// expansion is skipped when disabled in `config`.
    pub fn expand<I, S>(&self, tokens: I, config: &Config) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let bundler = if config.bundling { self.bundler() } else { None };
        let mut pending: VecDeque<String> = tokens.into_iter().map(Into::into).collect();
        let mut output = Vec::with_capacity(pending.len());

        while let Some(token) = pending.pop_front() {
            if let Some(bundler) = bundler {
                if self.is_cluster(&token) {
                    let cluster = match self.split_niladic_suffix(&token) {
                        Some((cluster, suffix)) => {
                            // The suffix is an ordinary token and gets its own turn
                            pending.push_front(suffix);
                            cluster
                        }
                        None => token,
                    };
                    self.expand_cluster(bundler, &cluster, &mut output);
                    continue;
                }
            }

            if config.equals {
                if let Some((name, value)) = self.split_equals(&token) {
                    trace!(%token, "expanded equals assignment");
                    output.push(name);
                    output.push(value);
                    continue;
                }
            }

            output.push(token);
        }

        output
    }

    /// A cluster is a dash followed directly by a registered short name.
    fn is_cluster(&self, token: &str) -> bool {
        token
            .strip_prefix('-')
            .and_then(|rest| rest.chars().next())
            .is_some_and(|ch| self.short_index(ch).is_some())
    }

    /// Splits `-ab0c` into `-ab` and `0c` when `-a` and `-b` are niladic and the
    /// text after them does not start with a short name.
    fn split_niladic_suffix(&self, token: &str) -> Option<(String, String)> {
        let body = &token[1..];
        let mut end = 0;
        for (i, ch) in body.char_indices() {
            let niladic = self
                .short_index(ch)
                .is_some_and(|index| self.option(index).arity() == 0);
            if !niladic {
                break;
            }
            end = i + ch.len_utf8();
        }
        if end == 0 {
            return None;
        }

        let suffix = &body[end..];
        match suffix.chars().next() {
            Some(ch) if !ch.is_whitespace() && self.short_index(ch).is_none() => {
                trace!(%token, %suffix, "split argument from niladic bundle");
                Some((format!("-{}", &body[..end]), suffix.to_string()))
            }
            _ => None,
        }
    }

    fn expand_cluster(&self, bundler: &Bundler, cluster: &str, output: &mut Vec<String>) {
        let start = output.len();

        for segment in bundler.segments.find_iter(cluster).map(|m| m.as_str()) {
            let Some(ch) = segment.chars().next() else {
                continue;
            };
            let Some(index) = self.short_index(ch) else {
                continue;
            };
            output.push(format!("-{}", ch));

            let option = self.option(index);
            if option.arity() == 0 {
                continue;
            }
            let Some(caps) = bundler
                .extractors
                .get(&index)
                .and_then(|re| re.captures(segment))
            else {
                continue;
            };
            for i in 0..option.arity() {
                if let Some(value) = caps.name(&format!("p{}", i)) {
                    if !value.as_str().is_empty() {
                        output.push(value.as_str().to_string());
                    }
                }
            }
        }

        trace!(%cluster, expanded = ?&output[start..], "expanded option bundle");
    }

    /// Splits `--name=value` when `--name` is a known long alias and `value` is non-empty.
    fn split_equals(&self, token: &str) -> Option<(String, String)> {
        let (name, value) = token.strip_prefix("--")?.split_once('=')?;
        if value.is_empty() || !self.has_long(name) {
            return None;
        }
        Some((format!("--{}", name), value.to_string()))
    }
}
