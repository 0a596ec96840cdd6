//! Matching expanded tokens against a compiled registry.
//!
//! The matcher walks the token list once. A token naming a known alias starts
//! an occurrence of that option; niladic options are recorded as
//! [`Value::Flag`] immediately, the rest collect the following tokens until
//! their parameters are filled. Anything else is positional.
//!
//! An occurrence's value is shaped when it ends:
//!
//! - one non-variadic parameter: the string, or [`Value::Absent`] if none arrived
//! - otherwise: a list of whatever was collected, possibly empty
//!
//! Matching stops early at a terminator, or at the first positional argument
//! when mixed ordering is disabled; the remaining tokens go to `argv` untouched.

use crate::auto::parse_auto;
use crate::duplicates::DuplicateResolver;
use crate::registry::{format_name, Registry};
use crate::{AliasPropagation, Config, Duplicates, OptionMap, ParsedArgs, Result, Value};
use tracing::trace;

impl Registry {
    /// Matches `tokens` against this registry.
    ///
    /// Tokens are expanded with [`Registry::expand`] first. A registry compiled
    /// from [`Schema::auto`](crate::Schema::auto) classifies tokens
    /// heuristically instead, exactly like [`parse_with_config`](crate::parse_with_config).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateValue`](crate::Error::DuplicateValue) under the
    /// `error` duplicate policy, and the configured unknown-option error when
    /// [`UnknownOptions`](crate::UnknownOptions) rejects an unrecognized switch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::{Config, Registry, Schema, Value};
    ///
    /// let registry = Registry::compile(&Schema::new().option("-w, --width", "<n>")).unwrap();
    /// let parsed = registry.parse(["--width", "80", "file.txt"], &Config::new()).unwrap();
    ///
    /// assert_eq!(parsed.options.get("w"), Some(&Value::from("80")));
    /// assert_eq!(parsed.options.get("width"), Some(&Value::from("80")));
    /// assert_eq!(parsed.argv, vec!["file.txt"]);
    /// ```
    pub fn parse<I, S>(&self, tokens: I, config: &Config) -> Result<ParsedArgs>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.is_auto() {
            return Ok(parse_auto(tokens.into_iter().map(Into::into).collect(), config));
        }

        let tokens = self.expand(tokens, config);

        // limit-last keeps the last occurrence by matching occurrences back to front
        if config.duplicates == Duplicates::LimitLast {
            let mut groups = self.occurrences(tokens, config);
            groups.reverse();
            return Matcher::new(self, config, true).run(groups);
        }
        Matcher::new(self, config, false).run(vec![tokens])
    }

    /// Splits `tokens` into option occurrences and single stray tokens.
    ///
    /// An occurrence is an alias followed by the tokens it collects: up to its
    /// arity, or all of them for a variadic option, stopping early at the next
    /// alias or at a terminator.
    fn occurrences(&self, tokens: Vec<String>, config: &Config) -> Vec<Vec<String>> {
        let mut groups: Vec<Vec<String>> = Vec::new();
        let mut open = None;

        for token in tokens {
            let alias = self.find(&token);
            if alias.is_none() && !config.is_terminator(&token) {
                if let (Some(index), Some(group)) = (open, groups.last_mut()) {
                    if self.option(index).can_collect(group.len() - 1) {
                        group.push(token);
                        continue;
                    }
                }
            }
            open = alias;
            groups.push(vec![token]);
        }
        groups
    }
}

/// An option occurrence that is still collecting parameters.
#[derive(Debug)]
struct Collector {
    index: usize,
    alias: String,
    values: Vec<String>,
}

struct Matcher<'a> {
    registry: &'a Registry,
    config: &'a Config,
    resolver: DuplicateResolver,
    options: OptionMap,
    argv: Vec<String>,
    /// Start offset of every run of tokens sent to `argv`.
    units: Vec<usize>,
    /// Groups arrive back to front and `argv` units are restored on finish.
    reversed: bool,
    current: Option<Collector>,
}

impl<'a> Matcher<'a> {
    fn new(registry: &'a Registry, config: &'a Config, reversed: bool) -> Self {
        Matcher {
            registry,
            config,
            resolver: DuplicateResolver::new(config.duplicates),
            options: OptionMap::new(),
            argv: Vec::new(),
            units: Vec::new(),
            reversed,
            current: None,
        }
    }

    /// Matches token groups in order. The end of a group ends any occurrence
    /// still collecting.
    fn run(mut self, groups: Vec<Vec<String>>) -> Result<ParsedArgs> {
        let registry = self.registry;
        let mut groups = groups.into_iter();

        'groups: while let Some(group) = groups.next() {
            let mut tokens = group.into_iter();

            while let Some(token) = tokens.next() {
                if let Some(index) = registry.find(&token) {
                    self.flush()?;
                    if registry.option(index).arity() == 0 {
                        self.assign(index, &token, Value::Flag)?;
                    } else {
                        self.current = Some(Collector {
                            index,
                            alias: token,
                            values: Vec::new(),
                        });
                    }
                    continue;
                }

                let terminator = self.config.is_terminator(&token);
                if !terminator {
                    if let Some(current) = self.current.as_mut() {
                        if registry.option(current.index).can_collect(current.values.len()) {
                            current.values.push(token);
                            continue;
                        }
                    }
                }

                self.flush()?;

                if terminator {
                    trace!(%token, "option parsing terminated");
                    self.emit(tokens.by_ref());
                    groups.by_ref().for_each(|rest| self.emit(rest));
                    break 'groups;
                }

                if looks_like_option(&token) {
                    if let Some(error) = self.config.unknown_options.error_for(&token) {
                        return Err(error);
                    }
                }

                if !self.config.mixed_order {
                    self.emit(std::iter::once(token).chain(tokens.by_ref()));
                    groups.by_ref().for_each(|rest| self.emit(rest));
                    break 'groups;
                }
                self.emit([token]);
            }

            self.flush()?;
        }

        self.flush()?;
        Ok(self.finish())
    }

    /// Appends `tokens` to `argv` as one unit.
    fn emit<I: IntoIterator<Item = String>>(&mut self, tokens: I) {
        let start = self.argv.len();
        self.argv.extend(tokens);
        if self.argv.len() > start {
            self.units.push(start);
        }
    }

    fn finish(self) -> ParsedArgs {
        let Matcher {
            options,
            argv,
            units,
            reversed,
            ..
        } = self;

        if !reversed {
            return ParsedArgs { options, argv };
        }

        let mut end = argv.len();
        let mut restored = Vec::with_capacity(end);
        for &start in units.iter().rev() {
            restored.extend_from_slice(&argv[start..end]);
            end = start;
        }
        ParsedArgs {
            options,
            argv: restored,
        }
    }

    /// Ends the current occurrence, if any, and records its value.
    fn flush(&mut self) -> Result<()> {
        let Some(Collector {
            index,
            alias,
            values,
        }) = self.current.take()
        else {
            return Ok(());
        };

        let option = self.registry.option(index);
        let value = if option.arity() == 1 && !option.is_variadic() {
            values
                .into_iter()
                .next()
                .map_or(Value::Absent, Value::String)
        } else {
            Value::List(values.into_iter().map(Value::String).collect())
        };

        self.assign(index, &alias, value)
    }

    /// Writes an occurrence's value under the keys selected by alias propagation.
    fn assign(&mut self, index: usize, alias: &str, value: Value) -> Result<()> {
        let registry = self.registry;
        let option = registry.option(index);
        let camel_case = self.config.camel_case;

        trace!(%alias, %value, "matched option");

        match self.config.alias_propagation {
            AliasPropagation::All => {
                let names = option.names();
                let Some(first) = names.first() else {
                    return Ok(());
                };
                let key = format_name(first, camel_case);
                if let Some(value) = self.merge(index, &key, alias, value)? {
                    for name in &names {
                        self.options.insert(format_name(name, camel_case), value.clone());
                    }
                }
            }
            AliasPropagation::MatchedOnly => {
                let key = format_name(alias, camel_case);
                self.store(index, key, alias, value)?;
            }
            AliasPropagation::FirstOnly => {
                if let Some(primary) = option.primary_name() {
                    let key = format_name(&primary, camel_case);
                    self.store(index, key, alias, value)?;
                }
            }
        }
        Ok(())
    }

    fn store(&mut self, index: usize, key: String, alias: &str, value: Value) -> Result<()> {
        if let Some(value) = self.merge(index, &key, alias, value)? {
            self.options.insert(key, value);
        }
        Ok(())
    }

    /// Returns the value to write under `key`, consulting the duplicate policy
    /// when the key already holds one.
    fn merge(
        &mut self,
        index: usize,
        key: &str,
        alias: &str,
        value: Value,
    ) -> Result<Option<Value>> {
        if !self.options.is_set(key) {
            return Ok(Some(value));
        }
        let registry = self.registry;
        let existing = self.options.get(key).cloned().unwrap_or_default();
        let option = registry.option(index);
        let mut returned = Vec::new();
        let merged = self
            .resolver
            .resolve(option, key, alias, existing, value, &mut returned)?;
        self.emit(returned);
        Ok(merged)
    }
}

/// A dash followed by at least one more character.
fn looks_like_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}
