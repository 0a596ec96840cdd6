//! Schema compilation.
//!
//! [`Registry::compile`] turns a [`Schema`] into immutable [`OptionDef`]s and
//! indexes them by every alias. Everything that depends only on the schema is
//! computed here, once: alias lookup tables, each option's bundle pattern, and
//! the regular expressions used to split bundled short-option clusters.
//!
//! ## Parameter syntax
//!
//! Parameters are separated by whitespace. Each may be wrapped in one layer of
//! `<…>`, `[…]` or `(…)` for readability; the bracket kind carries no meaning.
//! A `=pattern` suffix gives the regular expression used to recognize the
//! parameter inside a bundle (default `.+`), and a name ending in `...` makes
//! the option variadic.
//!
//! ```rust
//! use get_options::{Registry, Schema};
//!
//! let schema = Schema::new().option("-l, --list", "<letter=[A-Za-z]> <integer=\\d+> <rest...>");
//! let registry = Registry::compile(&schema).unwrap();
//! let list = registry.lookup("--list").unwrap();
//!
//! assert_eq!(list.arity(), 3);
//! assert!(list.is_variadic());
//! assert_eq!(list.params()[1].name, "integer");
//! assert_eq!(list.params()[1].pattern, "\\d+");
//! ```

use crate::schema::Schema;
use crate::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

const DEFAULT_PATTERN: &str = ".+";

/// A declared parameter of an option.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub pattern: String,
}

/// A compiled option: its aliases and the parameters it collects.
#[derive(Clone, Debug)]
pub struct OptionDef {
    short_names: Vec<char>,
    long_names: Vec<String>,
    params: Vec<Param>,
    variadic: bool,
    bundle_pattern: String,
}

impl OptionDef {
    fn new(names: &str, params: &str) -> Self {
        let mut short_names = Vec::new();
        let mut long_names = Vec::new();

        for name in names.split(',').map(str::trim) {
            match short_name(name) {
                Some(ch) => short_names.push(ch),
                None => {
                    let long = name.trim_start_matches('-');
                    if !long.is_empty() {
                        long_names.push(long.to_string());
                    }
                }
            }
        }

        let params = parse_params(params);
        let variadic = params.iter().any(|p| p.name.ends_with("..."));
        let bundle_pattern = bundle_pattern(&short_names, &params);

        OptionDef {
            short_names,
            long_names,
            params,
            variadic,
            bundle_pattern,
        }
    }

    /// Single-character names, without the leading dash.
    #[must_use]
    pub fn short_names(&self) -> &[char] {
        &self.short_names
    }

    /// Multi-character names, without leading dashes, in declaration order.
    #[must_use]
    pub fn long_names(&self) -> &[String] {
        &self.long_names
    }

    /// Every name the option answers to: short names first, then long names.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.short_names
            .iter()
            .map(char::to_string)
            .chain(self.long_names.iter().cloned())
            .collect()
    }

    /// The first long name, falling back to the first short name.
    #[must_use]
    pub fn primary_name(&self) -> Option<String> {
        self.long_names
            .first()
            .cloned()
            .or_else(|| self.short_names.first().map(char::to_string))
    }

    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Number of declared parameters.
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    #[inline]
    #[must_use]
    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    /// Regular-expression fragment matching this option inside a bundle: one of
    /// its short names followed by an optional match of each parameter pattern.
    #[must_use]
    pub fn bundle_pattern(&self) -> &str {
        &self.bundle_pattern
    }

    /// Whether an occurrence that already holds `collected` values takes another.
    #[inline]
    pub(crate) fn can_collect(&self, collected: usize) -> bool {
        self.variadic || collected < self.params.len()
    }
}

/// Regular expressions derived from the short options, used by bundle expansion.
#[derive(Clone, Debug)]
pub(crate) struct Bundler {
    /// Alternation of every short option's bundle pattern, in definition order.
    pub(crate) segments: Regex,
    /// Anchored per-option extractors with one named group (`p0`, `p1`, …) per parameter.
    pub(crate) extractors: HashMap<usize, Regex>,
}

/// Compiled, immutable option lookup tables.
///
/// A registry may be compiled once and used for any number of parses; each
/// parse keeps its own run-time state.
///
/// # Examples
///
/// ```rust
/// use get_options::{Config, Registry, Schema};
///
/// let registry = Registry::compile(&Schema::shorthand("vo:")).unwrap();
/// let first = registry.parse(["-vofile"], &Config::new()).unwrap();
/// let second = registry.parse(["-v", "-o", "file"], &Config::new()).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Clone, Debug)]
pub struct Registry {
    options: Vec<OptionDef>,
    short: HashMap<char, usize>,
    long: HashMap<String, usize>,
    bundler: Option<Bundler>,
    auto: bool,
}

impl Registry {
    /// Compiles a schema.
    ///
    /// An auto schema compiles to an empty registry that parses heuristically.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Definition`] if an alias is declared twice, and
    /// [`Error::InvalidPattern`] if a parameter pattern is not a valid regular
    /// expression.
    pub fn compile(schema: &Schema) -> Result<Self> {
        let mut options = Vec::with_capacity(schema.entries().len());
        let mut short = HashMap::new();
        let mut long = HashMap::new();

        for entry in schema.entries() {
            let option = OptionDef::new(&entry.names, &entry.params);
            let index = options.len();

            for &ch in &option.short_names {
                if short.insert(ch, index).is_some() {
                    return Err(Error::definition(&format!("-{}", ch)));
                }
            }
            for name in &option.long_names {
                if long.insert(name.clone(), index).is_some() {
                    return Err(Error::definition(&format!("--{}", name)));
                }
            }
            for param in &option.params {
                Regex::new(&param.pattern).map_err(|source| Error::InvalidPattern {
                    param: param.name.clone(),
                    pattern: param.pattern.clone(),
                    source,
                })?;
            }

            options.push(option);
        }

        let bundler = if short.is_empty() {
            None
        } else {
            Some(Self::build_bundler(&options)?)
        };

        debug!(
            options = options.len(),
            short = short.len(),
            long = long.len(),
            bundling = bundler.is_some(),
            "compiled option schema"
        );

        Ok(Registry {
            options,
            short,
            long,
            bundler,
            auto: schema.is_auto(),
        })
    }

    fn build_bundler(options: &[OptionDef]) -> Result<Bundler> {
        let mut alternatives = Vec::new();
        let mut extractors = HashMap::new();

        for (index, option) in options.iter().enumerate() {
            if option.short_names.is_empty() {
                continue;
            }
            alternatives.push(option.bundle_pattern.as_str());
            extractors.insert(index, compile_pattern(&extractor_pattern(option))?);
        }

        Ok(Bundler {
            segments: compile_pattern(&alternatives.join("|"))?,
            extractors,
        })
    }

    /// Every compiled option, in definition order.
    #[must_use]
    pub fn options(&self) -> &[OptionDef] {
        &self.options
    }

    /// Returns `true` if the registry has no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Finds the option a command-line token refers to, e.g. `-v` or `--verbose`.
    ///
    /// Long names are only reachable with two dashes and short names with one.
    #[must_use]
    pub fn lookup(&self, token: &str) -> Option<&OptionDef> {
        self.find(token).map(|index| &self.options[index])
    }

    pub(crate) fn find(&self, token: &str) -> Option<usize> {
        if let Some(name) = token.strip_prefix("--") {
            return self.long.get(name).copied();
        }
        short_name(token).and_then(|ch| self.short.get(&ch).copied())
    }

    pub(crate) fn option(&self, index: usize) -> &OptionDef {
        &self.options[index]
    }

    pub(crate) fn short_index(&self, ch: char) -> Option<usize> {
        self.short.get(&ch).copied()
    }

    pub(crate) fn has_long(&self, name: &str) -> bool {
        self.long.contains_key(name)
    }

    pub(crate) fn bundler(&self) -> Option<&Bundler> {
        self.bundler.as_ref()
    }

    pub(crate) fn is_auto(&self) -> bool {
        self.auto
    }
}

/// Returns the character of a `-x` style short name.
fn short_name(name: &str) -> Option<char> {
    let mut chars = name.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(ch), None) if ch != '-' && !ch.is_whitespace() => Some(ch),
        _ => None,
    }
}

fn parse_params(params: &str) -> Vec<Param> {
    params
        .split_whitespace()
        .map(strip_brackets)
        .filter(|param| !param.is_empty())
        .map(|param| match param.split_once('=') {
            Some((name, pattern)) if !name.is_empty() => Param {
                name: name.to_string(),
                pattern: if pattern.is_empty() {
                    DEFAULT_PATTERN
                } else {
                    pattern
                }
                .to_string(),
            },
            _ => Param {
                name: param.to_string(),
                pattern: DEFAULT_PATTERN.to_string(),
            },
        })
        .collect()
}

/// Removes one enclosing pair of `<>`, `[]` or `()`.
fn strip_brackets(param: &str) -> &str {
    for (open, close) in [('<', '>'), ('[', ']'), ('(', ')')] {
        if let Some(inner) = param
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix(close))
        {
            if !inner.is_empty() {
                return inner;
            }
        }
    }
    param
}

fn short_alternatives(short_names: &[char]) -> String {
    short_names
        .iter()
        .map(|ch| regex::escape(&ch.to_string()))
        .collect::<Vec<_>>()
        .join("|")
}

fn bundle_pattern(short_names: &[char], params: &[Param]) -> String {
    let mut pattern = format!("(?:{})", short_alternatives(short_names));
    for param in params {
        pattern.push_str(&format!("(?:{})?", param.pattern));
    }
    pattern
}

fn extractor_pattern(option: &OptionDef) -> String {
    let mut pattern = format!("^(?:{})", short_alternatives(&option.short_names));
    for (i, param) in option.params.iter().enumerate() {
        pattern.push_str(&format!("(?P<p{}>{})?", i, param.pattern));
    }
    pattern
}

fn compile_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| Error::InvalidPattern {
        param: String::new(),
        pattern: pattern.to_string(),
        source,
    })
}

static KEBAB_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])-+([a-z])").expect("static regex must compile"));

/// Formats an option name as a result key.
///
/// Leading dashes are stripped. With `camel_case`, a name containing a dash is
/// lower-cased and each `x-y` boundary becomes `xY`.
///
/// # Examples
///
/// ```rust
/// use get_options::registry::format_name;
///
/// assert_eq!(format_name("--number-of-lines", true), "numberOfLines");
/// assert_eq!(format_name("--number-of-lines", false), "number-of-lines");
/// assert_eq!(format_name("-V", true), "V");
/// ```
#[must_use]
pub fn format_name(name: &str, camel_case: bool) -> String {
    let name = name.trim_start_matches('-');
    if !camel_case || !name.contains('-') {
        return name.to_string();
    }
    let lower = name.to_lowercase();
    KEBAB_BOUNDARY
        .replace_all(&lower, |caps: &regex::Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_uppercase())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(entries: &[(&str, &str)]) -> Result<Registry> {
        let schema: Schema = entries.iter().copied().collect();
        Registry::compile(&schema)
    }

    #[test]
    fn test_names_split_into_short_and_long() {
        let registry = compile(&[("-s, -T, --set-type", "<key> <type>")]).unwrap();
        let option = registry.lookup("-T").unwrap();
        assert_eq!(option.short_names(), &['s', 'T']);
        assert_eq!(option.long_names(), &["set-type".to_string()]);
        assert_eq!(option.names(), vec!["s", "T", "set-type"]);
        assert_eq!(option.primary_name().as_deref(), Some("set-type"));
    }

    #[test]
    fn test_single_dash_long_names_need_two_dashes() {
        let registry = compile(&[("-foo", ""), ("--x", "")]).unwrap();
        assert!(registry.lookup("-foo").is_none());
        assert!(registry.lookup("--foo").is_some());
        assert!(registry.lookup("-x").is_none());
        assert!(registry.lookup("--x").is_some());
    }

    #[test]
    fn test_brackets_and_patterns() {
        let registry = compile(&[("-z", "[width=\\d+] (height=) <depth>")]).unwrap();
        let params = registry.lookup("-z").unwrap().params();
        assert_eq!(
            params,
            &[
                Param {
                    name: "width".into(),
                    pattern: "\\d+".into()
                },
                Param {
                    name: "height".into(),
                    pattern: ".+".into()
                },
                Param {
                    name: "depth".into(),
                    pattern: ".+".into()
                },
            ]
        );
    }

    #[test]
    fn test_empty_params_mean_niladic() {
        let registry = compile(&[("-a", ""), ("-b", "   ")]).unwrap();
        assert_eq!(registry.lookup("-a").unwrap().arity(), 0);
        assert_eq!(registry.lookup("-b").unwrap().arity(), 0);
    }

    #[test]
    fn test_bundle_pattern_shape() {
        let registry = compile(&[("-n, -N", "<number=\\d+>")]).unwrap();
        assert_eq!(
            registry.lookup("-n").unwrap().bundle_pattern(),
            "(?:n|N)(?:\\d+)?"
        );
    }

    #[test]
    fn test_collision_is_definition_error() {
        let err = compile(&[("-a, --alpha", ""), ("-b, --alpha", "")]).unwrap_err();
        assert!(matches!(err, Error::Definition { ref alias } if alias == "--alpha"));

        let err = compile(&[("-a", ""), ("-a", "<x>")]).unwrap_err();
        assert_eq!(err.to_string(), "Option \"-a\" already defined");
    }

    #[test]
    fn test_invalid_pattern() {
        let err = compile(&[("-a", "<n=[0-9>")]).unwrap_err();
        match err {
            Error::InvalidPattern { param, pattern, .. } => {
                assert_eq!(param, "n");
                assert_eq!(pattern, "[0-9");
            }
            other => panic!("Expected invalid pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_no_short_names_means_no_bundler() {
        let registry = compile(&[("--only-long", "")]).unwrap();
        assert!(registry.bundler().is_none());
    }

    #[test]
    fn test_format_name() {
        assert_eq!(format_name("--set-size", true), "setSize");
        assert_eq!(format_name("--Set-SIZE", true), "setSize");
        assert_eq!(format_name("--a--b", true), "aB");
        assert_eq!(format_name("--a-b-c", true), "aB-c");
        assert_eq!(format_name("--x-1", true), "x-1");
        assert_eq!(format_name("colourise", true), "colourise");
    }
}
