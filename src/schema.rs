//! Caller-facing schema definitions.
//!
//! A [`Schema`] lists the options a program recognizes. It comes in three flavors:
//!
//! - **Object form**: ordered `(aliases, params)` entries, e.g.
//!   `("-n, --number-of-lines", "<number=\\d+>")`
//! - **Shorthand form**: a getopt string such as `"t:h:i:s"`, where each
//!   character is a short flag and a trailing `:` means it takes one argument
//! - **Auto**: no schema at all; tokens are classified heuristically
//!
//! ## Examples
//!
//! ```rust
//! use get_options::{parse, Schema};
//!
//! let object = Schema::new()
//!     .option("-h, --help", "")
//!     .option("-o, --output", "<file>");
//! let shorthand = Schema::shorthand("ho:");
//!
//! let a = parse(["-o", "out.txt"], &object).unwrap();
//! let b = parse(["-o", "out.txt"], &shorthand).unwrap();
//! assert_eq!(a.options.get("o"), b.options.get("o"));
//! ```

/// One option definition as written by the caller, before compilation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaEntry {
    /// Comma-separated alias list, e.g. `"-s, -T, --set-type"`.
    pub names: String,
    /// Whitespace-separated parameter list, e.g. `"<key> <type=\\w+>"`.
    pub params: String,
}

/// A description of the options a command line may contain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    entries: Option<Vec<SchemaEntry>>,
}

impl Schema {
    /// Creates an empty schema. Nothing is recognized as an option.
    ///
    /// This differs from [`Schema::auto`]: with an empty schema every token is
    /// positional.
    #[must_use]
    pub fn new() -> Self {
        Schema {
            entries: Some(Vec::new()),
        }
    }

    /// Creates a schema that requests heuristic auto-detection of options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::{parse, Schema, Value};
    ///
    /// let parsed = parse(["--path", "/tmp", "--verbose"], &Schema::auto()).unwrap();
    /// assert_eq!(parsed.options.get("path"), Some(&Value::from("/tmp")));
    /// assert_eq!(parsed.options.get("verbose"), Some(&Value::Flag));
    /// ```
    #[must_use]
    pub fn auto() -> Self {
        Schema { entries: None }
    }

    /// Builds a schema from getopt shorthand.
    ///
    /// Every character other than whitespace and `:` defines a short option;
    /// one immediately followed by `:` takes a single parameter named `arg`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::Schema;
    ///
    /// let schema = Schema::shorthand("ab:c");
    /// let names: Vec<_> = schema.entries().iter().map(|e| e.names.as_str()).collect();
    /// assert_eq!(names, vec!["-a", "-b", "-c"]);
    /// assert_eq!(schema.entries()[1].params, "<arg>");
    /// ```
    #[must_use]
    pub fn shorthand(optstring: &str) -> Self {
        let mut entries = Vec::new();
        let mut chars = optstring.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_whitespace() || ch == ':' {
                continue;
            }
            let takes_arg = chars.next_if_eq(&':').is_some();
            let entry = SchemaEntry {
                names: format!("-{}", ch),
                params: if takes_arg { "<arg>" } else { "" }.to_string(),
            };

            // A repeated letter redefines the flag rather than colliding with it
            match entries.iter_mut().find(|e: &&mut SchemaEntry| e.names == entry.names) {
                Some(existing) => *existing = entry,
                None => entries.push(entry),
            }
        }

        Schema {
            entries: Some(entries),
        }
    }

    /// Adds an option with a whitespace-separated parameter list.
    ///
    /// Adding an option to an auto schema turns it into an explicit one.
    #[must_use]
    pub fn option(mut self, names: &str, params: &str) -> Self {
        self.entries.get_or_insert_with(Vec::new).push(SchemaEntry {
            names: names.to_string(),
            params: params.to_string(),
        });
        self
    }

    /// Adds an option whose parameters are given as separate items.
    ///
    /// Empty items are skipped; the rest are joined with spaces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::Schema;
    ///
    /// let schema = Schema::new().option_params("-r, --range", ["<min>", "", "<max>"]);
    /// assert_eq!(schema.entries()[0].params, "<min> <max>");
    /// ```
    #[must_use]
    pub fn option_params<I, S>(self, names: &str, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = params
            .into_iter()
            .filter(|p| !p.as_ref().is_empty())
            .map(|p| p.as_ref().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        self.option(names, &joined)
    }

    /// Returns `true` if this schema requests auto-detection.
    #[must_use]
    pub fn is_auto(&self) -> bool {
        self.entries.is_none()
    }

    /// Returns the explicit entries, in definition order. Empty for auto schemas.
    #[must_use]
    pub fn entries(&self) -> &[SchemaEntry] {
        self.entries.as_deref().unwrap_or(&[])
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, P> FromIterator<(N, P)> for Schema
where
    N: AsRef<str>,
    P: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (N, P)>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Schema::new(), |schema, (names, params)| {
                schema.option(names.as_ref(), params.as_ref())
            })
    }
}
