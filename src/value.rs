//! Dynamic value representation for parsed options.
//!
//! Every entry in a parse result's [`OptionMap`](crate::OptionMap) holds a [`Value`]:
//!
//! - [`Value::Flag`]: a niladic option was present (serializes as `true`)
//! - [`Value::String`]: the single value of an option taking exactly one parameter
//! - [`Value::List`]: the values of an option taking several parameters, a
//!   variadic option, or the merged values produced by a duplicate policy
//! - [`Value::Absent`]: a parameter slot that never received a token (serializes as `null`)
//!
//! ## Extracting Values
//!
//! ```rust
//! use get_options::{parse, Schema, Value};
//!
//! let schema = Schema::new()
//!     .option("-v, --verbose", "")
//!     .option("-s, --size", "<width> <height>");
//! let parsed = parse(["-v", "--size", "640", "480"], &schema).unwrap();
//!
//! assert!(parsed.options.get("verbose").unwrap().is_flag());
//! assert_eq!(
//!     parsed.options.get("size").and_then(Value::as_strings),
//!     Some(vec!["640", "480"])
//! );
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// A value assigned to an option name.
///
/// # Examples
///
/// ```rust
/// use get_options::Value;
///
/// let flag = Value::Flag;
/// let text = Value::from("hello");
/// let list = Value::from(vec!["a", "b"]);
///
/// assert!(flag.is_flag());
/// assert_eq!(text.as_str(), Some("hello"));
/// assert_eq!(list.as_list().map(Vec::len), Some(2));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Absent,
    Flag,
    String(String),
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` if the value is absent.
    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns `true` if the value records a niladic option's presence.
    #[inline]
    #[must_use]
    pub const fn is_flag(&self) -> bool {
        matches!(self, Value::Flag)
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a list.
    #[inline]
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::Flag.as_str(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is a list, returns a reference to its items. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a flat list of strings, returns them.
    ///
    /// Returns `None` for non-lists and for lists holding anything other than strings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::Value;
    ///
    /// assert_eq!(Value::from(vec!["1", "2"]).as_strings(), Some(vec!["1", "2"]));
    /// assert_eq!(Value::List(vec![Value::Flag]).as_strings(), None);
    /// ```
    #[must_use]
    pub fn as_strings(&self) -> Option<Vec<&str>> {
        self.as_list()?.iter().map(Value::as_str).collect()
    }

    /// Unwraps a list into its items, or boxes any other value into a one-item list.
    pub(crate) fn into_items(self) -> Vec<Value> {
        match self {
            Value::List(items) => items,
            other => vec![other],
        }
    }

    /// Collects every string this value carries, depth first.
    pub(crate) fn strings(&self) -> Vec<String> {
        match self {
            Value::String(s) => vec![s.clone()],
            Value::List(items) => items.iter().flat_map(Value::strings).collect(),
            Value::Flag | Value::Absent => Vec::new(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => write!(f, "null"),
            Value::Flag => write!(f, "true"),
            Value::String(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                write!(
                    f,
                    "[{}]",
                    items
                        .iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(",")
                )
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Absent => serializer.serialize_none(),
            Value::Flag => serializer.serialize_bool(true),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for element in items {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Flag => Ok(true),
            Value::Absent => Ok(false),
            _ => Err(crate::Error::custom(format!(
                "expected flag, found {}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for Vec<String> {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(String::try_from).collect(),
            _ => Err(crate::Error::custom(format!(
                "expected list, found {}",
                value
            ))),
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Absent, Into::into)
    }
}
