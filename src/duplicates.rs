//! Resolution of options given more than once.
//!
//! When an option that already holds a value is matched again, the configured
//! [`Duplicates`] policy decides what the result map ends up holding:
//!
//! | Policy         | `--size 640 480 --size 1024 768`     |
//! |----------------|--------------------------------------|
//! | `use-first`    | `["640","480"]`                      |
//! | `use-last`     | `["1024","768"]`                     |
//! | `limit-first`  | `["640","480"]`, rest to argv        |
//! | `limit-last`   | `["1024","768"]`, rest to argv       |
//! | `error`        | [`Error::DuplicateValue`]            |
//! | `append`       | `["640","480","1024","768"]`         |
//! | `stack`        | `[["640","480"],["1024","768"]]`     |
//! | `stack-values` | `[["640","1024"],["480","768"]]`     |
//!
//! ```rust
//! use get_options::{parse_with_config, Config, Duplicates, Schema};
//!
//! let schema = Schema::new().option("-s, --size", "<width> <height>");
//! let config = Config::new().with_duplicates(Duplicates::StackValues);
//! let parsed = parse_with_config(
//!     ["--size", "640", "480", "--size", "1024", "768"],
//!     &schema,
//!     &config,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     serde_json::to_string(parsed.options.get("size").unwrap()).unwrap(),
//!     r#"[["640","1024"],["480","768"]]"#
//! );
//! ```

use crate::registry::OptionDef;
use crate::{Duplicates, Error, Result, Value};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Per-parse duplicate bookkeeping.
///
/// Stacking state is tracked per result key, so one resolver serves a whole
/// parse regardless of alias propagation.
#[derive(Debug)]
pub(crate) struct DuplicateResolver {
    policy: Duplicates,
    stacked: HashSet<String>,
    occurrences: HashMap<String, usize>,
}

impl DuplicateResolver {
    pub(crate) fn new(policy: Duplicates) -> Self {
        DuplicateResolver {
            policy,
            stacked: HashSet::new(),
            occurrences: HashMap::new(),
        }
    }

    /// Combines an existing value with a new occurrence.
    ///
    /// `alias` is the name as typed on the command line, used when a policy
    /// sends the occurrence back to `argv`. Returns the value to store under
    /// `name`, or `None` to leave the existing value in place.
    pub(crate) fn resolve(
        &mut self,
        option: &OptionDef,
        name: &str,
        alias: &str,
        existing: Value,
        incoming: Value,
        argv: &mut Vec<String>,
    ) -> Result<Option<Value>> {
        debug!(policy = %self.policy, %name, %alias, "resolving duplicate option");

        match self.policy {
            Duplicates::UseFirst => Ok(None),
            Duplicates::UseLast => Ok(Some(incoming)),
            // limit-last is matched over reversed input, so both keep the first
            Duplicates::LimitFirst | Duplicates::LimitLast => {
                argv.push(alias.to_string());
                argv.extend(incoming.strings());
                Ok(None)
            }
            Duplicates::Error => Err(Error::DuplicateValue {
                name: name.to_string(),
                option: Box::new(option.clone()),
                value: incoming,
            }),
            Duplicates::Append => {
                let mut items = existing.into_items();
                items.extend(incoming.into_items());
                Ok(Some(Value::List(items)))
            }
            Duplicates::Stack => Ok(Some(self.stack(name, existing, incoming))),
            Duplicates::StackValues => Ok(Some(self.stack_values(name, existing, incoming))),
        }
    }

    fn stack(&mut self, name: &str, existing: Value, incoming: Value) -> Value {
        let group = Value::List(incoming.into_items());
        if self.stacked.insert(name.to_string()) {
            return Value::List(vec![Value::List(existing.into_items()), group]);
        }
        let mut groups = existing.into_items();
        groups.push(group);
        Value::List(groups)
    }

    fn stack_values(&mut self, name: &str, existing: Value, incoming: Value) -> Value {
        let mut columns: Vec<Vec<Value>> = if self.stacked.insert(name.to_string()) {
            existing.into_items().into_iter().map(|item| vec![item]).collect()
        } else {
            existing
                .into_items()
                .into_iter()
                .map(Value::into_items)
                .collect()
        };

        let seen = self.occurrences.entry(name.to_string()).or_insert(1);
        for (i, item) in incoming.into_items().into_iter().enumerate() {
            if columns.len() <= i {
                columns.resize_with(i + 1, Vec::new);
            }
            // An earlier occurrence was given fewer parameters
            let column = &mut columns[i];
            if column.len() < *seen {
                column.resize(*seen, Value::Absent);
            }
            column.push(item);
        }
        *seen += 1;

        Value::List(columns.into_iter().map(Value::List).collect())
    }
}
