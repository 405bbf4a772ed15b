//! Render contexts.

use std::collections::HashMap;

use super::value::Value;
use crate::error::{Result, TallyError};

/// Per-render mapping of variable names to values.
///
/// The engine never retains a context beyond the render call except through
/// its canonical encoding in a cache key, so the insertion order of entries
/// is irrelevant.
///
/// # Example
///
/// ```
/// use tallyplate::template::Context;
///
/// let ctx = Context::new().with("count", 3).with("show", true);
/// assert_eq!(ctx.get("count").unwrap().to_string(), "3");
/// assert!(ctx.is_truthy("show"));
/// assert!(!ctx.is_truthy("missing"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: HashMap<String, Value>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), value.into());
    }

    /// Look up a value by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Whether `name` is present and truthy. Absent names are falsy.
    pub fn is_truthy(&self, name: &str) -> bool {
        self.get(name).is_some_and(Value::is_truthy)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the context has no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Entries sorted by name.
    pub fn sorted_entries(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<_> = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Parse a `name=value` assignment as given on the command line.
    ///
    /// The value is interpreted with [`Value`]'s `FromStr` rules.
    pub fn parse_assignment(input: &str) -> Result<(String, Value)> {
        let (name, raw) = input
            .split_once('=')
            .ok_or_else(|| TallyError::InvalidContext {
                message: format!("expected name=value, got '{}'", input),
            })?;

        let name = name.trim();
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(TallyError::InvalidContext {
                message: format!("invalid variable name '{}'", name),
            });
        }

        let value = match raw.parse::<Value>() {
            Ok(v) => v,
            Err(never) => match never {},
        };
        Ok((name.to_string(), value))
    }

    /// Merge another context into this one; `other` wins on conflicts.
    pub fn extend(&mut self, other: Context) {
        self.values.extend(other.values);
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let values = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { values }
    }
}

impl From<HashMap<String, Value>> for Context {
    fn from(values: HashMap<String, Value>) -> Self {
        Self { values }
    }
}
