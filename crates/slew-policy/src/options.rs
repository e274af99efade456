//! Open extension point for per-call policy options.

use indexmap::IndexMap;

/// Free-form `key = value` options handed to every policy call.
///
/// No key is recognised by the reference policies. Callers may pass
/// options intended for future or third-party policies; unknown keys are
/// accepted and ignored rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolicyOptions {
    entries: IndexMap<String, String>,
}

impl PolicyOptions {
    /// Empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an option, returning the updated set.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace an option. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up an option.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no options are set.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
