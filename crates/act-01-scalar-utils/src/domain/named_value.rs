//! Single-field value object

use serde::{Deserialize, Serialize};

/// Value object holding one name, fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedValue {
    name: String,
}

impl NamedValue {
    /// Store `name` verbatim. The empty string is accepted.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase `name`, the argument.
    ///
    /// The stored name is never consulted: `NamedValue::new("Foo").to_lower("BAR")`
    /// is `"bar"`. Callers who want the stored name lowered pass `self.name()`.
    pub fn to_lower(&self, name: &str) -> String {
        name.to_lowercase()
    }
}
