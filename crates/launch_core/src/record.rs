use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single launch as returned by the remote source.
///
/// The payload is kept verbatim; nothing in this crate interprets its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaunchRecord(Value);

impl LaunchRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Looks up a top-level field, for consumers that want to display something.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl From<Value> for LaunchRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
