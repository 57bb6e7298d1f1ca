use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Name of the field holding the record key in the encoded form
pub const KEY_FIELD: &str = "key";

/// A record addressed by its `key`, carrying any number of extra named fields.
///
/// The key is both part of the payload and the index the store locates the
/// record under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    key: String,
    #[serde(flatten)]
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new(key: impl Into<String>) -> Self {
        Record {
            key: key.into(),
            fields: BTreeMap::new(),
        }
    }

    /// add a named field, replacing any previous value under the same name
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_keeps_last_value_per_field() {
        let record = Record::new("user:1")
            .with_field("value", "Alice")
            .with_field("value", "Bob")
            .with_field("age", 42);

        assert_eq!(record.key(), "user:1");
        assert_eq!(record.field("value"), Some(&json!("Bob")));
        assert_eq!(record.field("age"), Some(&json!(42)));
        assert_eq!(record.fields().len(), 2);
        assert_eq!(record.field("missing"), None);
    }
}
