use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::auth;

/// The whole data set: one JSON object whose array-valued top-level keys are
/// collections of records. Non-array keys are tolerated in the file but are
/// not served as collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    collections: Map<String, Value>,
}

impl Document {
    /// Build a document from a JSON value. Anything but an object becomes an
    /// empty document.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(collections) => Self { collections },
            _ => Self::default(),
        }
    }

    /// Names of all array-valued keys, in document order.
    pub fn collection_names(&self) -> Vec<String> {
        self.collections
            .iter()
            .filter(|(_, v)| v.is_array())
            .map(|(k, _)| k.clone())
            .collect()
    }

    pub fn has_collection(&self, name: &str) -> bool {
        self.collections.get(name).map(Value::is_array).unwrap_or(false)
    }

    pub fn collection(&self, name: &str) -> Option<&Vec<Value>> {
        self.collections.get(name).and_then(Value::as_array)
    }

    /// Mutable access to a collection, creating it when the key is absent.
    /// Fails when the key exists but holds something other than an array.
    pub fn collection_mut(&mut self, name: &str) -> Result<&mut Vec<Value>, super::StoreError> {
        let slot = self
            .collections
            .entry(name.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        match slot.as_array_mut() {
            Some(records) => Ok(records),
            None => Err(super::StoreError::NotACollection(name.to_string())),
        }
    }

    /// Seed the collections the auth layer depends on: a default admin user
    /// when no user exists, and an empty `sessions` list.
    pub fn bootstrap(&mut self) {
        let has_users = self
            .collection("users")
            .map(|records| !records.is_empty())
            .unwrap_or(false);
        if !has_users {
            self.collections.insert(
                "users".to_string(),
                json!([{
                    "id": 1,
                    "email": "admin@example.com",
                    "password": "password",
                    "name": "Admin",
                    "full_name": "Admin",
                    "roles": [auth::default_role()],
                }]),
            );
        }

        if !self.has_collection("sessions") {
            self.collections
                .insert("sessions".to_string(), Value::Array(Vec::new()));
        }
    }
}
