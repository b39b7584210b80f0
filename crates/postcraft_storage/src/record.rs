use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// All values stored for one session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct SessionRecord {
    /// Last modification time
    updated_at: DateTime<Utc>,
    /// Stored values by key
    #[serde(default)]
    values: Map<String, Value>,
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRecord {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self {
            updated_at: Utc::now(),
            values: Map::new(),
        }
    }

    /// Gets a value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Sets a value and bumps the modification time.
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        debug!(key = %key, "Setting session value");
        self.values.insert(key, value);
        self.updated_at = Utc::now();
    }

    /// Removes a value, returning it if present.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let removed = self.values.remove(key);
        if removed.is_some() {
            debug!(key = %key, "Removed session value");
            self.updated_at = Utc::now();
        }
        removed
    }

    /// Whether no values are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
