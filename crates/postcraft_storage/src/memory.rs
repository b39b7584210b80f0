use crate::SessionRecord;
use async_trait::async_trait;
use postcraft_error::PostcraftResult;
use postcraft_interface::{SessionStore, validate_token};
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Process-local session store.
///
/// Sessions are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions holding at least one value.
    pub async fn session_count(&self) -> usize {
        self.sessions
            .read()
            .await
            .values()
            .filter(|record| !record.is_empty())
            .count()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, token: &str, key: &str) -> PostcraftResult<Option<Value>> {
        validate_token(token)?;
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(token)
            .and_then(|record| record.get(key))
            .cloned())
    }

    async fn set(&self, token: &str, key: &str, value: Value) -> PostcraftResult<()> {
        validate_token(token)?;
        let mut sessions = self.sessions.write().await;
        sessions.entry(token.to_string()).or_default().set(key, value);
        Ok(())
    }

    async fn delete(&self, token: &str, key: &str) -> PostcraftResult<()> {
        validate_token(token)?;
        let mut sessions = self.sessions.write().await;
        if let Some(record) = sessions.get_mut(token) {
            record.remove(key);
            if record.is_empty() {
                sessions.remove(token);
                debug!("Dropped empty in-memory session");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemorySessionStore::new();
        store.set("alice", "current_topic", json!("A")).await.unwrap();
        store.set("bob", "current_topic", json!("B")).await.unwrap();

        assert_eq!(
            store.get("alice", "current_topic").await.unwrap(),
            Some(json!("A"))
        );
        assert_eq!(
            store.get("bob", "current_topic").await.unwrap(),
            Some(json!("B"))
        );
        assert_eq!(store.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_delete_absent_key_is_ok() {
        let store = InMemorySessionStore::new();
        store.delete("nobody", "current_topic").await.unwrap();

        store.set("alice", "k", json!(1)).await.unwrap();
        store.delete("alice", "k").await.unwrap();
        assert_eq!(store.get("alice", "k").await.unwrap(), None);
        assert_eq!(store.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_blank_token_rejected() {
        let store = InMemorySessionStore::new();
        assert!(store.get("", "k").await.is_err());
        assert!(store.set(" ", "k", json!(1)).await.is_err());
    }
}
