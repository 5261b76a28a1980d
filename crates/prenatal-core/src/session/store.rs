//! Session storage trait.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::Result;

/// Persistent key-value storage scoped to one browser profile / user.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Returns the stored value for `key`, storing `value` first if absent.
    ///
    /// The check and the write must be atomic with respect to other callers
    /// of the same store.
    async fn get_or_insert(&self, key: &str, value: String) -> Result<String>;

    async fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local store. Values live as long as the store.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn get_or_insert(&self, key: &str, value: String) -> Result<String> {
        let mut values = self.values.lock().await;
        Ok(values.entry(key.to_string()).or_insert(value).clone())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.values.lock().await.remove(key);
        Ok(())
    }
}
