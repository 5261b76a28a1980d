use std::sync::Arc;

use uuid::Uuid;

use super::store::SessionStore;

/// Storage key holding the session id.
pub const SESSION_KEY: &str = "health_agent_session_id";

/// Hands out the opaque per-profile session id used to correlate remote calls.
///
/// The first call in a storage scope generates a v4 UUID and persists it;
/// every later call returns the same value. There is no expiry or rotation.
#[derive(Clone)]
pub struct SessionIdentityProvider {
    store: Arc<dyn SessionStore>,
}

impl SessionIdentityProvider {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the persisted session id, creating it on first use.
    ///
    /// When the store fails, a fresh id is returned for this call only. Remote
    /// correlation across calls is lost in that case.
    pub async fn session_id(&self) -> String {
        let candidate = Uuid::new_v4().to_string();
        match self.store.get_or_insert(SESSION_KEY, candidate.clone()).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(
                    "[SessionIdentity] Storage unavailable, using ephemeral id: {}",
                    e
                );
                candidate
            }
        }
    }

    /// Forgets the persisted id; the next call creates a new one.
    pub async fn clear(&self) -> crate::Result<()> {
        self.store.remove(SESSION_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AssistantError, Result};
    use crate::session::store::InMemorySessionStore;
    use async_trait::async_trait;

    struct BrokenStore;

    #[async_trait]
    impl SessionStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(AssistantError::storage("unavailable"))
        }

        async fn get_or_insert(&self, _key: &str, _value: String) -> Result<String> {
            Err(AssistantError::storage("unavailable"))
        }

        async fn remove(&self, _key: &str) -> Result<()> {
            Err(AssistantError::storage("unavailable"))
        }
    }

    #[tokio::test]
    async fn test_id_is_stable() {
        let provider = SessionIdentityProvider::new(Arc::new(InMemorySessionStore::new()));
        let first = provider.session_id().await;
        let second = provider.session_id().await;
        assert_eq!(first, second);
        assert!(Uuid::parse_str(&first).is_ok());
    }

    #[tokio::test]
    async fn test_id_is_shared_through_store() {
        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());
        let a = SessionIdentityProvider::new(store.clone());
        let b = SessionIdentityProvider::new(store.clone());
        assert_eq!(a.session_id().await, b.session_id().await);
        assert_eq!(
            store.get(SESSION_KEY).await.unwrap(),
            Some(a.session_id().await)
        );
    }

    #[tokio::test]
    async fn test_clear_rotates_id() {
        let provider = SessionIdentityProvider::new(Arc::new(InMemorySessionStore::new()));
        let first = provider.session_id().await;
        provider.clear().await.unwrap();
        assert_ne!(provider.session_id().await, first);
    }

    #[tokio::test]
    async fn test_broken_store_degrades_to_ephemeral_ids() {
        let provider = SessionIdentityProvider::new(Arc::new(BrokenStore));
        let first = provider.session_id().await;
        let second = provider.session_id().await;
        assert_ne!(first, second);
    }
}
