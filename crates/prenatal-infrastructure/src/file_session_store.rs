//! File-backed session store.
//!
//! Values are kept in a single TOML table. Every access goes through
//! [`AtomicTomlFile`], so `get_or_insert` is an atomic check-and-set even
//! when several processes share the file.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use prenatal_core::session::SessionStore;
use prenatal_core::{AssistantError, Result};
use serde::{Deserialize, Serialize};

use crate::paths::AssistantPaths;
use crate::storage::AtomicTomlFile;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(default)]
    values: BTreeMap<String, String>,
}

#[derive(Clone)]
pub struct FileSessionStore {
    file: Arc<AtomicTomlFile<SessionFile>>,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
        }
    }

    /// Store at the default session file location.
    pub fn new_default(paths: &AssistantPaths) -> Result<Self> {
        let path = paths
            .session_file()
            .map_err(|e| AssistantError::storage(e.to_string()))?;
        tracing::debug!("[FileSessionStore] Using {}", path.display());
        Ok(Self::new(path))
    }

    /// Runs blocking file work off the async executor.
    async fn blocking<F, R>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&AtomicTomlFile<SessionFile>) -> Result<R> + Send + 'static,
        R: Send + 'static,
    {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || f(&file))
            .await
            .map_err(|e| AssistantError::storage(format!("Storage task failed: {}", e)))?
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let key = key.to_string();
        self.blocking(move |file| {
            Ok(file
                .load()?
                .and_then(|mut data| data.values.remove(&key)))
        })
        .await
    }

    async fn get_or_insert(&self, key: &str, value: String) -> Result<String> {
        let key = key.to_string();
        self.blocking(move |file| {
            let stored = file.update(SessionFile::default(), |data| {
                match data.values.get(&key) {
                    Some(existing) => (existing.clone(), false),
                    None => {
                        data.values.insert(key, value.clone());
                        (value, true)
                    }
                }
            })?;
            Ok(stored)
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_string();
        self.blocking(move |file| {
            file.update(SessionFile::default(), |data| {
                let removed = data.values.remove(&key).is_some();
                ((), removed)
            })?;
            Ok(())
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prenatal_core::session::{SESSION_KEY, SessionIdentityProvider};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_value_survives_new_store_instance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");

        let first = FileSessionStore::new(path.clone())
            .get_or_insert("k", "a".into())
            .await
            .unwrap();
        // A fresh instance plays the role of a page reload
        let second = FileSessionStore::new(path)
            .get_or_insert("k", "b".into())
            .await
            .unwrap();

        assert_eq!(first, "a");
        assert_eq!(second, "a");
    }

    #[tokio::test]
    async fn test_get_and_remove() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileSessionStore::new(temp_dir.path().join("session.toml"));

        assert_eq!(store.get("k").await.unwrap(), None);
        store.get_or_insert("k", "v".into()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v"));

        store.remove("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
        // Removing a missing key is fine
        store.remove("k").await.unwrap();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_initialization_agrees_on_one_id() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::new(FileSessionStore::new(path.clone()));
            handles.push(tokio::spawn(async move {
                SessionIdentityProvider::new(store).session_id().await
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.dedup();
        assert_eq!(ids.len(), 1);

        let stored = FileSessionStore::new(path).get(SESSION_KEY).await.unwrap();
        assert_eq!(stored.as_deref(), Some(ids[0].as_str()));
    }

    #[tokio::test]
    async fn test_unreadable_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");
        std::fs::write(&path, "values = 3").unwrap();

        let err = FileSessionStore::new(path).get("k").await.unwrap_err();
        assert!(err.is_storage());
    }
}
