use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

use crate::error::Result;

/// HTTP capability: one JSON POST, parsed JSON back.
///
/// Implementations send `Content-Type: application/json` and return the
/// response body parsed as JSON. Transport failures and non-JSON bodies
/// surface as `Err`; status codes are not checked explicitly.
#[async_trait]
pub trait HttpPoster: Send + Sync {
    async fn post_json(&self, path: &str, body: Value) -> Result<Value>;
}

/// Navigation capability, the `window.location` analog: whole-page navigation
/// replacing the current view.
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn navigate(&self, target: &str) -> Result<()>;
}

/// Transient key/value retention, the `localStorage` analog. Writes are
/// wholesale overwrites; last writer wins.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn set(&self, key: &str, value: String) -> Result<()>;
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

/// User-visible alert capability, the blocking `alert()` analog.
#[async_trait]
pub trait AlertSink: Send + Sync {
    async fn alert(&self, message: &str);
}

/// In-memory implementation of KeyValueStore
pub struct InMemoryKeyValueStore {
    entries: Arc<DashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).map(|entry| entry.clone()))
    }
}
