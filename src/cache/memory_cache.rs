use std::collections::HashMap;
use std::sync::Arc;

use redis::RedisResult;
use tokio::sync::RwLock;

use crate::cache::KeyValueCache;

/// In-process cache: key -> value, no expiry
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self { inner: Arc::new(RwLock::new(HashMap::new())) }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}

impl KeyValueCache for MemoryCache {
    async fn get_value(&self, key: &str) -> RedisResult<Option<String>> {
        Ok(self.inner.read().await.get(key).cloned())
    }

    async fn set_value(&self, key: &str, value: &str) -> RedisResult<()> {
        let mut map = self.inner.write().await;
        map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn delete_value(&self, key: &str) -> RedisResult<()> {
        self.inner.write().await.remove(key);
        Ok(())
    }
}
