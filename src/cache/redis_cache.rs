use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, RedisResult};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::cache::KeyValueCache;

/// Redis backed cache.
///
/// The address is parsed when the cache is built, so a malformed URL fails
/// immediately. The connection is opened on first use and shared by every
/// later call; when the server drops it, the manager reconnects and the
/// calls after the failed one go through the new connection.
pub struct RedisCache {
    client: Client,
    conn: OnceCell<ConnectionManager>,
}

impl RedisCache {
    pub fn new(url: &str) -> RedisResult<Self> {
        let client = Client::open(url)?;
        Ok(Self { client, conn: OnceCell::new() })
    }

    async fn connection(&self) -> RedisResult<ConnectionManager> {
        self.conn
            .get_or_try_init(|| async {
                debug!("opening redis connection");
                self.client.get_connection_manager().await
            })
            .await
            .cloned()
    }
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCache")
            .field("connected", &self.conn.initialized())
            .finish_non_exhaustive()
    }
}

impl KeyValueCache for RedisCache {
    async fn get_value(&self, key: &str) -> RedisResult<Option<String>> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set_value(&self, key: &str, value: &str) -> RedisResult<()> {
        let mut conn = self.connection().await?;
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn delete_value(&self, key: &str) -> RedisResult<()> {
        let mut conn = self.connection().await?;
        let _: () = conn.del(key).await?;
        Ok(())
    }
}
