/// Cache module
///
/// Defines the key-value cache contract the token store talks to, plus the
/// Redis and in-memory backends.

use redis::RedisResult;

pub mod memory_cache;
pub mod redis_cache;

pub use memory_cache::MemoryCache;
pub use redis_cache::RedisCache;

/// Opaque get/set/delete-by-key service.
///
/// Errors are returned as the backend produced them.
pub trait KeyValueCache: Send + Sync {
    fn get_value(&self, key: &str) -> impl std::future::Future<Output = RedisResult<Option<String>>> + Send;

    fn set_value(&self, key: &str, value: &str) -> impl std::future::Future<Output = RedisResult<()>> + Send;

    /// Removing an absent key is not an error.
    fn delete_value(&self, key: &str) -> impl std::future::Future<Output = RedisResult<()>> + Send;
}
