pub mod cached_response;
pub mod error;
pub mod memory;
pub mod noop;
pub mod redis_cache;
pub mod response_cache;

pub use cached_response::CachedResponse;
pub use error::{CacheError, Result};
pub use memory::InMemoryResponseCache;
pub use noop::NoopResponseCache;
pub use redis_cache::{DEFAULT_KEY_PREFIX, RedisResponseCache};
pub use response_cache::ResponseCache;

#[cfg(test)]
mod tests;
