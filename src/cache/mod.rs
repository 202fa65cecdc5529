// src/cache/mod.rs
//
// Offline fallback chain: structured keys, the key-value store and the
// tiered resolver built on top of them.

pub mod key;
pub mod resolver;
pub mod store;


pub use key::CacheKey;
pub use resolver::{Provenance, Resolved, TieredResolver};
pub use store::{CacheStore, MemoryCacheStore, SqliteCacheStore};

#[cfg(test)]
pub use store::MockCacheStore;
