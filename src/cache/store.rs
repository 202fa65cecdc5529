// src/cache/store.rs
//
// Key-value persistence behind the tiered resolver.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use tokio::sync::RwLock;

use crate::cache::CacheKey;
use crate::db::ConnectionPool;
use crate::error::AppResult;

/// Serialized values addressed by [`CacheKey`]. Entries never expire.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &CacheKey) -> AppResult<Option<String>>;
    async fn set(&self, key: &CacheKey, value: String) -> AppResult<()>;
    async fn remove(&self, key: &CacheKey) -> AppResult<()>;
    async fn remove_all(&self, keys: &[CacheKey]) -> AppResult<()>;
}

// ============================================================================
// SQLITE
// ============================================================================

pub struct SqliteCacheStore {
    pool: Arc<ConnectionPool>,
}

impl SqliteCacheStore {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CacheStore for SqliteCacheStore {
    async fn get(&self, key: &CacheKey) -> AppResult<Option<String>> {
        let pool = Arc::clone(&self.pool);
        let key = key.to_string();

        tokio::task::spawn_blocking(move || -> AppResult<Option<String>> {
            let conn = pool.get()?;
            let value = conn
                .query_row(
                    "SELECT value FROM cache_entries WHERE cache_key = ?1",
                    params![key],
                    |row| row.get(0),
                )
                .optional()?;
            Ok(value)
        })
        .await?
    }

    async fn set(&self, key: &CacheKey, value: String) -> AppResult<()> {
        let pool = Arc::clone(&self.pool);
        let key = key.to_string();

        tokio::task::spawn_blocking(move || -> AppResult<()> {
            let conn = pool.get()?;
            conn.execute(
                "INSERT INTO cache_entries (cache_key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(cache_key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value, Utc::now().to_rfc3339()],
            )?;
            Ok(())
        })
        .await?
    }

    async fn remove(&self, key: &CacheKey) -> AppResult<()> {
        self.remove_all(std::slice::from_ref(key)).await
    }

    async fn remove_all(&self, keys: &[CacheKey]) -> AppResult<()> {
        let pool = Arc::clone(&self.pool);
        let keys: Vec<String> = keys.iter().map(ToString::to_string).collect();

        tokio::task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = pool.get()?;
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare("DELETE FROM cache_entries WHERE cache_key = ?1")?;
                for key in &keys {
                    stmt.execute(params![key])?;
                }
            }
            tx.commit()?;
            Ok(())
        })
        .await?
    }
}

// ============================================================================
// IN-MEMORY
// ============================================================================

/// Process-local store, used when no database is available and in tests
#[derive(Default)]
pub struct MemoryCacheStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
    async fn get(&self, key: &CacheKey) -> AppResult<Option<String>> {
        Ok(self.entries.read().await.get(&key.to_string()).cloned())
    }

    async fn set(&self, key: &CacheKey, value: String) -> AppResult<()> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &CacheKey) -> AppResult<()> {
        self.entries.write().await.remove(&key.to_string());
        Ok(())
    }

    async fn remove_all(&self, keys: &[CacheKey]) -> AppResult<()> {
        let mut entries = self.entries.write().await;
        for key in keys {
            entries.remove(&key.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool_at, initialize_database};
    use tempfile::TempDir;

    fn sqlite_store() -> (TempDir, SqliteCacheStore) {
        let dir = TempDir::new().unwrap();
        let pool = create_pool_at(&dir.path().join("cache.db")).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        (dir, SqliteCacheStore::new(Arc::new(pool)))
    }

    #[tokio::test]
    async fn test_sqlite_set_get_overwrite() {
        let (_dir, store) = sqlite_store();
        let key = CacheKey::Regions;

        assert_eq!(store.get(&key).await.unwrap(), None);

        store.set(&key, "[1]".to_string()).await.unwrap();
        store.set(&key, "[2]".to_string()).await.unwrap();

        assert_eq!(store.get(&key).await.unwrap().as_deref(), Some("[2]"));
    }

    #[tokio::test]
    async fn test_sqlite_keys_are_isolated() {
        let (_dir, store) = sqlite_store();

        store.set(&CacheKey::RegionDetail(1), "a".to_string()).await.unwrap();
        store.set(&CacheKey::RegionDetail(2), "b".to_string()).await.unwrap();
        store.remove(&CacheKey::RegionDetail(1)).await.unwrap();

        assert_eq!(store.get(&CacheKey::RegionDetail(1)).await.unwrap(), None);
        assert_eq!(
            store.get(&CacheKey::RegionDetail(2)).await.unwrap().as_deref(),
            Some("b")
        );
    }

    #[tokio::test]
    async fn test_sqlite_survives_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cache.db");

        {
            let pool = create_pool_at(&path).unwrap();
            initialize_database(&pool.get().unwrap()).unwrap();
            let store = SqliteCacheStore::new(Arc::new(pool));
            store.set(&CacheKey::Favorites, "[3]".to_string()).await.unwrap();
        }

        let pool = create_pool_at(&path).unwrap();
        let store = SqliteCacheStore::new(Arc::new(pool));
        assert_eq!(
            store.get(&CacheKey::Favorites).await.unwrap().as_deref(),
            Some("[3]")
        );
    }

    #[tokio::test]
    async fn test_memory_remove_all() {
        let store = MemoryCacheStore::new();
        for key in CacheKey::SESSION_SCOPED {
            store.set(&key, "[]".to_string()).await.unwrap();
        }
        store.set(&CacheKey::Regions, "[]".to_string()).await.unwrap();

        store.remove_all(&CacheKey::SESSION_SCOPED).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert!(store.get(&CacheKey::Regions).await.unwrap().is_some());
    }
}
