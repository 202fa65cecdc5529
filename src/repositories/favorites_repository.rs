// src/repositories/favorites_repository.rs
//
// Favorite content ids recorded on the device while offline.

use std::sync::Arc;
use chrono::Utc;
use rusqlite::params;

use crate::db::ConnectionPool;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait FavoritesRepository: Send + Sync {
    /// Ids in insertion order
    fn list_ids(&self) -> AppResult<Vec<i64>>;
    /// Returns false when the id was already present
    fn add(&self, content_id: i64) -> AppResult<bool>;
    fn remove(&self, content_id: i64) -> AppResult<()>;
    /// Deletes every id in one transaction and returns how many existed
    fn remove_many(&self, content_ids: &[i64]) -> AppResult<usize>;
}

pub struct SqliteFavoritesRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteFavoritesRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl FavoritesRepository for SqliteFavoritesRepository {
    fn list_ids(&self) -> AppResult<Vec<i64>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT content_id FROM local_favorites ORDER BY added_at, rowid",
        )?;

        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<i64>, _>>()?;

        Ok(ids)
    }

    fn add(&self, content_id: i64) -> AppResult<bool> {
        let conn = self.pool.get()?;

        let inserted = conn.execute(
            "INSERT OR IGNORE INTO local_favorites (content_id, added_at) VALUES (?1, ?2)",
            params![content_id, Utc::now().to_rfc3339()],
        )?;

        Ok(inserted > 0)
    }

    fn remove(&self, content_id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "DELETE FROM local_favorites WHERE content_id = ?1",
            params![content_id],
        )?;
        Ok(())
    }

    fn remove_many(&self, content_ids: &[i64]) -> AppResult<usize> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let mut removed = 0;
        {
            let mut stmt = tx.prepare("DELETE FROM local_favorites WHERE content_id = ?1")?;
            for id in content_ids {
                removed += stmt.execute(params![id])?;
            }
        }
        tx.commit()?;

        Ok(removed)
    }
}
