// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

const DATABASE_FILE: &str = "ivoculture.db";

/// Get the database file path inside `data_dir`, creating the directory if needed.
///
/// Path structure: {data_dir}/ivoculture.db
pub fn get_database_path(data_dir: &Path) -> AppResult<PathBuf> {
    std::fs::create_dir_all(data_dir).map_err(AppError::Io)?;
    Ok(data_dir.join(DATABASE_FILE))
}

/// Create a connection pool for the database under `data_dir`
pub fn create_connection_pool(data_dir: &Path) -> AppResult<ConnectionPool> {
    let db_path = get_database_path(data_dir)?;
    create_pool_at(&db_path)
}

/// Create a connection pool on an explicit database file
///
/// Pool configuration:
/// - Max 8 connections (the cache is small, contention is low)
/// - SQLite in WAL mode so cache reads never block on writes
/// - Busy timeout set to avoid immediate errors
pub fn create_pool_at(db_path: &Path) -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::file(db_path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        Ok(())
    });

    let pool = Pool::builder()
        .max_size(8)
        .build(manager)
        .map_err(|e| AppError::Other(format!("Failed to create connection pool: {}", e)))?;

    log::debug!("SQLite pool opened at {}", db_path.display());
    Ok(pool)
}

/// Single-connection in-memory pool (tests, or running without a data directory).
///
/// The connection is never recycled, otherwise the in-memory database would be lost.
pub fn create_memory_pool() -> AppResult<ConnectionPool> {
    let manager = SqliteConnectionManager::memory()
        .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));

    Pool::builder()
        .max_size(1)
        .min_idle(Some(1))
        .idle_timeout(None)
        .max_lifetime(None)
        .build(manager)
        .map_err(|e| AppError::Other(format!("Failed to create in-memory pool: {}", e)))
}

/// Get a connection from the pool
///
/// This is a convenience wrapper that provides better error messages.
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_path_creation() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("ivoculture");
        let path = get_database_path(&nested).unwrap();
        assert!(path.ends_with("ivoculture/ivoculture.db"));
        assert!(nested.is_dir());
    }

    #[test]
    fn test_file_pool_uses_wal() {
        let dir = tempfile::tempdir().unwrap();
        let pool = create_connection_pool(dir.path()).unwrap();
        let conn = get_connection(&pool).unwrap();

        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
    }

    #[test]
    fn test_memory_pool_keeps_state() {
        let pool = create_memory_pool().unwrap();
        {
            let conn = get_connection(&pool).unwrap();
            conn.execute_batch("CREATE TABLE t (x INTEGER); INSERT INTO t VALUES (7);")
                .unwrap();
        }
        let conn = get_connection(&pool).unwrap();
        let x: i64 = conn.query_row("SELECT x FROM t", [], |row| row.get(0)).unwrap();
        assert_eq!(x, 7);
    }
}
