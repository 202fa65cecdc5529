// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO event emission
// - Explicit SQL only

pub mod favorites_repository;
pub mod report_repository;
pub mod session_repository;
pub mod subscription_repository;

pub use favorites_repository::{FavoritesRepository, SqliteFavoritesRepository};
pub use report_repository::{LocalReport, ReportRepository, SqliteReportRepository};
pub use session_repository::{SessionRepository, SqliteSessionRepository, StoredSession};
pub use subscription_repository::{SqliteSubscriptionRepository, SubscriptionRepository};

#[cfg(test)]
pub use favorites_repository::MockFavoritesRepository;

/// Fresh in-memory store with the schema applied
#[cfg(test)]
pub(crate) fn test_pool() -> std::sync::Arc<crate::db::ConnectionPool> {
    let pool = crate::db::create_memory_pool().unwrap();
    crate::db::initialize_database(&pool.get().unwrap()).unwrap();
    std::sync::Arc::new(pool)
}
