// src/services/test_support.rs
//
// Shared fixtures for the service suites: an in-memory database, a memory
// cache and a bus whose log the tests inspect.

use std::sync::Arc;

use crate::cache::{CacheStore, MemoryCacheStore, TieredResolver};
use crate::domain::{CulturalContent, User};
use crate::error::AppError;
use crate::events::EventBus;
use crate::repositories::{
    test_pool, SqliteFavoritesRepository, SqliteReportRepository, SqliteSessionRepository,
    SqliteSubscriptionRepository,
};
use crate::services::session::SessionContext;

pub(crate) struct Harness {
    pub session: Arc<SessionContext>,
    pub cache: Arc<MemoryCacheStore>,
    pub resolver: TieredResolver,
    pub event_bus: Arc<EventBus>,
    pub favorites: Arc<SqliteFavoritesRepository>,
    pub reports: Arc<SqliteReportRepository>,
    pub subscriptions: Arc<SqliteSubscriptionRepository>,
}

impl Harness {
    pub fn new() -> Self {
        let pool = test_pool();
        let event_bus = Arc::new(EventBus::new());
        let cache = Arc::new(MemoryCacheStore::new());
        let store: Arc<dyn CacheStore> = cache.clone();
        let resolver = TieredResolver::new(store).with_event_bus((*event_bus).clone());

        Self {
            session: Arc::new(SessionContext::new(Arc::new(SqliteSessionRepository::new(
                pool.clone(),
            )))),
            cache,
            resolver,
            event_bus,
            favorites: Arc::new(SqliteFavoritesRepository::new(pool.clone())),
            reports: Arc::new(SqliteReportRepository::new(pool.clone())),
            subscriptions: Arc::new(SqliteSubscriptionRepository::new(pool)),
        }
    }

    /// Harness with a signed-in account
    pub fn signed_in(admin: bool) -> Self {
        let harness = Self::new();
        harness
            .session
            .start_account("token-abc".to_string(), user(7, admin))
            .unwrap();
        harness
    }

    pub fn emitted(&self, event_type: &str) -> usize {
        self.event_bus
            .get_event_log()
            .iter()
            .filter(|entry| entry.event_type == event_type)
            .count()
    }
}

pub(crate) fn user(id: i64, is_admin: bool) -> User {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "email": format!("user{}@ivoculture.ci", id),
        "username": format!("user{}", id),
        "nom_complet": "Awa Koné",
        "is_admin": is_admin,
    }))
    .unwrap()
}

pub(crate) fn content(id: i64, titre: &str) -> CulturalContent {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "titre": titre,
        "type_contenu": "masque",
        "description": "Masque dan de la région de Man",
    }))
    .unwrap()
}

pub(crate) fn offline() -> AppError {
    AppError::Network("connection refused".to_string())
}

pub(crate) fn server_error() -> AppError {
    AppError::Http {
        status: 503,
        message: "Service indisponible".to_string(),
    }
}
