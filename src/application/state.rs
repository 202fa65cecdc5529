// src/application/state.rs
//
// Composition root. Everything is built once at start-up and shared
// through Arc; the session is restored from disk before any service runs.

use std::sync::Arc;

use crate::cache::{CacheStore, SqliteCacheStore, TieredResolver};
use crate::config::AppConfig;
use crate::db::{create_connection_pool, create_memory_pool, initialize_database, ConnectionPool};
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{AccountApi, AdminApi, ApiClient, CatalogApi, TokenProvider};
use crate::repositories::{
    FavoritesRepository, ReportRepository, SessionRepository, SqliteFavoritesRepository,
    SqliteReportRepository, SqliteSessionRepository, SqliteSubscriptionRepository,
    SubscriptionRepository,
};
use crate::services::{
    AdminService, AuthService, ContentService, FavoritesService, PromotionService, RegionService,
    ReportService, SessionContext, SubscriptionService,
};

/// Application state shared by every command
pub struct AppState {
    pub config: AppConfig,
    pub pool: Arc<ConnectionPool>,
    pub event_bus: Arc<EventBus>,
    pub session: Arc<SessionContext>,
    pub auth_service: Arc<AuthService>,
    pub content_service: Arc<ContentService>,
    pub region_service: Arc<RegionService>,
    pub promotion_service: Arc<PromotionService>,
    pub favorites_service: Arc<FavoritesService>,
    pub report_service: Arc<ReportService>,
    pub subscription_service: Arc<SubscriptionService>,
    pub admin_service: Arc<AdminService>,
}

impl AppState {
    /// Opens the database under `config.data_dir`
    pub fn initialize(config: AppConfig) -> AppResult<Self> {
        let pool = create_connection_pool(&config.data_dir)?;
        log::info!("Local store at {}", config.data_dir.display());
        Self::with_pool(config, pool)
    }

    /// Nothing touches the disk; state is lost on exit
    pub fn in_memory(config: AppConfig) -> AppResult<Self> {
        Self::with_pool(config, create_memory_pool()?)
    }

    fn with_pool(config: AppConfig, pool: ConnectionPool) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        {
            let conn = pool.get()?;
            initialize_database(&conn)?;
        }
        let pool = Arc::new(pool);
        let event_bus = Arc::new(EventBus::new());

        // 2. REPOSITORIES
        let session_repo: Arc<dyn SessionRepository> =
            Arc::new(SqliteSessionRepository::new(pool.clone()));
        let favorites_repo: Arc<dyn FavoritesRepository> =
            Arc::new(SqliteFavoritesRepository::new(pool.clone()));
        let report_repo: Arc<dyn ReportRepository> =
            Arc::new(SqliteReportRepository::new(pool.clone()));
        let subscription_repo: Arc<dyn SubscriptionRepository> =
            Arc::new(SqliteSubscriptionRepository::new(pool.clone()));
        let cache_store: Arc<dyn CacheStore> = Arc::new(SqliteCacheStore::new(pool.clone()));

        // 3. SESSION + BACKEND CLIENT
        let session = Arc::new(SessionContext::restore(
            session_repo,
            subscription_repo.get()?,
        )?);
        let tokens: Arc<dyn TokenProvider> = session.clone();
        let client = Arc::new(ApiClient::new(
            &config.api_base_url,
            config.request_timeout(),
            tokens,
        )?);
        let catalog: Arc<dyn CatalogApi> = client.clone();
        let account: Arc<dyn AccountApi> = client.clone();
        let admin: Arc<dyn AdminApi> = client;

        let resolver = TieredResolver::new(cache_store).with_event_bus((*event_bus).clone());

        // 4. SERVICES
        let auth_service = Arc::new(AuthService::new(
            account.clone(),
            session.clone(),
            subscription_repo.clone(),
            resolver.clone(),
            event_bus.clone(),
        ));
        let content_service = Arc::new(ContentService::new(
            catalog.clone(),
            resolver.clone(),
            session.clone(),
            event_bus.clone(),
        ));
        let region_service = Arc::new(RegionService::new(catalog.clone(), resolver.clone()));
        let promotion_service = Arc::new(PromotionService::new(catalog.clone(), resolver.clone()));
        let favorites_service = Arc::new(FavoritesService::new(
            catalog.clone(),
            favorites_repo,
            resolver,
            event_bus.clone(),
        ));
        let report_service = Arc::new(ReportService::new(catalog, report_repo, event_bus.clone()));
        let subscription_service = Arc::new(SubscriptionService::new(
            account,
            subscription_repo,
            session.clone(),
            auth_service.clone(),
            event_bus.clone(),
            config.payment_delay(),
        ));
        let admin_service = Arc::new(AdminService::new(admin, session.clone()));

        Ok(Self {
            config,
            pool,
            event_bus,
            session,
            auth_service,
            content_service,
            region_service,
            promotion_service,
            favorites_service,
            report_service,
            subscription_service,
            admin_service,
        })
    }
}
