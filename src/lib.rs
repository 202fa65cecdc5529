// src/lib.rs
// IvoCulture - Offline-resilient client core for the Ivorian cultural catalogue
//
// Architecture:
// - Tiered reads: every catalogue read goes remote -> cache -> static dataset
// - Explicit session: token, account or offline profile, owned by AppState
// - Local fallback for favorites and reports when the backend is unreachable
// - Event-driven: services announce what happened on the EventBus
// - Application Layer: DTOs and commands for the CLI

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod cache;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod fallback;
pub mod logging;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    AdminStats, Category, ContentType, CulturalContent, LocalProfile, LocalProfileKind,
    NewAccount, NewContent, PaymentMethod, Plan, PremiumSubscription, Promotion, PromotionType,
    Region, ReportReason, ReportReceipt, User, CATEGORIES,
};

// ============================================================================
// PUBLIC API - Errors, Config
// ============================================================================

pub use config::AppConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Cache & Events
// ============================================================================

pub use cache::{CacheKey, CacheStore, MemoryCacheStore, Provenance, Resolved, SqliteCacheStore, TieredResolver};
pub use events::{
    create_event_bus, ContentCreated, ContentReported, DomainEvent, EventBus, EventLogEntry,
    FallbackServed, FavoritesChanged, PremiumActivated, SessionEnded, SessionStarted,
};

// ============================================================================
// PUBLIC API - Database & Repositories
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use repositories::{
    FavoritesRepository, ReportRepository, SessionRepository, SqliteFavoritesRepository,
    SqliteReportRepository, SqliteSessionRepository, SqliteSubscriptionRepository,
    SubscriptionRepository,
};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    AdminService, AuthService, ContentService, FavoritesService, Identity, PromotionService,
    RegionService, ReportService, SessionContext, StorageTier, SubscriptionService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{AccountApi, AdminApi, ApiClient, CatalogApi, TokenProvider};
