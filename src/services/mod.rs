// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services own the session, route reads through the tiered resolver and
// decide when a mutation may land on the device instead of the backend.

pub mod admin_service;
pub mod auth_service;
pub mod content_service;
pub mod favorites_service;
pub mod promotion_service;
pub mod region_service;
pub mod report_service;
pub mod session;
pub mod subscription_service;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod auth_service_tests;
#[cfg(test)]
mod favorites_service_tests;
#[cfg(test)]
mod admin_service_tests;

pub use admin_service::AdminService;
pub use auth_service::AuthService;
pub use content_service::ContentService;
pub use favorites_service::{BulkRemoval, FavoritesService, StorageTier};
pub use promotion_service::PromotionService;
pub use region_service::RegionService;
pub use report_service::ReportService;
pub use session::{Identity, SessionContext};
pub use subscription_service::{SubscriptionService, DEFAULT_PAYMENT_DELAY};
