pub mod client;
pub mod traits;
pub mod wire;


pub use client::{ApiClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use traits::{AccountApi, AdminApi, CatalogApi, ContentFilter, TokenProvider};
pub use wire::LoginResponse;

#[cfg(test)]
pub use traits::{MockAccountApi, MockAdminApi, MockCatalogApi};
