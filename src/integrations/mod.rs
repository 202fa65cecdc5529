// src/integrations/mod.rs
//
// External Integrations Module

pub mod api;

pub use api::{
    AccountApi, AdminApi, ApiClient, CatalogApi, ContentFilter, LoginResponse, TokenProvider,
};

#[cfg(test)]
pub use api::{MockAccountApi, MockAdminApi, MockCatalogApi};
